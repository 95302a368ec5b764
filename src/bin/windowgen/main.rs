/*
 * Copyright (C) Simon Werner, 2019
 *
 * This program is free software; you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation; either version 2 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program; if not, see <http://www.gnu.org/licenses/>.
 */

extern crate clap;
extern crate dsp_windows;

use std::path::Path;

use clap::{App, Arg, ArgMatches};
use log::{error, info};

use dsp_windows::{WindowError, WindowOptionsBuilder, REGISTRY};

const STR_ERR_NUM_POINTS: &str = "Invalid num-points value, it must be a whole number";
const STR_ERR_RESPONSE: &str = "Invalid response value, it must be an integer greater than 0";

fn cli() -> App<'static> {
  App::new("windowgen")
    .version(env!("CARGO_PKG_VERSION"))
    .author("Simon Werner <simonwerner@gmail.com>")
    .about("windowgen - compute a window function and print or save its coefficients.")
    .arg(
      Arg::new("window")
        .short('f')
        .long("window")
        .alias("window-function")
        .value_name("FUNC NAME")
        .help("The window, e.g. `hann`, `gaussian(2.5)` or `general_gaussian(1.5, 7)`")
        .default_value("boxcar")
        .takes_value(true),
    )
    .arg(
      Arg::new("num-points")
        .short('n')
        .long("num-points")
        .value_name("NUM")
        .help("The number of points in the window")
        .required_unless_present("list")
        .allow_hyphen_values(true)
        .takes_value(true),
    )
    .arg(
      Arg::new("periodic")
        .short('p')
        .long("periodic")
        .help("Compute the periodic (DFT-even) window instead of the symmetric one")
        .takes_value(false),
    )
    .arg(
      Arg::new("normalise")
        .long("normalise")
        .help("Scale the window so its peak is 1.0")
        .takes_value(false),
    )
    .arg(
      Arg::new("csv")
        .short('c')
        .long("csv")
        .value_name("FILE")
        .help("Save the coefficients to this CSV file instead of printing them")
        .takes_value(true),
    )
    .arg(
      Arg::new("response")
        .long("response")
        .value_name("NFFT")
        .help("Print the frequency response in dB using an FFT of this length")
        .takes_value(true),
    )
    .arg(
      Arg::new("list")
        .short('l')
        .long("list")
        .help("List the window names and exit")
        .takes_value(false),
    )
}

fn run(matches: &ArgMatches) -> Result<(), WindowError> {
  if matches.is_present("list") {
    for (name, _) in REGISTRY {
      println!("{}", name);
    }
    for name in [
      "gaussian(std)",
      "general_gaussian(p, sig)",
      "general_hamming(alpha)",
      "tukey(alpha)",
      "exponential(center, tau)",
    ] {
      println!("{}", name);
    }
    return Ok(());
  }

  //
  // Get the cli options
  //
  let num_points = matches
    .value_of("num-points")
    .and_then(|n| n.parse::<f64>().ok())
    .ok_or(WindowError::InvalidArgument(STR_ERR_NUM_POINTS))?;
  let window_name = matches.value_of("window").unwrap_or("boxcar");

  let mut builder = WindowOptionsBuilder::from_length(num_points)?.set_window_name(window_name)?;
  if matches.is_present("periodic") {
    builder = builder.periodic();
  }
  if matches.is_present("normalise") {
    builder = builder.normalise();
  }
  let window = builder.build()?;

  info!(
    "{} window, {} points, coherent gain {:?}, ENBW {:?}",
    window.window_type(),
    window.len(),
    window.coherent_gain(),
    window.enbw()
  );

  if let Some(n_fft) = matches.value_of("response") {
    let n_fft = n_fft
      .parse::<usize>()
      .map_err(|_| WindowError::InvalidArgument(STR_ERR_RESPONSE))?;
    for db in window.frequency_response(n_fft)? {
      println!("{}", db);
    }
    return Ok(());
  }

  match matches.value_of("csv") {
    Some(csv_file) => window.to_csv(Path::new(csv_file)),
    None => {
      for w in window.coefficients() {
        println!("{}", w);
      }
      Ok(())
    }
  }
}

fn main() {
  pretty_env_logger::init();

  if let Err(err) = run(&cli().get_matches()) {
    error!("{}", err);
    eprintln!("windowgen: {}", err);
    ::std::process::exit(1);
  }
}
