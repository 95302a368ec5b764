/*
 * Copyright (C) Simon Werner, 2022.
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

//! Window lookup by name
//!
//! [WindowType] names every window family, including the shape parameters
//! of the parameterised ones.  [REGISTRY] maps the names of the windows
//! without parameters to their [WindowType], aliases included.  Windows
//! with parameters are written as a call, e.g. `gaussian(2.5)` or
//! `general_gaussian(1.5, 7)`.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::errors::WindowError;
use crate::window_fn::{self, WindowFn};

///
/// The window family to generate.
///
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum WindowType {
  #[default]
  Boxcar,
  Triang,
  Parzen,
  Bohman,
  Blackman,
  Nuttall,
  BlackmanHarris,
  Flattop,
  Bartlett,
  Hann,
  Barthann,
  Hamming,
  Cosine,
  Gaussian { std: f64 },
  GeneralGaussian { p: f64, sig: f64 },
  GeneralHamming { alpha: f64 },
  Tukey { alpha: f64 },
  /// `center` may only be set for periodic windows.
  Exponential { center: Option<f64>, tau: f64 },
}

/// Name to window mapping for the windows without shape parameters.
pub static REGISTRY: &[(&str, WindowType)] = &[
  ("boxcar", WindowType::Boxcar),
  ("rectangular", WindowType::Boxcar),
  ("triang", WindowType::Triang),
  ("parzen", WindowType::Parzen),
  ("bohman", WindowType::Bohman),
  ("blackman", WindowType::Blackman),
  ("nuttall", WindowType::Nuttall),
  ("blackmanharris", WindowType::BlackmanHarris),
  ("flattop", WindowType::Flattop),
  ("bartlett", WindowType::Bartlett),
  ("hann", WindowType::Hann),
  ("hanning", WindowType::Hann),
  ("barthann", WindowType::Barthann),
  ("hamming", WindowType::Hamming),
  ("cosine", WindowType::Cosine),
];

impl WindowType {
  /// The canonical name of the family.
  pub fn name(&self) -> &'static str {
    match self {
      WindowType::Boxcar => "boxcar",
      WindowType::Triang => "triang",
      WindowType::Parzen => "parzen",
      WindowType::Bohman => "bohman",
      WindowType::Blackman => "blackman",
      WindowType::Nuttall => "nuttall",
      WindowType::BlackmanHarris => "blackmanharris",
      WindowType::Flattop => "flattop",
      WindowType::Bartlett => "bartlett",
      WindowType::Hann => "hann",
      WindowType::Barthann => "barthann",
      WindowType::Hamming => "hamming",
      WindowType::Cosine => "cosine",
      WindowType::Gaussian { .. } => "gaussian",
      WindowType::GeneralGaussian { .. } => "general_gaussian",
      WindowType::GeneralHamming { .. } => "general_hamming",
      WindowType::Tukey { .. } => "tukey",
      WindowType::Exponential { .. } => "exponential",
    }
  }

  /// The window function of a family without shape parameters.
  pub fn window_fn(&self) -> Option<WindowFn> {
    let f: WindowFn = match self {
      WindowType::Boxcar => window_fn::boxcar,
      WindowType::Triang => window_fn::triang,
      WindowType::Parzen => window_fn::parzen,
      WindowType::Bohman => window_fn::bohman,
      WindowType::Blackman => window_fn::blackman,
      WindowType::Nuttall => window_fn::nuttall,
      WindowType::BlackmanHarris => window_fn::blackmanharris,
      WindowType::Flattop => window_fn::flattop,
      WindowType::Bartlett => window_fn::bartlett,
      WindowType::Hann => window_fn::hann,
      WindowType::Barthann => window_fn::barthann,
      WindowType::Hamming => window_fn::hamming,
      WindowType::Cosine => window_fn::cosine,
      _ => return None,
    };
    Some(f)
  }

  ///
  /// Compute the window.
  ///
  /// # Arguments
  ///
  /// * `m` - Number of points in the window.
  /// * `sym` - `true` for a symmetric window, `false` for a periodic one.
  ///
  pub fn generate(&self, m: usize, sym: bool) -> Result<Vec<f64>, WindowError> {
    if let Some(f) = self.window_fn() {
      return Ok(f(m, sym));
    }

    match *self {
      WindowType::Gaussian { std } => window_fn::gaussian(m, std, sym),
      WindowType::GeneralGaussian { p, sig } => window_fn::general_gaussian(m, p, sig, sym),
      WindowType::GeneralHamming { alpha } => Ok(window_fn::general_hamming(m, alpha, sym)),
      WindowType::Tukey { alpha } => Ok(window_fn::tukey(m, alpha, sym)),
      WindowType::Exponential { center, tau } => window_fn::exponential(m, center, tau, sym),
      _ => Err(WindowError::UnknownWindow(self.name().to_string())),
    }
  }
}

impl fmt::Display for WindowType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      WindowType::Gaussian { std } => write!(f, "gaussian({})", std),
      WindowType::GeneralGaussian { p, sig } => write!(f, "general_gaussian({}, {})", p, sig),
      WindowType::GeneralHamming { alpha } => write!(f, "general_hamming({})", alpha),
      WindowType::Tukey { alpha } => write!(f, "tukey({})", alpha),
      WindowType::Exponential { center: None, tau } => write!(f, "exponential({})", tau),
      WindowType::Exponential {
        center: Some(center),
        tau,
      } => write!(f, "exponential({}, {})", center, tau),
      _ => f.write_str(self.name()),
    }
  }
}

/// Split `name(a, b)` into the name and its arguments.
fn split_call(s: &str) -> Result<(&str, Vec<f64>), WindowError> {
  let s = s.trim();
  let open = match s.find('(') {
    Some(open) => open,
    None => return Ok((s, vec![])),
  };

  let args = s[open + 1..]
    .strip_suffix(')')
    .ok_or(WindowError::InvalidArgument("window arguments are missing a closing ')'"))?;

  let args = args
    .split(',')
    .map(|a| a.trim().parse::<f64>())
    .collect::<Result<Vec<f64>, _>>()
    .map_err(|_| WindowError::InvalidArgument("window arguments must be numbers"))?;

  Ok((s[..open].trim_end(), args))
}

impl FromStr for WindowType {
  type Err = WindowError;

  ///
  /// Parse a window name, e.g. `hann`, `hanning` or `gaussian(2.5)`.
  ///
  /// The parameterised windows take their arguments in the same order as
  /// the window functions themselves: `gaussian(std)`,
  /// `general_gaussian(p, sig)`, `general_hamming(alpha)`, `tukey(alpha)` and
  /// `exponential(tau)` or `exponential(center, tau)`.  The single argument
  /// form of `exponential` is `tau` with the centre left at the middle.
  ///
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let (name, args) = split_call(s)?;
    let name = name.to_ascii_lowercase();

    if args.is_empty() {
      return REGISTRY
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, window)| *window)
        .ok_or_else(|| {
          debug!("no window named '{}'", name);
          WindowError::UnknownWindow(name)
        });
    }

    match (name.as_str(), args.as_slice()) {
      ("gaussian", &[std]) => Ok(WindowType::Gaussian { std }),
      ("general_gaussian", &[p, sig]) => Ok(WindowType::GeneralGaussian { p, sig }),
      ("general_hamming", &[alpha]) => Ok(WindowType::GeneralHamming { alpha }),
      ("tukey", &[alpha]) => Ok(WindowType::Tukey { alpha }),
      ("exponential", &[tau]) => Ok(WindowType::Exponential { center: None, tau }),
      ("exponential", &[center, tau]) => Ok(WindowType::Exponential {
        center: Some(center),
        tau,
      }),
      ("gaussian", _)
      | ("general_gaussian", _)
      | ("general_hamming", _)
      | ("tukey", _)
      | ("exponential", _) => Err(WindowError::InvalidArgument(
        "wrong number of window arguments",
      )),
      _ => Err(WindowError::UnknownWindow(name)),
    }
  }
}

///
/// Compute a window by name.
///
/// # Arguments
///
/// * `name` - The name of the window, see [WindowType::from_str].
/// * `m` - Number of points in the window.
/// * `sym` - `true` for a symmetric window, `false` for a periodic one.
///
pub fn get_window(name: &str, m: usize, sym: bool) -> Result<Vec<f64>, WindowError> {
  name.parse::<WindowType>()?.generate(m, sym)
}
