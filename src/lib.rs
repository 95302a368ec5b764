/*
 * Copyright (C) Simon Werner, 2022
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

//! Window functions for spectral analysis and filter design.
//!
//! Each window family is a plain function, e.g. [hann] or [gaussian], that
//! returns the requested number of weights in either symmetric or periodic
//! (DFT-even) form.  [WindowType] and [get_window] select a window by name,
//! and [WindowOptionsBuilder] produces a [Window] that can be applied to
//! frames of samples, analysed and saved as CSV.
//!
//! ```Rust
//!   let w = dsp_windows::hann(8, false);
//!
//!   let window = WindowOptionsBuilder::new(1024)
//!     .set_window_name("blackmanharris")?
//!     .periodic()
//!     .build()?;
//!   println!("ENBW: {:?} bins", window.enbw());
//! ```

extern crate csv;

mod builder;
mod errors;
mod registry;
mod utility;
mod window;
mod window_fn;
mod wrappers;

pub use builder::WindowOptionsBuilder;
pub use errors::WindowError;
pub use registry::{get_window, WindowType, REGISTRY};
pub use utility::{linspace, range, window_length};
pub use window::{Window, RESPONSE_FLOOR_DB};
pub use window_fn::*;
pub use wrappers::{dft_even, trivial_case, windowed};
