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

use log::debug;

use crate::errors::WindowError;
use crate::registry::WindowType;
use crate::utility::window_length;
use crate::window::Window;

///
/// A builder struct that will output a [Window] when complete.  Only the
/// number of points is required, by default the window is a symmetric
/// boxcar.
///
/// # Example
///
/// ```Rust
///   let window = WindowOptionsBuilder::new(2048)
///     .set_window(WindowType::BlackmanHarris)
///     .periodic()
///     .build()?;
/// ```
///
#[derive(Debug, Clone)]
pub struct WindowOptionsBuilder {
    num_points: usize,        // Number of points in the window
    window_type: WindowType,  // The window family
    sym: bool,                // Symmetric, or periodic when false
    do_normalise: bool,       // Scale the peak to 1.0
}

impl WindowOptionsBuilder {
    /// Create a new WindowOptionsBuilder.
    ///
    /// # Arguments
    ///
    ///  * `num_points` - Number of points in the window.  Zero gives an
    ///                   empty window.
    ///
    pub fn new(num_points: usize) -> Self {
        WindowOptionsBuilder {
            num_points,
            window_type: WindowType::default(),
            sym: true,
            do_normalise: false,
        }
    }

    /// Create a new WindowOptionsBuilder from a real valued length, e.g.
    /// one read from user input.  Lengths of zero or less give an empty
    /// window, a fractional length is an error.
    pub fn from_length(length: f64) -> Result<Self, WindowError> {
        Ok(Self::new(window_length(length)?))
    }

    /// The window family to use.  See
    /// (here)[https://en.wikipedia.org/wiki/Window_function] for more details.
    ///
    /// # Arguments
    ///
    ///  * `window_type` - The window family to be used.
    ///
    pub fn set_window(mut self, window_type: WindowType) -> Self {
        self.window_type = window_type;
        self
    }

    /// Set the window family by name, e.g. `hanning` or `gaussian(2.5)`.
    pub fn set_window_name(self, name: &str) -> Result<Self, WindowError> {
        let window_type = name.parse()?;
        Ok(self.set_window(window_type))
    }

    ///
    /// Produce the periodic (DFT-even) form, for spectral analysis.
    ///
    pub fn periodic(mut self) -> Self {
        self.sym = false;
        self
    }

    ///
    /// Produce the symmetric form, for filter design.  This is the default.
    ///
    pub fn symmetric(mut self) -> Self {
        self.sym = true;
        self
    }

    ///
    /// Scale the window so the largest coefficient is 1.0.
    ///
    pub fn normalise(mut self) -> Self {
        self.do_normalise = true;
        self
    }

    ///
    /// The final method to be called.  This will compute the [Window].
    ///
    pub fn build(self) -> Result<Window, WindowError> {
        debug!(
            "computing {} window: num_points={}, sym={}",
            self.window_type, self.num_points, self.sym
        );

        let mut coefficients = self.window_type.generate(self.num_points, self.sym)?;

        //
        // Normalise
        //

        if self.do_normalise {
            let max = coefficients.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            if max > 0.0 {
                for x in coefficients.iter_mut() {
                    *x /= max;
                }
            }
        }

        Ok(Window::new(self.window_type, self.sym, coefficients))
    }
}
