/*
 * Copyright (C) Simon Werner, 2019.
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

use std::io;
use std::path::Path;

use log::trace;
use num_traits::{Float, NumCast};
use rustfft::{num_complex::Complex, FftPlanner};

use crate::errors::WindowError;
use crate::registry::WindowType;

/// Magnitudes below this are clamped when converting to decibels.
pub const RESPONSE_FLOOR_DB: f64 = -400.0;

///
/// A computed window.  This can be applied to frames of samples, analysed,
/// and exported as CSV.
///
/// This `Window` is created by `WindowOptionsBuilder`.
///
/// # Example
///
/// ```Rust
///   let window = WindowOptionsBuilder::new(1024)
///     .set_window(WindowType::Hann)
///     .periodic()
///     .build()?;
///
///   window.apply(&mut frame)?;
/// ```
///
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    window_type: WindowType, // The family the coefficients were computed from
    sym: bool,               // Symmetric, or periodic when false
    coefficients: Vec<f64>,
}

impl Window {
    pub(crate) fn new(window_type: WindowType, sym: bool, coefficients: Vec<f64>) -> Self {
        Window {
            window_type,
            sym,
            coefficients,
        }
    }

    pub fn window_type(&self) -> WindowType {
        self.window_type
    }

    pub fn is_symmetric(&self) -> bool {
        self.sym
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn into_coefficients(self) -> Vec<f64> {
        self.coefficients
    }

    ///
    /// Multiply each sample of `frame` by the matching window coefficient.
    ///
    /// # Arguments
    ///
    ///  * `frame` - The samples, `f32` or `f64`.  Must be the same length as
    ///              the window.
    ///
    pub fn apply<T: Float>(&self, frame: &mut [T]) -> Result<(), WindowError> {
        if frame.len() != self.len() {
            return Err(WindowError::LengthMismatch {
                expected: self.len(),
                actual: frame.len(),
            });
        }

        frame
            .iter_mut()
            .zip(self.coefficients.iter())
            .for_each(|(x, &w)| *x = *x * <T as NumCast>::from(w).unwrap_or_else(T::zero));

        Ok(())
    }

    ///
    /// The mean of the coefficients, i.e. the amplitude gain a sinusoid at
    /// a bin centre sees.  `None` for an empty window.
    ///
    pub fn coherent_gain(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(self.coefficients.iter().sum::<f64>() / self.len() as f64)
    }

    ///
    /// The equivalent noise bandwidth in bins, `N * sum(w^2) / sum(w)^2`.
    /// `None` when the window is empty or its coefficients sum to zero.
    ///
    pub fn enbw(&self) -> Option<f64> {
        let sum: f64 = self.coefficients.iter().sum();
        if self.is_empty() || sum == 0.0 {
            return None;
        }
        let sum_sq: f64 = self.coefficients.iter().map(|w| w * w).sum();
        Some(self.len() as f64 * sum_sq / (sum * sum))
    }

    ///
    /// Compute the magnitude response of the window, zero padded to `n_fft`
    /// points.
    ///
    /// # Arguments
    ///
    ///  * `n_fft` - The number of FFT bins.  Must be at least the window length
    ///              and greater than zero.
    ///
    /// # Returns
    ///
    /// The response in dB relative to its peak, with the zero frequency bin
    /// moved to index `n_fft / 2`.  Values are clamped to [RESPONSE_FLOOR_DB].
    ///
    pub fn frequency_response(&self, n_fft: usize) -> Result<Vec<f64>, WindowError> {
        if n_fft == 0 || n_fft < self.len() {
            return Err(WindowError::InvalidArgument(
                "fft length must be at least the window length",
            ));
        }

        // Compute the FFT plan
        let mut planner = FftPlanner::<f64>::new();
        let fft_fn = planner.plan_fft_forward(n_fft);

        let mut inplace_buf: Vec<Complex<f64>> = vec![Complex::new(0., 0.); n_fft];
        let mut scratch_buf: Vec<Complex<f64>> =
            vec![Complex::new(0., 0.); fft_fn.get_inplace_scratch_len()];

        self.coefficients
            .iter()
            .map(|&w| Complex::new(w, 0.0))
            .zip(inplace_buf.iter_mut())
            .for_each(|(c, v)| *v = c);

        fft_fn.process_with_scratch(&mut inplace_buf, &mut scratch_buf);

        let mut magnitude: Vec<f64> = inplace_buf.iter().map(|c| c.norm()).collect();
        let peak = magnitude.iter().cloned().fold(0.0, f64::max);
        trace!("{} response: n_fft={}, peak={}", self.window_type, n_fft, peak);

        // Zero frequency in the middle
        magnitude.rotate_right(n_fft / 2);

        Ok(magnitude
            .into_iter()
            .map(|m| {
                if peak > 0.0 {
                    (20.0 * (m / peak).log10()).max(RESPONSE_FLOOR_DB)
                } else {
                    RESPONSE_FLOOR_DB
                }
            })
            .collect())
    }

    fn write_records<W: io::Write>(&self, writer: &mut csv::Writer<W>) -> Result<(), WindowError> {
        writer.write_record(["n", "w"])?;
        for (n, w) in self.coefficients.iter().enumerate() {
            writer.write_record(&[n.to_string(), w.to_string()])?;
        }
        writer.flush()?;
        Ok(())
    }

    ///
    /// Write the coefficients as CSV, one `n,w` record per sample.
    ///
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), WindowError> {
        let mut writer = csv::Writer::from_writer(writer);
        self.write_records(&mut writer)
    }

    ///
    /// Save the coefficients as a CSV file.
    ///
    /// # Arguments
    ///
    ///  * `fname` - The path to the CSV to save to the filesystem.
    ///
    pub fn to_csv(&self, fname: &Path) -> Result<(), WindowError> {
        let mut writer = csv::Writer::from_path(fname)?;
        self.write_records(&mut writer)
    }
}
