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

use crate::errors::WindowError;

///
/// Generate the values from `start` up to, but not including, `stop`,
/// advancing by `step` each time.
///
/// An empty vector is returned when `step` points away from `stop`, when
/// `start == stop`, when `step` is zero or when any argument is not finite.
///
/// # Arguments
///
/// * `start` - The first value of the sequence.
/// * `stop` - The sequence stops before reaching this value.
/// * `step` - The difference between two neighbouring values.
///
/// # Returns
///
/// The evenly spaced values of the half-open interval `[start, stop)`.
///
pub fn range(start: f64, stop: f64, step: f64) -> Vec<f64> {
  if !(start.is_finite() && stop.is_finite() && step.is_finite()) || step == 0.0 {
    return vec![];
  }
  if (step > 0.0 && start >= stop) || (step < 0.0 && start <= stop) {
    return vec![];
  }

  (0..)
    .map(|i| start + i as f64 * step)
    .take_while(|&x| if step > 0.0 { x < stop } else { x > stop })
    .collect()
}

///
/// Generate `num` evenly spaced samples over the closed interval
/// `[start, stop]`.
///
/// Each value is computed directly as `(i * stop + (num - 1 - i) * start) / (num - 1)`
/// so no rounding error accumulates over the sequence.  As with [range], a
/// non-finite `start` or `stop` gives an empty vector.
///
/// # Arguments
///
/// * `start` - The first value of the sequence.
/// * `stop` - The last value of the sequence.
/// * `num` - The number of samples.  When `None` this is
///           `max(round(stop - start) + 1, 1)`.
///
pub fn linspace(start: f64, stop: f64, num: Option<usize>) -> Vec<f64> {
  if !start.is_finite() || !stop.is_finite() {
    return vec![];
  }

  // Round half up, then clamp
  let num = num.unwrap_or_else(|| ((stop - start + 0.5).floor() + 1.0).max(1.0) as usize);

  if num < 2 {
    return if num == 1 { vec![start] } else { vec![] };
  }

  let last = num - 1;
  let mut ret = vec![0.0; num];
  for i in (0..num).rev() {
    ret[i] = (i as f64 * stop + (last - i) as f64 * start) / last as f64;
  }
  ret
}

///
/// Convert a real valued window length to a sample count.
///
/// Lengths of zero or below give an empty window.  A length with a
/// fractional part, or one that is not finite, is rejected.
///
pub fn window_length(m: f64) -> Result<usize, WindowError> {
  if !m.is_finite() || m.fract() != 0.0 {
    return Err(WindowError::InvalidArgument("window length must be an integer"));
  }
  if m <= 0.0 {
    return Ok(0);
  }
  if m > usize::MAX as f64 {
    return Err(WindowError::InvalidArgument("window length is too large"));
  }
  Ok(m as usize)
}
