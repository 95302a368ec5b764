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

//! The window functions.
//!
//! Every function returns `m` weights.  When `sym` is `true` the window is
//! symmetric, as used for filter design.  When `sym` is `false` an even
//! length window is periodic (DFT-even), as used for spectral analysis.

use std::f64::consts::PI;

use crate::errors::WindowError;
use crate::utility::{linspace, range};
use crate::wrappers::{trivial_case, windowed};

/// Signature shared by all the windows without a shape parameter.
pub type WindowFn = fn(usize, bool) -> Vec<f64>;

const NUTTALL: [f64; 4] = [0.3635819, 0.4891775, 0.1365995, 0.0106411];
const BLACKMAN_HARRIS: [f64; 4] = [0.35875, 0.48829, 0.14128, 0.01168];
const FLATTOP: [f64; 5] = [0.2156, 0.4160, 0.2781, 0.0836, 0.0069];

/// The sample indices `0, 1, .., m - 1`.
fn indices(m: usize) -> Vec<f64> {
    range(0.0, m as f64, 1.0)
}

/// `a0 - a1 cos(x) + a2 cos(2x) - ...` with `x = 2 pi n / (m - 1)`.
fn cosine_sum(m: usize, a: &[f64]) -> Vec<f64> {
    indices(m)
        .into_iter()
        .map(|n| n * 2.0 * PI / (m as f64 - 1.0))
        .map(|fac| {
            a.iter()
                .enumerate()
                .map(|(k, ak)| {
                    let term = ak * f64::cos(k as f64 * fac);
                    if k % 2 == 0 {
                        term
                    } else {
                        -term
                    }
                })
                .sum::<f64>()
        })
        .collect()
}

fn check_positive(value: f64, msg: &'static str) -> Result<(), WindowError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WindowError::InvalidArgument(msg))
    }
}

/// Boxcar or rectangular window.  This is the same as applying no window.
pub fn boxcar(m: usize, sym: bool) -> Vec<f64> {
    trivial_case(m, sym, |m, _| vec![1.0; m])
}

/// Triangular window.  Unlike [bartlett] the end points are not zero.
pub fn triang(m: usize, sym: bool) -> Vec<f64> {
    windowed(m, sym, |m| {
        let n = range(1.0, ((m + 1) / 2 + 1) as f64, 1.0);

        let mut w: Vec<f64> = if m % 2 == 0 {
            n.iter().map(|x| (2.0 * x - 1.0) / m as f64).collect()
        } else {
            n.iter().map(|x| 2.0 * x / (m as f64 + 1.0)).collect()
        };

        // Mirror, the centre point of an odd window only appears once
        let skip = m % 2;
        let tail: Vec<f64> = w.iter().rev().skip(skip).copied().collect();
        w.extend(tail);
        w
    })
}

/// Parzen window, a piecewise cubic approximation of the Gaussian.
pub fn parzen(m: usize, sym: bool) -> Vec<f64> {
    windowed(m, sym, |m| {
        let m = m as f64;
        let half = m / 2.0;
        let n = range(-(m - 1.0) / 2.0, (m - 1.0) / 2.0 + 0.5, 1.0);

        let outer: Vec<f64> = n
            .iter()
            .filter(|&&x| x < -(m - 1.0) / 4.0)
            .map(|x| 2.0 * (1.0 - x.abs() / half).powi(3))
            .collect();
        let inner = n
            .iter()
            .filter(|&&x| x.abs() <= (m - 1.0) / 4.0)
            .map(|x| {
                let r = x.abs() / half;
                1.0 - 6.0 * r.powi(2) + 6.0 * r.powi(3)
            });

        outer
            .iter()
            .copied()
            .chain(inner)
            .chain(outer.iter().rev().copied())
            .collect()
    })
}

/// Bohman window, the convolution of two half-duration cosine lobes.
pub fn bohman(m: usize, sym: bool) -> Vec<f64> {
    windowed(m, sym, |m| {
        let grid = linspace(-1.0, 1.0, Some(m));

        let mut w = Vec::with_capacity(m);
        w.push(0.0);
        w.extend(grid[1..m - 1].iter().map(|x| {
            let x = x.abs();
            (1.0 - x) * f64::cos(PI * x) + 1.0 / PI * f64::sin(PI * x)
        }));
        w.push(0.0);
        w
    })
}

/// Blackman window.
pub fn blackman(m: usize, sym: bool) -> Vec<f64> {
    windowed(m, sym, |m| {
        let d = m as f64 - 1.0;
        indices(m)
            .into_iter()
            .map(|x| 0.42 - 0.5 * f64::cos(2.0 * PI * x / d) + 0.08 * f64::cos(4.0 * PI * x / d))
            .collect()
    })
}

/// Minimum 4-term Blackman-Harris window according to Nuttall.
pub fn nuttall(m: usize, sym: bool) -> Vec<f64> {
    windowed(m, sym, |m| cosine_sum(m, &NUTTALL))
}

/// Minimum 4-term Blackman-Harris window.
pub fn blackmanharris(m: usize, sym: bool) -> Vec<f64> {
    windowed(m, sym, |m| cosine_sum(m, &BLACKMAN_HARRIS))
}

/// Flat top window.  The peak is slightly above 1.0 and some samples are
/// negative.
pub fn flattop(m: usize, sym: bool) -> Vec<f64> {
    windowed(m, sym, |m| cosine_sum(m, &FLATTOP))
}

/// Bartlett window, a triangle with zero valued end points.
pub fn bartlett(m: usize, sym: bool) -> Vec<f64> {
    windowed(m, sym, |m| {
        let d = m as f64 - 1.0;
        indices(m)
            .into_iter()
            .map(|x| {
                if x <= d / 2.0 {
                    2.0 * x / d
                } else {
                    2.0 - 2.0 * x / d
                }
            })
            .collect()
    })
}

/// Hann window.
pub fn hann(m: usize, sym: bool) -> Vec<f64> {
    windowed(m, sym, |m| {
        let d = m as f64 - 1.0;
        indices(m)
            .into_iter()
            .map(|x| 0.5 - 0.5 * f64::cos(2.0 * PI * x / d))
            .collect()
    })
}

/// Another name for [hann].
pub fn hanning(m: usize, sym: bool) -> Vec<f64> {
    hann(m, sym)
}

/// Modified Bartlett-Hann window.
pub fn barthann(m: usize, sym: bool) -> Vec<f64> {
    windowed(m, sym, |m| {
        indices(m)
            .into_iter()
            .map(|x| (x / (m as f64 - 1.0) - 0.5).abs())
            .map(|f| 0.62 - 0.48 * f + 0.38 * f64::cos(2.0 * PI * f))
            .collect()
    })
}

/// Hamming window.
pub fn hamming(m: usize, sym: bool) -> Vec<f64> {
    windowed(m, sym, |m| {
        let d = m as f64 - 1.0;
        indices(m)
            .into_iter()
            .map(|x| 0.54 - 0.46 * f64::cos(2.0 * PI * x / d))
            .collect()
    })
}

/// Cosine (sine) window.
pub fn cosine(m: usize, sym: bool) -> Vec<f64> {
    windowed(m, sym, |m| {
        indices(m)
            .into_iter()
            .map(|x| f64::sin(PI / m as f64 * (x + 0.5)))
            .collect()
    })
}

///
/// Gaussian window.
///
/// # Arguments
///
///  * `m` - Number of points in the window.
///  * `std` - The standard deviation, in samples.  Must be positive.
///  * `sym` - Symmetric or periodic.
///
pub fn gaussian(m: usize, std: f64, sym: bool) -> Result<Vec<f64>, WindowError> {
    check_positive(std, "gaussian std must be positive")?;

    let sig2 = 2.0 * std.powi(2);
    Ok(windowed(m, sym, |m| {
        let centre = (m as f64 - 1.0) / 2.0;
        indices(m)
            .into_iter()
            .map(|x| f64::exp(-(x - centre).powi(2) / sig2))
            .collect()
    }))
}

///
/// Generalised Gaussian window.  `p = 1` is the same as [gaussian] with
/// `std = sig`, `p = 0.5` gives the shape of the Laplace distribution.
///
/// # Arguments
///
///  * `m` - Number of points in the window.
///  * `p` - Shape parameter.  Must be positive.
///  * `sig` - The standard deviation, in samples.  Must be positive.
///  * `sym` - Symmetric or periodic.
///
pub fn general_gaussian(m: usize, p: f64, sig: f64, sym: bool) -> Result<Vec<f64>, WindowError> {
    check_positive(p, "general_gaussian p must be positive")?;
    check_positive(sig, "general_gaussian sig must be positive")?;

    Ok(windowed(m, sym, |m| {
        let centre = (m as f64 - 1.0) / 2.0;
        indices(m)
            .into_iter()
            .map(|x| f64::exp(-0.5 * ((x - centre) / sig).abs().powf(2.0 * p)))
            .collect()
    }))
}

/// A weighted sum of cosines with alternating signs, the family that
/// [hann], [hamming], [blackman], [nuttall], [blackmanharris] and [flattop]
/// belong to.
pub fn general_cosine(m: usize, a: &[f64], sym: bool) -> Result<Vec<f64>, WindowError> {
    if a.is_empty() {
        return Err(WindowError::InvalidArgument("general_cosine needs at least one coefficient"));
    }
    if a.iter().any(|ak| !ak.is_finite()) {
        return Err(WindowError::InvalidArgument("general_cosine coefficients must be finite"));
    }

    Ok(windowed(m, sym, |m| cosine_sum(m, a)))
}

/// Generalised Hamming window, `alpha - (1 - alpha) cos(2 pi n / (m - 1))`.
/// `alpha = 0.5` is [hann] and `alpha = 0.54` is [hamming].
pub fn general_hamming(m: usize, alpha: f64, sym: bool) -> Vec<f64> {
    windowed(m, sym, |m| cosine_sum(m, &[alpha, 1.0 - alpha]))
}

///
/// Tukey window, a flat top with cosine tapers.
///
/// # Arguments
///
///  * `alpha` - The fraction of the window inside the tapers.  At or below
///              zero this is a [boxcar], at or above one it is a [hann].
///
pub fn tukey(m: usize, alpha: f64, sym: bool) -> Vec<f64> {
    if alpha <= 0.0 {
        return boxcar(m, sym);
    } else if alpha >= 1.0 {
        return hann(m, sym);
    }

    windowed(m, sym, |m| {
        let d = m as f64 - 1.0;
        let width = (alpha * d / 2.0).floor() as usize;

        indices(m)
            .into_iter()
            .enumerate()
            .map(|(i, x)| {
                if i <= width {
                    0.5 * (1.0 + f64::cos(PI * (-1.0 + 2.0 * x / alpha / d)))
                } else if i < m - width - 1 {
                    1.0
                } else {
                    0.5 * (1.0 + f64::cos(PI * (-2.0 / alpha + 1.0 + 2.0 * x / alpha / d)))
                }
            })
            .collect()
    })
}

///
/// Exponential (Poisson) window.
///
/// # Arguments
///
///  * `m` - Number of points in the window.
///  * `center` - Position of the peak.  Defaults to the centre of the window
///               and may only be moved for a periodic window.
///  * `tau` - The decay, in samples.  Must be positive.
///  * `sym` - Symmetric or periodic.
///
pub fn exponential(
    m: usize,
    center: Option<f64>,
    tau: f64,
    sym: bool,
) -> Result<Vec<f64>, WindowError> {
    check_positive(tau, "exponential tau must be positive")?;
    if sym && center.is_some() {
        return Err(WindowError::InvalidArgument(
            "exponential center can only be set for a periodic window",
        ));
    }
    if let Some(c) = center {
        if !c.is_finite() {
            return Err(WindowError::InvalidArgument("exponential center must be finite"));
        }
    }

    Ok(windowed(m, sym, |m| {
        let centre = center.unwrap_or((m as f64 - 1.0) / 2.0);
        indices(m)
            .into_iter()
            .map(|x| f64::exp(-(x - centre).abs() / tau))
            .collect()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::abs_diff_eq;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{:?} != {:?}", actual, expected);
        for (a, e) in actual.iter().zip(expected) {
            assert!(
                abs_diff_eq!(*a, *e, epsilon = 1e-12),
                "{:?} != {:?}",
                actual,
                expected
            );
        }
    }

    const ALL: [(&str, WindowFn); 14] = [
        ("boxcar", boxcar),
        ("triang", triang),
        ("parzen", parzen),
        ("bohman", bohman),
        ("blackman", blackman),
        ("nuttall", nuttall),
        ("blackmanharris", blackmanharris),
        ("flattop", flattop),
        ("bartlett", bartlett),
        ("hann", hann),
        ("hanning", hanning),
        ("barthann", barthann),
        ("hamming", hamming),
        ("cosine", cosine),
    ];

    #[test]
    fn test_boxcar() {
        assert_eq!(boxcar(10, true), vec![1.0; 10]);
        assert_eq!(boxcar(4, false), vec![1.0; 4]);
    }

    #[test]
    fn test_triang() {
        assert_close(&triang(4, true), &[0.25, 0.75, 0.75, 0.25]);
        assert_close(&triang(4, false), &[1.0 / 3.0, 2.0 / 3.0, 1.0, 2.0 / 3.0]);
        assert_close(&triang(3, true), &[0.5, 1.0, 0.5]);
        assert_close(&triang(3, false), &[0.5, 1.0, 0.5]);
    }

    #[test]
    fn test_parzen() {
        assert_close(&parzen(4, true), &[0.03125, 0.71875, 0.71875, 0.03125]);
        assert_close(&parzen(4, false), &[0.016, 0.424, 1.0, 0.424]);
        assert_close(&parzen(3, true), &[0.0740740740740741, 1.0, 0.0740740740740741]);
        assert_close(&parzen(3, false), &[0.0740740740740741, 1.0, 0.0740740740740741]);
    }

    #[test]
    fn test_bohman() {
        assert_close(&bohman(4, true), &[0.0, 0.6089977810442295, 0.6089977810442295, 0.0]);
        assert_close(&bohman(4, false), &[0.0, 0.31830988618379075, 1.0, 0.31830988618379075]);
        assert_close(&bohman(3, true), &[0.0, 1.0, 0.0]);
        assert_close(&bohman(3, false), &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_blackman() {
        assert_close(&blackman(4, true), &[0.0, 0.63, 0.63, 0.0]);
        assert_close(&blackman(4, false), &[0.0, 0.34, 1.0, 0.34]);
        assert_close(&blackman(3, true), &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_nuttall() {
        assert_close(&nuttall(4, true), &[0.0003628, 0.5292298, 0.5292298, 0.0003628]);
        assert_close(&nuttall(4, false), &[0.0003628, 0.2269824, 1.0, 0.2269824]);
        assert_close(&nuttall(3, false), &[0.0003628, 1.0, 0.0003628]);
    }

    #[test]
    fn test_blackmanharris() {
        assert_close(&blackmanharris(4, true), &[0.00006, 0.520575, 0.520575, 0.00006]);
        assert_close(&blackmanharris(4, false), &[0.00006, 0.21747, 1.0, 0.21747]);
        assert_close(&blackmanharris(3, true), &[0.00006, 1.0, 0.00006]);
    }

    #[test]
    fn test_flattop() {
        assert_close(&flattop(4, true), &[0.001, 0.1975, 0.1975, 0.001]);
        assert_close(&flattop(4, false), &[0.001, -0.0556, 1.0002, -0.0556]);
        assert_close(&flattop(3, true), &[0.001, 1.0002, 0.001]);
    }

    #[test]
    fn test_bartlett() {
        assert_close(&bartlett(4, true), &[0.0, 2.0 / 3.0, 2.0 / 3.0, 0.0]);
        assert_close(&bartlett(4, false), &[0.0, 0.5, 1.0, 0.5]);
        assert_close(&bartlett(3, true), &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_hann() {
        assert_close(&hann(4, true), &[0.0, 0.75, 0.75, 0.0]);
        assert_close(&hann(4, false), &[0.0, 0.5, 1.0, 0.5]);
        assert_close(&hann(3, true), &[0.0, 1.0, 0.0]);
        assert_eq!(hanning(16, false), hann(16, false));
    }

    #[test]
    fn test_barthann() {
        assert_close(&barthann(4, true), &[0.0, 0.73, 0.73, 0.0]);
        assert_close(&barthann(4, false), &[0.0, 0.5, 1.0, 0.5]);
        assert_close(&barthann(3, true), &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_hamming() {
        assert_close(&hamming(4, true), &[0.08, 0.77, 0.77, 0.08]);
        assert_close(&hamming(4, false), &[0.08, 0.54, 1.0, 0.54]);
        assert_close(&hamming(3, true), &[0.08, 1.0, 0.08]);
    }

    #[test]
    fn test_cosine() {
        assert_close(&cosine(4, true), &[0.3826834323650898, 0.9238795325112867, 0.9238795325112867, 0.3826834323650898]);
        assert_close(&cosine(4, false), &[0.3090169943749474, 0.8090169943749475, 1.0, 0.8090169943749475]);
        assert_close(&cosine(3, true), &[0.5, 1.0, 0.5]);
    }

    #[test]
    fn test_gaussian() {
        let w = gaussian(5, 1.0, true).unwrap();
        let e1 = f64::exp(-0.5);
        let e2 = f64::exp(-2.0);
        assert_close(&w, &[e2, e1, 1.0, e1, e2]);

        // The periodic form peaks off centre
        let w = gaussian(4, 1.0, false).unwrap();
        assert_close(&w, &[e2, e1, 1.0, e1]);

        assert!(matches!(gaussian(8, 0.0, true), Err(WindowError::InvalidArgument(_))));
        assert!(matches!(gaussian(8, -2.0, true), Err(WindowError::InvalidArgument(_))));
        assert!(matches!(gaussian(8, f64::NAN, true), Err(WindowError::InvalidArgument(_))));
    }

    #[test]
    fn test_general_gaussian() {
        // p = 1 is a Gaussian
        let a = general_gaussian(9, 1.0, 2.0, true).unwrap();
        let b = gaussian(9, 2.0, true).unwrap();
        assert_close(&a, &b);

        let w = general_gaussian(3, 0.5, 1.0, true).unwrap();
        let e = f64::exp(-0.5);
        assert_close(&w, &[e, 1.0, e]);

        assert!(general_gaussian(8, 1.5, 0.0, true).is_err());
        assert!(general_gaussian(8, 0.0, 1.0, true).is_err());
        assert!(general_gaussian(8, -2.0, 1.0, true).is_err());
        assert!(general_gaussian(0, f64::NAN, 1.0, true).is_err());
    }

    #[test]
    fn test_general_cosine() {
        assert_close(&general_cosine(9, &[0.42, 0.5, 0.08], true).unwrap(), &blackman(9, true));
        assert_close(&general_cosine(8, &NUTTALL, false).unwrap(), &nuttall(8, false));
        assert!(general_cosine(8, &[], true).is_err());
        assert!(general_cosine(8, &[0.5, f64::INFINITY], true).is_err());
    }

    #[test]
    fn test_general_hamming() {
        assert_close(&general_hamming(9, 0.54, true), &hamming(9, true));
        assert_close(&general_hamming(10, 0.5, false), &hann(10, false));
    }

    #[test]
    fn test_tukey() {
        assert_close(&tukey(5, 0.5, true), &[0.0, 1.0, 1.0, 1.0, 0.0]);
        assert_close(&tukey(5, 0.0, true), &boxcar(5, true));
        assert_close(&tukey(6, 1.0, false), &hann(6, false));

        let w = tukey(9, 0.5, true);
        assert_close(&w, &[0.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_exponential() {
        let w = exponential(3, None, 1.0, true).unwrap();
        let e = f64::exp(-1.0);
        assert_close(&w, &[e, 1.0, e]);

        let w = exponential(4, Some(0.0), 1.0, false).unwrap();
        assert_close(&w, &[1.0, e, e * e, e * e * e]);

        assert!(exponential(4, Some(0.0), 1.0, true).is_err());
        assert!(exponential(4, None, 0.0, true).is_err());
    }

    #[test]
    fn test_degenerate_lengths() {
        for (name, f) in ALL.iter() {
            assert!(f(0, true).is_empty(), "{}", name);
            assert!(f(0, false).is_empty(), "{}", name);
            assert_eq!(f(1, true), vec![1.0], "{}", name);
            assert_eq!(f(1, false), vec![1.0], "{}", name);
        }
        assert_eq!(gaussian(1, 3.0, false).unwrap(), vec![1.0]);
        assert!(general_gaussian(0, 1.0, 3.0, true).unwrap().is_empty());
    }

    #[test]
    fn test_lengths() {
        for (name, f) in ALL.iter() {
            for m in 0..33 {
                assert_eq!(f(m, true).len(), m, "{} m={}", name, m);
                assert_eq!(f(m, false).len(), m, "{} m={}", name, m);
            }
        }
    }

    #[test]
    fn test_symmetric_is_palindrome() {
        for (name, f) in ALL.iter() {
            for m in 2..33 {
                let w = f(m, true);
                let rev: Vec<f64> = w.iter().rev().copied().collect();
                assert_close(&w, &rev);
                assert!(w.iter().all(|x| x.is_finite()), "{} m={}", name, m);
            }
        }
    }

    #[test]
    fn test_periodic_is_truncated_symmetric() {
        for (_, f) in ALL.iter() {
            for m in (2..33).step_by(2) {
                let periodic = f(m, false);
                let longer = f(m + 1, true);
                assert_eq!(periodic[..], longer[..m]);
            }
            // Odd lengths are not extended
            for m in (3..33).step_by(2) {
                assert_eq!(f(m, false), f(m, true));
            }
        }
    }

    #[test]
    fn test_deterministic() {
        for (_, f) in ALL.iter() {
            let a = f(31, false);
            let b = f(31, false);
            assert!(a.iter().zip(&b).all(|(x, y)| x.to_bits() == y.to_bits()));
        }
    }

    #[test]
    fn test_peak_is_one() {
        // Odd symmetric windows reach 1.0 at the centre
        for (name, f) in ALL.iter().filter(|(name, _)| *name != "flattop") {
            let w = f(17, true);
            assert!(abs_diff_eq!(w[8], 1.0, epsilon = 1e-12), "{} {}", name, w[8]);
        }
    }
}
