//! Length handling shared by every window function.
//!
//! The raw formulas only ever see lengths of two or more and always compute
//! the symmetric form.  [trivial_case] catches the degenerate lengths and
//! [dft_even] turns the symmetric formula into the periodic one.  A window is
//! composed as `trivial_case(m, sym, |m, sym| dft_even(m, sym, formula))`, see
//! [windowed].

/// Return an empty window for `m == 0` and `[1.0]` for `m == 1` without
/// evaluating `f`, otherwise call `f` with the arguments unchanged.
pub fn trivial_case<F>(m: usize, sym: bool, f: F) -> Vec<f64>
where
    F: FnOnce(usize, bool) -> Vec<f64>,
{
    match m {
        0 => vec![],
        1 => vec![1.0],
        _ => f(m, sym),
    }
}

/// Produce the periodic (DFT-even) form of a symmetric formula.
///
/// For `sym == false` and an even `m` the formula is evaluated for `m + 1`
/// points and the last point is dropped.  Odd lengths and symmetric windows
/// are passed straight through.
pub fn dft_even<F>(m: usize, sym: bool, formula: F) -> Vec<f64>
where
    F: FnOnce(usize) -> Vec<f64>,
{
    let extend = !sym && m % 2 == 0;

    let mut w = formula(if extend { m + 1 } else { m });
    if extend {
        w.pop();
    }
    w
}

/// Both wrappers in their required order.
pub fn windowed<F>(m: usize, sym: bool, formula: F) -> Vec<f64>
where
    F: FnOnce(usize) -> Vec<f64>,
{
    // The degenerate case must win, a periodic length-1 window is `[1.0]`.
    trivial_case(m, sym, |m, sym| dft_even(m, sym, formula))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Records the length it was asked for and returns that many indices.
    fn indices(m: usize) -> Vec<f64> {
        (0..m).map(|i| i as f64).collect()
    }

    #[test]
    fn test_trivial_case() {
        let never = |_: usize, _: bool| -> Vec<f64> { panic!("formula must not be called") };
        assert!(trivial_case(0, true, never).is_empty());
        assert_eq!(trivial_case(1, true, never), vec![1.0]);
        assert_eq!(trivial_case(1, false, never), vec![1.0]);
        assert_eq!(trivial_case(3, false, |m, sym| {
            assert!(!sym);
            indices(m)
        }), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_dft_even() {
        // Even and periodic: one longer, last point dropped
        assert_eq!(dft_even(4, false, indices), vec![0.0, 1.0, 2.0, 3.0]);
        let mut asked = 0;
        dft_even(4, false, |m| {
            asked = m;
            indices(m)
        });
        assert_eq!(asked, 5);

        // Odd or symmetric: untouched
        dft_even(5, false, |m| {
            assert_eq!(m, 5);
            indices(m)
        });
        dft_even(4, true, |m| {
            assert_eq!(m, 4);
            indices(m)
        });
    }

    #[test]
    fn test_windowed_order() {
        assert_eq!(windowed(1, false, |_| panic!("formula must not be called")), vec![1.0]);
        assert_eq!(windowed(2, false, indices).len(), 2);
    }
}
