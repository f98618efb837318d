//! Linear blending between two bracketing breakpoints

use num_traits::Float;

use super::Bracket;

/// Linear interpolation of `(x0, y0)`, `(x1, y1)` at `x`.
///
/// When `x0 == x1` the result is `y0`, whatever `y1` is; a collapsed bracket
/// takes its value from the low side only.
#[inline]
pub fn interpolate<T: Float>(y0: T, y1: T, x0: T, x1: T, x: T) -> T {
    if x0 == x1 {
        return y0;
    }

    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

/// Blend the values found at the low and high ends of a bracket.
#[inline]
pub fn interpolate_bracket<T: Float>(b: &Bracket<T>, y_lo: T, y_hi: T, x: T) -> T {
    interpolate(y_lo, y_hi, b.lo, b.hi, x)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::one_dim::{bracket, Extrap};

    #[test]
    fn test_interpolate_linear() {
        assert_eq!(interpolate(-10.0_f64, -20.0, 1.0, 2.0, 1.5), -15.0);
        assert_eq!(interpolate(0.0_f64, 10.0, 0.0, 1.0, 0.25), 2.5);
        // Extrapolates if asked to
        assert_eq!(interpolate(0.0_f64, 10.0, 0.0, 1.0, 2.0), 20.0);
    }

    #[test]
    fn test_interpolate_collapsed_takes_low_side() {
        assert_eq!(interpolate(3.0_f64, 1e9, 5.0, 5.0, 5.0), 3.0);
        assert_eq!(interpolate(3.0_f64, f64::NAN, 5.0, 5.0, 7.0), 3.0);
    }

    #[test]
    fn test_interpolate_sentinel_corner() {
        // One real corner and one no-data corner at the midpoint
        assert_eq!(interpolate(0.0_f64, -50.0, 0.0, 1.0, 0.5), -25.0);
    }

    #[test]
    fn test_interpolate_bracket() {
        let grid = [5.0_f64, 15.0];
        let b = bracket(&grid, 10.0).unwrap();
        assert_eq!(b.extrap, Extrap::Inside);
        assert_eq!(interpolate_bracket(&b, -15.0, -35.0, 10.0), -25.0);

        let b = bracket(&grid, 100.0).unwrap();
        assert_eq!(interpolate_bracket(&b, -35.0, 0.0, 100.0), -35.0);
    }
}
