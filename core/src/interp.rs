// Interpolation helpers shared by the noise kernel and the modules.

/// Cubic interpolation between `n1` and `n2`, using the neighbours `n0`
/// (before `n1`) and `n3` (after `n2`) to shape the curve.
/// Returns `n1` at `a = 0` and `n2` at `a = 1`.
#[inline]
pub fn cubic_interp(n0: f64, n1: f64, n2: f64, n3: f64, a: f64) -> f64 {
    let p = (n3 - n2) - (n0 - n1);
    let q = (n0 - n1) - p;
    let r = n2 - n0;
    let s = n1;
    p * a * a * a + q * a * a + r * a + s
}

/// Linear interpolation: `n0` at `a = 0`, `n1` at `a = 1`.
#[inline]
pub fn linear_interp(n0: f64, n1: f64, a: f64) -> f64 {
    ((1.0 - a) * n0) + (a * n1)
}

/// Cubic S-curve `3a² - 2a³`. First derivative is zero at both ends.
#[inline]
pub fn s_curve3(a: f64) -> f64 {
    a * a * (3.0 - 2.0 * a)
}

/// Quintic S-curve `6a⁵ - 15a⁴ + 10a³`.
/// First and second derivatives are zero at both ends.
#[inline]
pub fn s_curve5(a: f64) -> f64 {
    let a3 = a * a * a;
    let a4 = a3 * a;
    let a5 = a4 * a;
    (6.0 * a5) - (15.0 * a4) + (10.0 * a3)
}

/// The S-curve used for smoothing selector edges; same as [`s_curve3`].
#[inline]
pub fn s_curve(a: f64) -> f64 {
    s_curve3(a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn linear_interp_endpoints() {
        assert_eq!(linear_interp(3.0, 7.0, 0.0), 3.0);
        assert_eq!(linear_interp(3.0, 7.0, 1.0), 7.0);
        assert_eq!(linear_interp(0.0, 10.0, 0.5), 5.0);
    }

    #[test]
    fn cubic_interp_passes_through_inner_points() {
        assert_eq!(cubic_interp(0.0, 0.0, 1.0, 1.0, 0.5), 0.5);
        assert_eq!(cubic_interp(-4.0, 2.0, 5.0, 9.0, 0.0), 2.0);
        assert_abs_diff_eq!(cubic_interp(-4.0, 2.0, 5.0, 9.0, 1.0), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn s_curves_fix_endpoints() {
        for curve in [s_curve3 as fn(f64) -> f64, s_curve5, s_curve] {
            assert_eq!(curve(0.0), 0.0);
            assert_eq!(curve(1.0), 1.0);
            assert_abs_diff_eq!(curve(0.5), 0.5, epsilon = 1e-12);
        }
        assert_eq!(s_curve(0.25), 0.15625);
    }

    #[test]
    fn s_curve5_is_flatter_at_the_ends() {
        // Zero second derivative pulls the quintic curve closer to the ends
        assert!(s_curve5(0.1) < s_curve3(0.1));
        assert!(s_curve5(0.9) > s_curve3(0.9));
    }
}
