//! Chi-squared distribution approximation
//!
//! Right-tail probabilities of the chi-squared distribution, computed from a
//! polynomial approximation of the standard normal distribution. Accurate to
//! roughly six decimal places, which is plenty for a goodness-of-fit score.
//!
//! Adapted from the `pochisq` routine of the `ent` pseudorandom sequence test
//! program (<http://www.fourmilab.ch/random/>).

use crate::constants::chisq::{BIG_X, I_SQRT_PI, LOG_SQRT_PI, Z_MAX};

/// Probability of a chi-squared variable with `df` degrees of freedom
/// exceeding `x2`.
///
/// Returns 1.0 for `x2 <= 0.0` or `df < 1`. A column with a single observed
/// symbol lands in the `df == 0` branch and therefore always scores 1.0: the
/// test has nothing to compare, so it cannot reject uniformity even though
/// the column shows no diversity at all.
///
/// # Example
///
/// ```
/// use seq_analyzer::stats::pochisq;
///
/// let p = pochisq(5.99, 2);
/// assert!((p - 0.05).abs() < 0.0005);
/// ```
pub fn pochisq(x2: f64, df: usize) -> f64 {
    if x2 <= 0.0 || df < 1 {
        return 1.0;
    }

    let a = x2 / 2.0;
    let even = df % 2 == 0;

    let y = if df > 1 { ex(-a) } else { 0.0 };
    let mut s = if even { y } else { 2.0 * poz(-x2.sqrt()) };

    if df <= 2 {
        return s.clamp(0.0, 1.0);
    }

    // Sum the series two degrees of freedom at a time up to df
    let limit = (df as f64 - 1.0) / 2.0;
    let mut z = if even { 1.0 } else { 0.5 };

    // The series overshoots 1.0 by ~1e-9 at high df and small x2
    let p = if a > BIG_X {
        // Log domain: exp(-a) would underflow
        let mut e = if even { 0.0 } else { LOG_SQRT_PI };
        let c = a.ln();
        while z <= limit {
            e += z.ln();
            s += ex(c * z - a - e);
            z += 1.0;
        }
        s
    } else {
        let mut e = if even { 1.0 } else { I_SQRT_PI / a.sqrt() };
        let mut c = 0.0;
        while z <= limit {
            e *= a / z;
            c += e;
            z += 1.0;
        }
        c * y + s
    };

    p.clamp(0.0, 1.0)
}

/// Standard normal cumulative probability `P(Z <= z)`.
///
/// Polynomial approximation from Ibbetson (1963), algorithm 209 of the
/// Collected Algorithms of the CACM. Saturates to 0.0 or 1.0 for
/// `|z| >= Z_MAX`.
pub fn poz(z: f64) -> f64 {
    let x = if z == 0.0 {
        0.0
    } else {
        let y = z.abs() / 2.0;
        if y >= Z_MAX / 2.0 {
            1.0
        } else if y < 1.0 {
            let w = y * y;
            ((((((((0.000124818987 * w - 0.001075204047) * w + 0.005198775019) * w
                - 0.019198292004)
                * w
                + 0.059054035642)
                * w
                - 0.151968751364)
                * w
                + 0.319152932694)
                * w
                - 0.531923007300)
                * w
                + 0.797884560593)
                * y
                * 2.0
        } else {
            let y = y - 2.0;
            (((((((((((((-0.000045255659 * y + 0.000152529290) * y - 0.000019538132) * y
                - 0.000676904986)
                * y
                + 0.001390604284)
                * y
                - 0.000794620820)
                * y
                - 0.002034254874)
                * y
                + 0.006549791214)
                * y
                - 0.010557625006)
                * y
                + 0.011630447319)
                * y
                - 0.009279453341)
                * y
                + 0.005353579108)
                * y
                - 0.002141268741)
                * y
                + 0.000535310849)
                * y
                + 0.999936657524
        }
    };

    if z > 0.0 {
        (x + 1.0) / 2.0
    } else {
        (1.0 - x) / 2.0
    }
}

/// `exp(x)`, flushed to zero below `-BIG_X`
fn ex(x: f64) -> f64 {
    if x < -BIG_X {
        0.0
    } else {
        x.exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const TOL: f64 = 0.0005;

    #[test]
    fn test_reference_values() {
        assert_abs_diff_eq!(pochisq(2.688, 1), 0.1011, epsilon = TOL);
        assert_abs_diff_eq!(pochisq(5.99, 2), 0.0500, epsilon = TOL);
        assert_abs_diff_eq!(pochisq(26.76, 11), 0.0050, epsilon = TOL);
        assert_abs_diff_eq!(pochisq(8.0, 15), 0.9238, epsilon = TOL);
    }

    #[test]
    fn test_reference_values_four_digits() {
        assert_eq!(format!("{:.4}", pochisq(2.688, 1)), "0.1011");
        assert_eq!(format!("{:.4}", pochisq(5.99, 2)), "0.0500");
        assert_eq!(format!("{:.4}", pochisq(26.76, 11)), "0.0050");
        assert_eq!(format!("{:.4}", pochisq(8.0, 15)), "0.9238");
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(pochisq(0.0, 5), 1.0);
        assert_eq!(pochisq(-3.5, 5), 1.0);
        assert_eq!(pochisq(10.0, 0), 1.0);
        assert_eq!(pochisq(0.0, 0), 1.0);
    }

    #[test]
    fn test_large_statistic_uses_log_series() {
        // a = x2 / 2 > BIG_X takes the log-domain branch
        let even = pochisq(60.0, 10);
        let odd = pochisq(60.0, 11);
        assert!(even > 0.0 && even < 1e-6, "got {}", even);
        assert!(odd > 0.0 && odd < 1e-6, "got {}", odd);

        // Mean of chi-squared(60) is 60, so the tail is near one half
        let mid = pochisq(60.0, 60);
        assert_abs_diff_eq!(mid, 0.4757, epsilon = 0.001);
    }

    #[test]
    fn test_known_critical_values() {
        // Upper 5% critical values from standard tables
        assert_abs_diff_eq!(pochisq(3.841, 1), 0.05, epsilon = TOL);
        assert_abs_diff_eq!(pochisq(11.070, 5), 0.05, epsilon = TOL);
        assert_abs_diff_eq!(pochisq(18.307, 10), 0.05, epsilon = TOL);
        assert_abs_diff_eq!(pochisq(31.410, 20), 0.05, epsilon = TOL);
    }

    #[test]
    fn test_range() {
        for df in 1..80 {
            for step in 0..400 {
                let x2 = step as f64 * 0.5;
                let p = pochisq(x2, df);
                assert!(p.is_finite(), "pochisq({}, {}) not finite", x2, df);
                assert!(
                    (0.0..=1.0).contains(&p),
                    "pochisq({}, {}) = {} out of range",
                    x2,
                    df,
                    p
                );
            }
        }
    }

    #[test]
    fn test_decreasing_in_statistic() {
        for df in [1, 2, 3, 7, 16, 63] {
            let mut prev = 1.0;
            for step in 1..200 {
                let p = pochisq(step as f64, df);
                assert!(p <= prev + 1e-8, "df={} x2={} rose to {}", df, step, p);
                prev = p;
            }
        }
    }

    #[test]
    fn test_poz() {
        assert_eq!(poz(0.0), 0.5);
        assert_abs_diff_eq!(poz(1.0), 0.8413, epsilon = 0.0001);
        assert_abs_diff_eq!(poz(-1.0), 0.1587, epsilon = 0.0001);
        assert_abs_diff_eq!(poz(1.96), 0.9750, epsilon = 0.0001);
        assert_abs_diff_eq!(poz(3.0), 0.99865, epsilon = 0.0001);
    }

    #[test]
    fn test_poz_saturates() {
        assert_eq!(poz(6.0), 1.0);
        assert_eq!(poz(-6.0), 0.0);
        assert_eq!(poz(40.0), 1.0);
        assert_eq!(poz(-40.0), 0.0);
    }

    #[test]
    fn test_poz_symmetric() {
        for step in 1..120 {
            let z = step as f64 * 0.05;
            assert_abs_diff_eq!(poz(z) + poz(-z), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_ex_cutoff() {
        assert_eq!(ex(-20.5), 0.0);
        assert_eq!(ex(-100.0), 0.0);
        assert_abs_diff_eq!(ex(-20.0), (-20.0f64).exp(), epsilon = 1e-15);
        assert_abs_diff_eq!(ex(1.0), std::f64::consts::E, epsilon = 1e-12);
    }
}
