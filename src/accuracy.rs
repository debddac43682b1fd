//! Accuracy measurement against f64 std references.
//!
//! Used by the tests and the demo to check the kernels stay inside the
//! tolerance the 3-PG validation suite is calibrated for.

use core::ops::RangeInclusive;

use crate::scalar;

/// Number of representable f32 values between `a` and `b`.
///
/// Sign-magnitude ordering is handled, so `-0.0` and `0.0` are 0 apart.
/// Any NaN gives `u32::MAX`.
#[inline]
pub fn ulp_distance(a: f32, b: f32) -> u32 {
    if a.is_nan() || b.is_nan() {
        return u32::MAX;
    }
    if a == b {
        return 0;
    }

    fn to_lexical(x: f32) -> i32 {
        let bits = x.to_bits() as i32;
        if bits < 0 { i32::MIN - bits } else { bits }
    }

    to_lexical(a).wrapping_sub(to_lexical(b)).unsigned_abs()
}

/// `|got - reference| / |reference|`, or the absolute error when the
/// reference is zero.
#[inline]
pub fn relative_error(got: f32, reference: f64) -> f64 {
    let err = (got as f64 - reference).abs();
    if reference == 0.0 {
        err
    } else {
        err / reference.abs()
    }
}

/// Worst error of one kernel over an evenly spaced sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepReport {
    /// Largest error seen.
    pub max_error: f64,
    /// Input that produced it.
    pub worst_input: f32,
}

fn sweep(
    lo: f32,
    hi: f32,
    steps: usize,
    error: impl Fn(f32) -> f64,
) -> SweepReport {
    assert!(steps >= 2, "a sweep needs at least two points");
    let step = (hi as f64 - lo as f64) / (steps - 1) as f64;

    let mut report = SweepReport {
        max_error: 0.0,
        worst_input: lo,
    };
    for i in 0..steps {
        let x = (lo as f64 + step * i as f64) as f32;
        let err = error(x);
        if err > report.max_error {
            report = SweepReport {
                max_error: err,
                worst_input: x,
            };
        }
    }
    report
}

/// Absolute error of [`scalar::log2`] over `[lo, hi]`.
///
/// # Panics
///
/// If `steps < 2`.
pub fn log2_sweep(lo: f32, hi: f32, steps: usize) -> SweepReport {
    sweep(lo, hi, steps, |x| {
        (scalar::log2(x) as f64 - (x as f64).log2()).abs()
    })
}

/// Relative error of [`scalar::exp2`] over `[lo, hi]`.
///
/// # Panics
///
/// If `steps < 2`.
pub fn exp2_sweep(lo: f32, hi: f32, steps: usize) -> SweepReport {
    sweep(lo, hi, steps, |p| relative_error(scalar::exp2(p), (p as f64).exp2()))
}

/// Relative error of `exp2(log2(x))` against `x` over `[lo, hi]`.
///
/// # Panics
///
/// If `steps < 2`.
pub fn roundtrip_sweep(lo: f32, hi: f32, steps: usize) -> SweepReport {
    sweep(lo, hi, steps, |x| {
        relative_error(scalar::exp2(scalar::log2(x)), x as f64)
    })
}

/// Relative error of `pow(x, n)` over `[lo, hi]`.
///
/// # Panics
///
/// If `steps < 2`.
pub fn pow_sweep(lo: f32, hi: f32, n: f32, steps: usize) -> SweepReport {
    sweep(lo, hi, steps, |x| {
        relative_error(scalar::pow(x, n), (x as f64).powf(n as f64))
    })
}

/// Largest `|log2(x) - log2_f64(x)|` over `steps` evenly spaced points of
/// `range`.
///
/// ```
/// use threepg_simd::accuracy::max_abs_log2_error;
///
/// assert!(max_abs_log2_error(0.5..=64.0, 10_000) < 2e-5);
/// ```
///
/// # Panics
///
/// If `steps < 2`.
pub fn max_abs_log2_error(range: RangeInclusive<f32>, steps: usize) -> f64 {
    log2_sweep(*range.start(), *range.end(), steps).max_error
}
