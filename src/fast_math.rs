//! Fast log2, exp2, ln, exp and pow built from IEEE-754 bit manipulation.
//!
//! Each kernel is written once against [`FloatLanes`] and instantiated for
//! `f32` (see [`scalar`](crate::scalar)) and for [`f32x4`]. Lane `i` of a
//! 4-lane result depends only on lane `i` of the input and is bit-identical
//! to the scalar result for in-domain inputs.
//!
//! # Accuracy
//!
//! | Function | Error vs f64 reference |
//! |----------|------------------------|
//! | `log2`   | ≤ 1.5e-5 absolute, exact at powers of two |
//! | `exp2`   | ≤ 1e-6 relative on \[-126, 127\], exact at integers |
//! | `ln`     | `log2(x) * ln 2`, one extra rounding |
//! | `exp2(log2(x))` | ≤ 3e-5 relative |
//!
//! The coefficient sets below are frozen. Changing them changes every
//! simulated stand.

use core::f32::consts::{LN_2, LOG2_E};

use wide::f32x4;

use crate::debug::{exp2_domain_violations, log2_domain_violations};
use crate::lanes::{FloatLanes, IntLanes};

// IEEE-754 single-precision layout
const MANTISSA_BITS: i32 = 23;
const MANTISSA_MASK: i32 = 0x007f_ffff;
const EXPONENT_MASK: i32 = 0xff;
const EXPONENT_BIAS: i32 = 127;
const ONE_BITS: i32 = 0x3f80_0000; // 1.0

// log2(1 + t) ≈ t * (c1 + t * (c2 + t * (c3 + t * (c4 + t * c5)))), t in [0, 1)
const LOG2_C1: f32 = 1.441_965_6;
const LOG2_C2: f32 = -0.709_662_4;
const LOG2_C3: f32 = 0.417_594_43;
const LOG2_C4: f32 = -0.196_268;
const LOG2_C5: f32 = 0.046_384_692;

// 2^f ≈ (b + a) / (b - a), a = f * (f² + A), b = B1 * f² + B0, f in (-1, 1)
const EXP2_A: f32 = 124.882_14;
const EXP2_B1: f32 = 17.312_34;
const EXP2_B0: f32 = 360.333_68;

/// Largest power `exp2` accepts; beyond it the exponent field overflows.
pub const EXP2_MAX_POWER: f32 = 127.0;

/// Powers below this flush to exactly `0.0` in `exp2`.
pub const EXP2_MIN_POWER: f32 = -127.0;

/// Base-2 logarithm.
///
/// Lanes must be positive and normal (at least [`f32::MIN_POSITIVE`]).
/// Zero, negative and subnormal lanes are out of contract (debug builds
/// panic). NaN lanes are returned unchanged.
#[inline(always)]
pub fn log2<V: FloatLanes>(x: V) -> V {
    crate::debug_assert_lanes!(
        log2_domain_violations(x),
        "log2 of a non-positive or subnormal value"
    );

    let bits = x.to_bits();

    // Integral part: unbiased exponent field
    let exponent = bits
        .shr(MANTISSA_BITS)
        .and(V::Int::splat(EXPONENT_MASK))
        .wrapping_sub(V::Int::splat(EXPONENT_BIAS));
    let exponent = V::from_int(exponent);

    // Mantissa with exponent forced to zero, in [1, 2)
    let mantissa = V::from_bits(
        bits.and(V::Int::splat(MANTISSA_MASK))
            .or(V::Int::splat(ONE_BITS)),
    );
    let t = mantissa - V::splat(1.0);

    let mut p = V::splat(LOG2_C5);
    p = p * t + V::splat(LOG2_C4);
    p = p * t + V::splat(LOG2_C3);
    p = p * t + V::splat(LOG2_C2);
    p = p * t + V::splat(LOG2_C1);

    // The exponent field of a NaN decodes as 128, so pass NaN through
    let nan = x.lanes_le(x).lanes_eq(V::Int::splat(0));
    V::select(nan, x, exponent + p * t)
}

/// Base-2 exponential.
///
/// Lanes above [`EXP2_MAX_POWER`] are out of contract (debug builds panic).
/// Lanes below [`EXP2_MIN_POWER`] return exactly `0.0`. NaN propagates.
#[inline(always)]
pub fn exp2<V: FloatLanes>(power: V) -> V {
    crate::debug_assert_lanes!(exp2_domain_violations(power), "exp2 power above 127");

    let whole = power.trunc_to_int();
    let fraction = power - V::from_int(whole);

    let f2 = fraction * fraction;
    let a = fraction * (f2 + V::splat(EXP2_A));
    let b = f2 * V::splat(EXP2_B1) + V::splat(EXP2_B0);
    let interpolant = (b + a) / (b - a);

    // interpolant is a normal float near 1.0, so adding `whole` to its
    // exponent field multiplies it by 2^whole
    let scaled = V::from_bits(
        interpolant
            .to_bits()
            .wrapping_add(whole.shl(MANTISSA_BITS)),
    );

    let underflow = power.lanes_lt(V::splat(EXP2_MIN_POWER));
    V::select(underflow, V::splat(0.0), scaled)
}

/// Natural logarithm: `log2(x) * ln 2`.
#[inline(always)]
pub fn ln<V: FloatLanes>(x: V) -> V {
    log2(x) * V::splat(LN_2)
}

/// Natural exponential: `exp2(power * log2 e)`.
#[inline(always)]
pub fn exp<V: FloatLanes>(power: V) -> V {
    exp2(power * V::splat(LOG2_E))
}

/// `x` raised to `y`: `exp2(log2(x) * y)`. Requires `x > 0`.
#[inline(always)]
pub fn pow<V: FloatLanes>(x: V, y: V) -> V {
    exp2(log2(x) * y)
}

// ============================================================================
// 4-lane entry points
// ============================================================================

/// Fast approximate log2 for 4 f32 values.
#[inline]
pub fn log2_x4(x: f32x4) -> f32x4 {
    log2(x)
}

/// Fast approximate 2^x for 4 f32 values.
#[inline]
pub fn exp2_x4(power: f32x4) -> f32x4 {
    exp2(power)
}

/// Fast approximate natural log for 4 f32 values.
#[inline]
pub fn ln_x4(x: f32x4) -> f32x4 {
    ln(x)
}

/// Fast approximate e^x for 4 f32 values.
#[inline]
pub fn exp_x4(power: f32x4) -> f32x4 {
    exp(power)
}

/// Fast approximate pow(x, y) for 4 f32 values, lane by lane.
#[inline]
pub fn pow_x4(x: f32x4, y: f32x4) -> f32x4 {
    pow(x, y)
}

/// Fast approximate pow(x, n) for 4 f32 values and one exponent.
#[inline]
pub fn pow_const_x4(x: f32x4, n: f32) -> f32x4 {
    pow(x, f32x4::splat(n))
}
