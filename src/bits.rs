//! Bit and lane primitives shared by the kernels and the growth model.
//!
//! All functions are pure and branch-free. The float/int conversions here
//! are reinterpretations of the same 128 bits, never numeric conversions.

use wide::{f32x4, i32x4};

use crate::lanes::{FloatLanes, IntLanes};

/// Bit pattern of the NaN produced by [`splat`]`(f32::NAN)`.
///
/// [`is_nan`] matches this exact payload and nothing else.
pub const CANONICAL_NAN_BITS: i32 = 0x7fc0_0000;

/// Every bit except the sign bit.
pub(crate) const ABS_MASK: i32 = 0x7fff_ffff;

/// Replicate a scalar float into all four lanes.
#[inline]
pub fn splat(x: f32) -> f32x4 {
    f32x4::splat(x)
}

/// Replicate a scalar integer into all four lanes.
#[inline]
pub fn splat_int(x: i32) -> i32x4 {
    i32x4::splat(x)
}

/// Build an integer vector from four scalars, lane 0 = `v0`.
#[inline]
pub fn pack(v0: i32, v1: i32, v2: i32, v3: i32) -> i32x4 {
    i32x4::from([v0, v1, v2, v3])
}

/// Clear the sign bit of every lane.
///
/// Magnitude and NaN payload bits are untouched, so NaN stays NaN and
/// `-0.0` becomes `+0.0`.
#[inline(always)]
pub fn abs<V: FloatLanes>(v: V) -> V {
    V::from_bits(v.to_bits().and(V::Int::splat(ABS_MASK)))
}

/// [`abs`] for four lanes.
#[inline]
pub fn abs_x4(v: f32x4) -> f32x4 {
    abs(v)
}

/// Maximum across the four integer lanes.
///
/// Folds lanes 2,3 onto 0,1, then lane 1 onto lane 0. `wide` has no
/// portable lane shuffle for `i32x4`, so the swapped halves are rebuilt
/// from the lane array, a round trip through memory.
#[inline]
pub fn horizontal_max(v: i32x4) -> i32 {
    let [a, b, c, d] = v.to_array();
    let folded = v.max(i32x4::from([c, d, a, b])).to_array();
    Ord::max(folded[0], folded[1])
}

/// Per-lane exact match against [`CANONICAL_NAN_BITS`], lane `i` in bit `i`.
///
/// This compares bit patterns as integers, so only the canonical quiet NaN
/// matches. NaNs with a different payload or the sign bit set do not.
#[inline(always)]
pub fn is_nan<V: FloatLanes>(v: V) -> u8 {
    v.to_bits()
        .lanes_eq(V::Int::splat(CANONICAL_NAN_BITS))
        .bitmask()
}

/// [`is_nan`] for four lanes.
#[inline]
pub fn is_nan_x4(v: f32x4) -> u8 {
    is_nan(v)
}
