//! Portable lane abstraction the kernels are written against.
//!
//! Every kernel in [`fast_math`](crate::fast_math) is generic over
//! [`FloatLanes`]. There are exactly two implementations:
//!
//! - `f32` / `i32`: the scalar path, one lane
//! - [`f32x4`] / [`i32x4`]: the 128-bit path, four lanes (SSE2 on x86,
//!   NEON on AArch64, SIMD128 on WebAssembly, plain arrays elsewhere)
//!
//! Because both paths execute the same sequence of IEEE-754 operations per
//! lane, lane `i` of a 4-lane call is bit-identical to the scalar call on
//! lane `i`'s input. No operation here fuses a multiply with an add.
//!
//! Masks are integer lanes holding all-ones (true) or all-zeros (false), the
//! same representation SSE and NEON comparisons produce.

use core::ops::{Add, Div, Mul, Sub};

use bytemuck::cast;
use wide::{CmpEq, CmpLe, CmpLt, f32x4, i32x4};

/// Lanes of 32-bit signed integers.
pub trait IntLanes: Copy {
    /// Number of lanes.
    const LANES: usize;

    /// Replicate `v` into every lane.
    fn splat(v: i32) -> Self;
    /// Lane-wise two's complement addition.
    fn wrapping_add(self, rhs: Self) -> Self;
    /// Lane-wise two's complement subtraction.
    fn wrapping_sub(self, rhs: Self) -> Self;
    /// Lane-wise bitwise AND.
    fn and(self, rhs: Self) -> Self;
    /// Lane-wise bitwise OR.
    fn or(self, rhs: Self) -> Self;
    /// Lane-wise logical left shift.
    fn shl(self, bits: i32) -> Self;
    /// Lane-wise arithmetic right shift.
    fn shr(self, bits: i32) -> Self;
    /// Lane-wise maximum.
    fn max(self, rhs: Self) -> Self;
    /// Lane-wise equality as a mask.
    fn lanes_eq(self, rhs: Self) -> Self;
    /// Sign bit of each lane packed into the low bits, lane 0 in bit 0.
    fn bitmask(self) -> u8;
}

/// Lanes of IEEE-754 single-precision floats.
pub trait FloatLanes:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self>
{
    /// The integer lanes sharing this type's storage.
    type Int: IntLanes;

    /// Replicate `v` into every lane.
    fn splat(v: f32) -> Self;
    /// Reinterpret the bits as integers. Never changes a bit.
    fn to_bits(self) -> Self::Int;
    /// Reinterpret integer bits as floats. Never changes a bit.
    fn from_bits(bits: Self::Int) -> Self;
    /// Numeric integer to float conversion.
    fn from_int(v: Self::Int) -> Self;
    /// Numeric float to integer conversion, rounding toward zero.
    ///
    /// Out-of-range and NaN lanes are platform-defined and differ between
    /// the scalar and vector paths.
    fn trunc_to_int(self) -> Self::Int;
    /// Lane-wise `self < rhs` as a mask.
    fn lanes_lt(self, rhs: Self) -> Self::Int;
    /// Lane-wise `self <= rhs` as a mask.
    fn lanes_le(self, rhs: Self) -> Self::Int;
    /// Branchless per-lane select: `mask ? t : f`.
    fn select(mask: Self::Int, t: Self, f: Self) -> Self;
}

// ============================================================================
// Scalar (1 lane)
// ============================================================================

impl IntLanes for i32 {
    const LANES: usize = 1;

    #[inline(always)]
    fn splat(v: i32) -> Self {
        v
    }

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        i32::wrapping_add(self, rhs)
    }

    #[inline(always)]
    fn wrapping_sub(self, rhs: Self) -> Self {
        i32::wrapping_sub(self, rhs)
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        self & rhs
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        self | rhs
    }

    #[inline(always)]
    fn shl(self, bits: i32) -> Self {
        self.wrapping_shl(bits as u32)
    }

    #[inline(always)]
    fn shr(self, bits: i32) -> Self {
        self.wrapping_shr(bits as u32)
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Ord::max(self, rhs)
    }

    #[inline(always)]
    fn lanes_eq(self, rhs: Self) -> Self {
        -((self == rhs) as i32)
    }

    #[inline(always)]
    fn bitmask(self) -> u8 {
        ((self as u32) >> 31) as u8
    }
}

impl FloatLanes for f32 {
    type Int = i32;

    #[inline(always)]
    fn splat(v: f32) -> Self {
        v
    }

    #[inline(always)]
    fn to_bits(self) -> i32 {
        f32::to_bits(self) as i32
    }

    #[inline(always)]
    fn from_bits(bits: i32) -> Self {
        f32::from_bits(bits as u32)
    }

    #[inline(always)]
    fn from_int(v: i32) -> Self {
        v as f32
    }

    #[inline(always)]
    fn trunc_to_int(self) -> i32 {
        self as i32
    }

    #[inline(always)]
    fn lanes_lt(self, rhs: Self) -> i32 {
        -((self < rhs) as i32)
    }

    #[inline(always)]
    fn lanes_le(self, rhs: Self) -> i32 {
        -((self <= rhs) as i32)
    }

    #[inline(always)]
    fn select(mask: i32, t: Self, f: Self) -> Self {
        if mask != 0 { t } else { f }
    }
}

// ============================================================================
// 128-bit (4 lanes)
// ============================================================================

impl IntLanes for i32x4 {
    const LANES: usize = 4;

    #[inline(always)]
    fn splat(v: i32) -> Self {
        i32x4::splat(v)
    }

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline(always)]
    fn wrapping_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        self & rhs
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        self | rhs
    }

    #[inline(always)]
    fn shl(self, bits: i32) -> Self {
        self << bits
    }

    #[inline(always)]
    fn shr(self, bits: i32) -> Self {
        self >> bits
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        i32x4::max(self, rhs)
    }

    #[inline(always)]
    fn lanes_eq(self, rhs: Self) -> Self {
        self.simd_eq(rhs)
    }

    #[inline(always)]
    fn bitmask(self) -> u8 {
        let as_float: f32x4 = cast(self);
        (as_float.to_bitmask() & 0b1111) as u8
    }
}

impl FloatLanes for f32x4 {
    type Int = i32x4;

    #[inline(always)]
    fn splat(v: f32) -> Self {
        f32x4::splat(v)
    }

    #[inline(always)]
    fn to_bits(self) -> i32x4 {
        cast(self)
    }

    #[inline(always)]
    fn from_bits(bits: i32x4) -> Self {
        cast(bits)
    }

    #[inline(always)]
    fn from_int(v: i32x4) -> Self {
        f32x4::from_i32x4(v)
    }

    #[inline(always)]
    fn trunc_to_int(self) -> i32x4 {
        f32x4::trunc_int(self)
    }

    #[inline(always)]
    fn lanes_lt(self, rhs: Self) -> i32x4 {
        cast(self.simd_lt(rhs))
    }

    #[inline(always)]
    fn lanes_le(self, rhs: Self) -> i32x4 {
        cast(self.simd_le(rhs))
    }

    #[inline(always)]
    fn select(mask: i32x4, t: Self, f: Self) -> Self {
        let mask: f32x4 = cast(mask);
        mask.blend(t, f)
    }
}
