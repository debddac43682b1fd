//! Batch kernels over `f32` slices using the `wide` crate.
//!
//! Processes 4 values at a time with [`f32x4`], with the scalar kernels for
//! the remainder. Because the scalar and 4-lane kernels agree bit-for-bit,
//! where the chunk boundary falls never changes a result.
//!
//! Each function is multiversioned for x86-64-v3/v2 and AArch64 NEON and
//! dispatched at runtime.

use wide::f32x4;

use crate::fast_math::{exp_x4, exp2_x4, ln_x4, log2_x4, pow_const_x4, pow_x4};
use crate::scalar;

#[inline(always)]
fn map_in_place(
    values: &mut [f32],
    vector: impl Fn(f32x4) -> f32x4,
    single: impl Fn(f32) -> f32,
) {
    let (chunks, remainder) = values.as_chunks_mut::<4>();

    for chunk in chunks {
        *chunk = vector(f32x4::from(*chunk)).to_array();
    }

    for v in remainder {
        *v = single(*v);
    }
}

crate::simd_multiversion! {
    /// Replace each value with its base-2 logarithm.
    ///
    /// Values must be positive and normal (not subnormal).
    pub fn log2_slice(values: &mut [f32]) {
        map_in_place(values, log2_x4, scalar::log2);
    }
}

crate::simd_multiversion! {
    /// Replace each value with its natural logarithm.
    ///
    /// Values must be positive and normal (not subnormal).
    pub fn ln_slice(values: &mut [f32]) {
        map_in_place(values, ln_x4, scalar::ln);
    }
}

crate::simd_multiversion! {
    /// Replace each value `p` with 2^p. Values below -127 become `0.0`.
    pub fn exp2_slice(values: &mut [f32]) {
        map_in_place(values, exp2_x4, scalar::exp2);
    }
}

crate::simd_multiversion! {
    /// Replace each value `p` with e^p.
    pub fn exp_slice(values: &mut [f32]) {
        map_in_place(values, exp_x4, scalar::exp);
    }
}

crate::simd_multiversion! {
    /// Raise each value to the fixed power `n`.
    ///
    /// Values must be positive and normal (not subnormal).
    pub fn pow_slice(values: &mut [f32], n: f32) {
        map_in_place(values, |v| pow_const_x4(v, n), |v| scalar::pow(v, n));
    }
}

crate::simd_multiversion! {
    /// Compute `base[i]` raised to `exponent[i]` into `output[i]`.
    ///
    /// # Panics
    ///
    /// If the three slices differ in length.
    pub fn pow_batch(base: &[f32], exponent: &[f32], output: &mut [f32]) {
        assert_eq!(base.len(), output.len());
        assert_eq!(exponent.len(), output.len());

        let (base_chunks, base_remainder) = base.as_chunks::<4>();
        let (exp_chunks, exp_remainder) = exponent.as_chunks::<4>();
        let (out_chunks, out_remainder) = output.as_chunks_mut::<4>();

        for ((b, e), out) in base_chunks.iter().zip(exp_chunks).zip(out_chunks.iter_mut()) {
            *out = pow_x4(f32x4::from(*b), f32x4::from(*e)).to_array();
        }

        for ((&b, &e), out) in base_remainder
            .iter()
            .zip(exp_remainder)
            .zip(out_remainder.iter_mut())
        {
            *out = scalar::pow(b, e);
        }
    }
}
