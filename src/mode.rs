//! Scalar vs 128-bit execution mode.
//!
//! A simulation run picks one [`SimdWidth`] and routes every kernel call
//! through it. Both widths produce bit-identical results for in-domain
//! inputs, so the choice affects speed, never trajectories.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseSimdWidthError;
use crate::{scalar, simd};

/// Which code path drives a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SimdWidth {
    /// One value at a time through the scalar kernels.
    Scalar,
    /// Four values at a time through the 128-bit kernels.
    #[default]
    Bits128,
}

impl SimdWidth {
    /// Values processed per kernel call.
    pub const fn lanes(self) -> usize {
        match self {
            SimdWidth::Scalar => 1,
            SimdWidth::Bits128 => 4,
        }
    }

    /// The width best suited to the compilation target.
    ///
    /// `wide` only has native 128-bit registers on x86 (SSE2), AArch64
    /// (NEON) and WebAssembly (SIMD128); elsewhere its vectors are arrays
    /// and the scalar path is at least as fast.
    pub fn preferred() -> Self {
        let width = if cfg!(any(
            all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse2"),
            all(target_arch = "aarch64", target_feature = "neon"),
            all(target_arch = "wasm32", target_feature = "simd128"),
        )) {
            SimdWidth::Bits128
        } else {
            SimdWidth::Scalar
        };
        log::debug!("preferred SIMD width for this target: {}", width);
        width
    }

    /// In-place base-2 logarithm of every value.
    pub fn log2_slice(self, values: &mut [f32]) {
        match self {
            SimdWidth::Scalar => values.iter_mut().for_each(|v| *v = scalar::log2(*v)),
            SimdWidth::Bits128 => simd::log2_slice(values),
        }
    }

    /// In-place natural logarithm of every value.
    pub fn ln_slice(self, values: &mut [f32]) {
        match self {
            SimdWidth::Scalar => values.iter_mut().for_each(|v| *v = scalar::ln(*v)),
            SimdWidth::Bits128 => simd::ln_slice(values),
        }
    }

    /// In-place 2^p of every value.
    pub fn exp2_slice(self, values: &mut [f32]) {
        match self {
            SimdWidth::Scalar => values.iter_mut().for_each(|v| *v = scalar::exp2(*v)),
            SimdWidth::Bits128 => simd::exp2_slice(values),
        }
    }

    /// In-place e^p of every value.
    pub fn exp_slice(self, values: &mut [f32]) {
        match self {
            SimdWidth::Scalar => values.iter_mut().for_each(|v| *v = scalar::exp(*v)),
            SimdWidth::Bits128 => simd::exp_slice(values),
        }
    }

    /// Raise every value to the fixed power `n` in place.
    pub fn pow_slice(self, values: &mut [f32], n: f32) {
        match self {
            SimdWidth::Scalar => values.iter_mut().for_each(|v| *v = scalar::pow(*v, n)),
            SimdWidth::Bits128 => simd::pow_slice(values, n),
        }
    }

    /// `output[i] = base[i] ^ exponent[i]`.
    ///
    /// # Panics
    ///
    /// If the three slices differ in length.
    pub fn pow_batch(self, base: &[f32], exponent: &[f32], output: &mut [f32]) {
        match self {
            SimdWidth::Scalar => {
                assert_eq!(base.len(), output.len());
                assert_eq!(exponent.len(), output.len());
                for ((&b, &e), out) in base.iter().zip(exponent).zip(output.iter_mut()) {
                    *out = scalar::pow(b, e);
                }
            }
            SimdWidth::Bits128 => simd::pow_batch(base, exponent, output),
        }
    }
}

impl fmt::Display for SimdWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimdWidth::Scalar => f.write_str("scalar"),
            SimdWidth::Bits128 => f.write_str("128"),
        }
    }
}

impl FromStr for SimdWidth {
    type Err = ParseSimdWidthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let matches = |names: &[&str]| names.iter().any(|n| s.eq_ignore_ascii_case(n));

        if matches(&["scalar", "none", "1"]) {
            Ok(SimdWidth::Scalar)
        } else if matches(&["128", "sse", "sse2", "neon", "simd128", "vector", "x4"]) {
            Ok(SimdWidth::Bits128)
        } else {
            Err(ParseSimdWidthError::new(s))
        }
    }
}
