//! Vectorized transcendental kernels for the 3-PG forest growth model.
//!
//! 3-PG evaluates its canopy, allometry and water-balance equations monthly
//! for decades of simulated stand growth. This crate supplies the `log2`,
//! `exp2`, `ln`, `exp` and `pow` those equations lean on, built from IEEE-754
//! bit manipulation and small polynomial/rational approximations, for one
//! value at a time or four at a time.
//!
//! # Module Organization
//!
//! - [`fast_math`] - The kernels, generic over lane width, plus `_x4` entry points
//! - [`scalar`] - Single-value kernels, bit-identical to each lane of the `_x4` ones
//! - [`simd`] - Batch kernels over `f32` slices with runtime CPU dispatch
//! - [`mode`] - [`SimdWidth`], the run-wide scalar/128-bit switch
//! - [`bits`] - Lane primitives: `abs`, `pack`, `horizontal_max`, `is_nan`
//! - [`lanes`] - The portable lane traits the kernels are written against
//! - [`debug`] - Debug-only domain assertions
//!
//! # Quick Start
//!
//! ```rust
//! use threepg_simd::{f32x4, log2_x4, pow_x4};
//!
//! let lg = log2_x4(f32x4::from([1.0, 2.0, 4.0, 8.0]));
//! assert_eq!(lg.to_array(), [0.0, 1.0, 2.0, 3.0]);
//!
//! let p = pow_x4(f32x4::splat(2.0), f32x4::from([0.5, 1.0, 2.0, 3.0]));
//! assert!((p.to_array()[0] - 1.41421).abs() < 1e-4);
//! ```
//!
//! # Choosing a Width
//!
//! ```rust
//! use threepg_simd::SimdWidth;
//!
//! let width: SimdWidth = "scalar".parse().unwrap();
//! let mut biomass = vec![12.0f32, 40.5, 3.2, 88.0, 150.0];
//! width.pow_slice(&mut biomass, 0.42);
//!
//! let mut same = vec![12.0f32, 40.5, 3.2, 88.0, 150.0];
//! SimdWidth::Bits128.pow_slice(&mut same, 0.42);
//! assert_eq!(biomass, same); // bit-identical across widths
//! ```
//!
//! # Domain
//!
//! `log2`, `ln` and `pow` need positive, normal input. `exp2` needs powers
//! of at most 127 and flushes powers below -127 to exactly `0.0`. NaN
//! propagates. Nothing returns an error: out-of-domain input is a bug in the
//! caller, caught by assertions in debug builds only.
//!
//! # Feature Flags
//!
//! - `std` (default): Enables the [`accuracy`] module and runtime CPU
//!   feature detection in [`simd`]. Without it the batch kernels use the
//!   features enabled at compile time.
//!
//! # `no_std` Support
//!
//! This crate is `no_std` compatible (it needs `alloc`). Disable the `std`
//! feature:
//!
//! ```toml
//! threepg-simd = { version = "0.3", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(all(test, not(feature = "std")))]
extern crate std;

// ============================================================================
// Public modules
// ============================================================================

/// Portable lane traits (`f32`/`i32` and `f32x4`/`i32x4`).
pub mod lanes;

/// Bit and lane primitives.
pub mod bits;

/// The transcendental kernels.
pub mod fast_math;

/// Scalar (single-value) kernels.
pub mod scalar;

/// Batch kernels over slices.
pub mod simd;

/// Scalar vs 128-bit mode selection.
pub mod mode;

/// Debug-only domain assertions.
pub mod debug;

/// Error types.
pub mod error;

/// Accuracy measurement against f64 references.
#[cfg(feature = "std")]
pub mod accuracy;

// ============================================================================
// Internal modules
// ============================================================================

mod targets;

// ============================================================================
// Re-exports
// ============================================================================

pub use bits::{abs_x4, horizontal_max, is_nan_x4, pack, splat, splat_int};
pub use error::ParseSimdWidthError;
pub use fast_math::{exp_x4, exp2_x4, ln_x4, log2_x4, pow_const_x4, pow_x4};
pub use mode::SimdWidth;
pub use wide::{f32x4, i32x4};

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_consistency() {
        // Root re-exports and the scalar module agree lane by lane
        let x = [0.25f32, 1.5, 64.0, 1000.0];
        let v = log2_x4(f32x4::from(x)).to_array();
        for (i, &inp) in x.iter().enumerate() {
            assert_eq!(
                v[i].to_bits(),
                scalar::log2(inp).to_bits(),
                "Mismatch at {}: x4={}, scalar={}",
                i,
                v[i],
                scalar::log2(inp)
            );
        }
    }

    #[test]
    fn test_pack_and_reduce() {
        assert_eq!(horizontal_max(pack(3, 1, 4, 1)), 4);
        assert_eq!(horizontal_max(pack(-5, -1, -9, -2)), -1);
        assert_eq!(splat_int(9).to_array(), [9; 4]);
    }

    #[test]
    fn test_nan_flows_to_is_nan() {
        let v = ln_x4(f32x4::from([1.0, f32::NAN, 2.0, 3.0]));
        let mask = is_nan_x4(v);
        // ln(NaN) is a NaN, but not necessarily the canonical payload
        assert_eq!(mask & 0b1101, 0);
        assert!(v.to_array()[1].is_nan());
        assert_eq!(is_nan_x4(splat(f32::NAN)), 0b1111);
        assert_eq!(abs_x4(splat(-2.0)).to_array(), [2.0; 4]);
    }
}
