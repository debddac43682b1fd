//! Scalar (single-value) kernels.
//!
//! One-lane instantiations of the [`fast_math`](crate::fast_math) kernels.
//! These are not `f32::log2`/`f32::exp2`: they carry the same approximation
//! error as the 4-lane path, and for in-domain inputs return exactly the
//! bits lane `i` of the matching `_x4` function would.

use crate::fast_math;

/// Base-2 logarithm of a positive, normal `x`.
#[inline]
pub fn log2(x: f32) -> f32 {
    fast_math::log2(x)
}

/// 2 raised to `power`. Returns `0.0` below -127.
#[inline]
pub fn exp2(power: f32) -> f32 {
    fast_math::exp2(power)
}

/// Natural logarithm of a positive, normal `x`.
#[inline]
pub fn ln(x: f32) -> f32 {
    fast_math::ln(x)
}

/// e raised to `power`.
#[inline]
pub fn exp(power: f32) -> f32 {
    fast_math::exp(power)
}

/// `x` raised to `y`, for `x > 0`.
#[inline]
pub fn pow(x: f32, y: f32) -> f32 {
    fast_math::pow(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fast_math::{exp_x4, exp2_x4, ln_x4, log2_x4, pow_x4};
    use wide::f32x4;

    // Inputs spanning the magnitudes the growth model sees: leaf area
    // indices, biomass in t/ha, stocking, radiation sums.
    const INPUTS: [f32; 16] = [
        1.0e-6, 0.003, 0.17, 0.5, 0.999, 1.0, 1.001, 2.0, 3.3, 12.5, 77.0, 550.0, 1234.5, 2.0e4,
        7.5e5, 3.0e9,
    ];

    #[test]
    fn test_scalar_matches_x4_bitwise() {
        for chunk in INPUTS.chunks_exact(4) {
            let x: [f32; 4] = [chunk[0], chunk[1], chunk[2], chunk[3]];
            let v = f32x4::from(x);
            let y = f32x4::from([0.42, 2.4, -1.3, 0.0]);

            let l2 = log2_x4(v).to_array();
            let ln_v = ln_x4(v).to_array();
            let p = pow_x4(v, y).to_array();
            let powers = log2_x4(v);
            let e2 = exp2_x4(powers).to_array();
            let e = exp_x4(powers).to_array();
            let powers = powers.to_array();
            let y = y.to_array();

            for i in 0..4 {
                assert_eq!(log2(x[i]).to_bits(), l2[i].to_bits(), "log2({})", x[i]);
                assert_eq!(ln(x[i]).to_bits(), ln_v[i].to_bits(), "ln({})", x[i]);
                assert_eq!(pow(x[i], y[i]).to_bits(), p[i].to_bits(), "pow({})", x[i]);
                assert_eq!(exp2(powers[i]).to_bits(), e2[i].to_bits(), "exp2({})", powers[i]);
                assert_eq!(exp(powers[i]).to_bits(), e[i].to_bits(), "exp({})", powers[i]);
            }
        }
    }

    #[test]
    fn test_scalar_roundtrip() {
        for &x in INPUTS.iter() {
            let back = exp2(log2(x));
            assert!(
                ((back - x) / x).abs() < 3e-5,
                "exp2(log2({})) = {}",
                x,
                back
            );
        }
    }

    #[test]
    fn test_scalar_underflow() {
        assert_eq!(exp2(-127.01), 0.0);
        assert_eq!(exp(-100.0), 0.0);
    }
}
