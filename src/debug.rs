//! Debug-only domain checks.
//!
//! These hooks never return an error. In debug builds a failed check panics
//! (failing the test that tripped it); in release builds they compile to
//! nothing. Callers keep kernel inputs in domain; these only catch upstream
//! modelling bugs during development.

use crate::fast_math::EXP2_MAX_POWER;
use crate::lanes::{FloatLanes, IntLanes};

/// Bits of the IEEE-754 exponent field in place.
const EXPONENT_FIELD: i32 = 0x7f80_0000;

/// Panic in debug builds if any bit of `violations` is set.
///
/// `violations` is a lane bitmask (lane `i` in bit `i`) such as the ones
/// [`log2_domain_violations`] and [`exp2_domain_violations`] return. Release
/// builds skip the check entirely. Prefer [`debug_assert_lanes!`] when
/// building the mask itself costs something.
///
/// [`debug_assert_lanes!`]: crate::debug_assert_lanes
#[track_caller]
#[inline(always)]
pub fn assert_lanes(violations: u8, message: &str) {
    if cfg!(debug_assertions) {
        assert!(
            violations == 0,
            "{} (failing lanes: {:#06b})",
            message,
            violations
        );
    }
}

/// Check a violation bitmask in debug builds without evaluating it in
/// release builds.
///
/// ```
/// use threepg_simd::{debug_assert_lanes, debug::log2_domain_violations, splat};
///
/// let x = splat(3.0);
/// debug_assert_lanes!(log2_domain_violations(x), "stand biomass must be positive");
/// ```
#[macro_export]
macro_rules! debug_assert_lanes {
    ($violations:expr, $message:expr $(,)?) => {
        if cfg!(debug_assertions) {
            $crate::debug::assert_lanes($violations, $message);
        }
    };
}

/// Lanes `log2` (and so `ln` and `pow`) rejects, lane `i` in bit `i`.
///
/// A lane violates the domain when it is `<= 0` or subnormal. Subnormals
/// have an exponent field of zero, which the bit decomposition in `log2`
/// cannot recover from. NaN and `+inf` lanes pass: NaN propagates.
#[inline(always)]
pub fn log2_domain_violations<V: FloatLanes>(x: V) -> u8 {
    let non_positive = x.lanes_le(V::splat(0.0));
    let subnormal = x
        .to_bits()
        .and(V::Int::splat(EXPONENT_FIELD))
        .lanes_eq(V::Int::splat(0));
    non_positive.or(subnormal).bitmask()
}

/// Lanes `exp2` rejects, lane `i` in bit `i`: finite and above 127.
///
/// Infinite and NaN lanes pass.
#[inline(always)]
pub fn exp2_domain_violations<V: FloatLanes>(power: V) -> u8 {
    let field = V::Int::splat(EXPONENT_FIELD);
    let finite = power.to_bits().and(field).lanes_eq(field).lanes_eq(V::Int::splat(0));
    let above = power.lanes_le(V::splat(EXP2_MAX_POWER)).lanes_eq(V::Int::splat(0));
    finite.and(above).bitmask()
}
