//! CPU targets for multiversioned batch loops.
//!
//! The batch functions in [`simd`](crate::simd) are compiled once per target
//! below and dispatched at runtime. The kernels never fuse multiplies and
//! adds, so every clone produces identical bits.

/// Multiversion an item over the x86-64 feature levels.
#[cfg(target_arch = "x86_64")]
#[macro_export]
#[doc(hidden)]
macro_rules! simd_multiversion {
    ($($item:tt)*) => {
        #[multiversion::multiversion(targets(
            // x86-64-v3 (Haswell 2013+, Zen 1 2017+)
            "x86_64+sse+sse2+sse3+ssse3+sse4.1+sse4.2+popcnt+cmpxchg16b+avx+avx2+bmi1+bmi2+f16c+fma+lzcnt+movbe+xsave+fxsr",
            // x86-64-v2 (Nehalem 2008+)
            "x86_64+sse+sse2+sse3+ssse3+sse4.1+sse4.2+popcnt+cmpxchg16b+fxsr",
        ))]
        $($item)*
    };
}

/// Multiversion an item over the AArch64 feature levels.
#[cfg(target_arch = "aarch64")]
#[macro_export]
#[doc(hidden)]
macro_rules! simd_multiversion {
    ($($item:tt)*) => {
        #[multiversion::multiversion(targets(
            // aarch64 baseline (all ARM64)
            "aarch64+neon+lse+aes+sha2+crc",
        ))]
        $($item)*
    };
}

/// No multiversioning on other architectures (wasm32, etc.).
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[macro_export]
#[doc(hidden)]
macro_rules! simd_multiversion {
    ($($item:tt)*) => {
        $($item)*
    };
}
