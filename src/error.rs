//! Error types.
//!
//! The kernels themselves never fail (out-of-domain input is a programming
//! error, see [`debug`](crate::debug)). Only configuration parsing does.

use alloc::string::{String, ToString};

/// A string did not name a [`SimdWidth`](crate::SimdWidth).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown SIMD width {given:?}, expected \"scalar\" or \"128\"")]
pub struct ParseSimdWidthError {
    given: String,
}

impl ParseSimdWidthError {
    pub(crate) fn new(given: &str) -> Self {
        Self {
            given: given.to_string(),
        }
    }

    /// The rejected input.
    pub fn given(&self) -> &str {
        &self.given
    }
}
