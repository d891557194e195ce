use std::ffi::c_int;

use hexremote_abi::ERR_OVERSIZE_SCALAR;

/// Failures the shim detects locally, before any remote call is made.
/// Backend-originated failures are never represented here -- their status
/// codes pass through the shim untouched.
#[derive(Debug, thiserror::Error)]
pub enum ShimError {
    #[error("scalar argument {index} is larger than {limit} bytes ({actual} bytes)")]
    ScalarTooLarge {
        index: usize,
        limit: usize,
        actual: usize,
    },
}

impl ShimError {
    /// The negative status code the legacy ABI reports for this failure.
    pub fn status(&self) -> c_int {
        match self {
            ShimError::ScalarTooLarge { .. } => ERR_OVERSIZE_SCALAR,
        }
    }
}
