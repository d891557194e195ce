//! ABI-level data model for the Hexagon remote compatibility layer.
//!
//! These types cross the legacy/current boundary and must match the remote
//! backend contract bit-for-bit. Nothing here is serialized -- the boundary
//! is an in-process FFI surface, and the layouts are `#[repr(C)]` where the
//! backend dictates them.

pub mod buffer;
pub mod handle;
pub mod performance;

pub use buffer::{RemoteBuffer, ScalarValue, SCALAR_SIZE};
pub use handle::{RemoteHandle, ERR_OVERSIZE_SCALAR, ERR_INVALID_ARGS, STATUS_OK};
pub use performance::{PerformanceCorner, PerformanceRequest};
