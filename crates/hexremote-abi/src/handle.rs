use std::ffi::c_int;

/// An identifier for a loaded kernel module or a function within one.
/// Opaque to the shim -- the remote backend assigns these and is the only
/// party that interprets them. Wide enough to carry a remote-side pointer.
pub type RemoteHandle = u64;

/// Status returned by every entry point on success.
pub const STATUS_OK: c_int = 0;

/// A legacy scalar argument did not fit in a [`crate::ScalarValue`] slot.
/// Detected locally, before any remote call is made.
pub const ERR_OVERSIZE_SCALAR: c_int = -1;

/// A legacy caller passed a null pointer with a nonzero length.
pub const ERR_INVALID_ARGS: c_int = -2;
