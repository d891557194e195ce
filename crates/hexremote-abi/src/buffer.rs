use std::ffi::c_int;

use bytemuck::{Pod, Zeroable};

/// Size in bytes of the largest scalar type the current backend accepts.
pub const SCALAR_SIZE: usize = 8;

/// One memory region crossing the RPC boundary: either an input/output
/// buffer or a legacy scalar argument staged as a tiny buffer.
///
/// Layout matches the generated FastRPC octet-sequence descriptor. The
/// memory is caller-owned; the shim forwards the descriptor and holds no
/// reference after the call returns.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RemoteBuffer {
    pub data: *mut u8,
    pub data_len: c_int,
}

impl RemoteBuffer {
    /// View the descriptor's bytes.
    ///
    /// # Safety
    /// `data` must point to at least `data_len` readable bytes for the
    /// duration of the borrow, or `data_len` must be zero.
    pub unsafe fn as_slice(&self) -> &[u8] {
        if self.data.is_null() || self.data_len <= 0 {
            &[]
        } else {
            // SAFETY: non-null and at least data_len bytes per the contract above.
            unsafe { std::slice::from_raw_parts(self.data, self.data_len as usize) }
        }
    }
}

/// Fixed-capacity slot for one scalar argument in the current backend's
/// native representation. Bytes past the scalar's own length stay zero.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct ScalarValue {
    pub bytes: [u8; SCALAR_SIZE],
}

impl ScalarValue {
    /// Copy `src` into the slot's leading bytes. `src.len()` must be at
    /// most [`SCALAR_SIZE`]; the packer checks this before calling.
    pub fn from_leading_bytes(src: &[u8]) -> Self {
        let mut value = Self::zeroed();
        value.bytes[..src.len()].copy_from_slice(src);
        value
    }
}
