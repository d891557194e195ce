use std::ffi::{c_int, CStr};

use hexremote_abi::{PerformanceCorner, PerformanceRequest, RemoteBuffer, RemoteHandle, ScalarValue};

/// The four current-version backend operations the shim forwards to.
///
/// Implemented over the real extern symbols by the interpose library and by
/// recording stubs in tests. Every method returns the backend's raw status
/// code; the shim propagates it verbatim.
pub trait RemoteBackend {
    /// Invoke a kernel function with scalars already packed into the
    /// current backend's fixed-size representation.
    fn run_v2(
        &self,
        module: RemoteHandle,
        function: RemoteHandle,
        input_buffers: &[RemoteBuffer],
        output_buffers: &[RemoteBuffer],
        input_scalars: &[ScalarValue],
    ) -> c_int;

    /// Apply a performance request together with its derived voltage corner.
    fn set_performance_v2(&self, request: &PerformanceRequest, corner: PerformanceCorner) -> c_int;

    /// Load a kernel image under the given soname. `soname` is forwarded
    /// with its terminating NUL; the returned handle identifies the loaded
    /// module on success.
    fn load_library(&self, soname: &CStr, code: &[u8]) -> (RemoteHandle, c_int);

    /// Unload a previously loaded kernel module.
    fn release_library(&self, module: RemoteHandle) -> c_int;
}
