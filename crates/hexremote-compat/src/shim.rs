use std::ffi::{c_int, CString};
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, error};

use hexremote_abi::{
    PerformanceCorner, PerformanceRequest, RemoteBuffer, RemoteHandle, ScalarValue, SCALAR_SIZE,
};

use crate::backend::RemoteBackend;
use crate::error::ShimError;

/// Naming convention the remote dynamic loader expects for kernel images.
/// The loader caches by soname, so the numeric field must never repeat
/// within one process lifetime.
const SONAME_PREFIX: &str = "libhalide_kernels";
const SONAME_SUFFIX: &str = ".so";

/// Backward-compatibility adapter exposing the legacy Hexagon remote
/// operations over a current-version backend.
///
/// Stateless apart from the soname counter. Safe to share across whatever
/// threads the RPC dispatch layer uses; the counter is the only shared
/// mutable state and is incremented atomically.
pub struct CompatShim<B> {
    backend: B,
    next_library_id: AtomicU64,
}

impl<B: RemoteBackend> CompatShim<B> {
    pub fn new(backend: B) -> Self {
        Self::with_library_counter(backend, 0)
    }

    /// Start the soname counter at `seed` instead of 0. Tests use this to
    /// pin down the synthesized names deterministically.
    pub fn with_library_counter(backend: B, seed: u64) -> Self {
        Self {
            backend,
            next_library_id: AtomicU64::new(seed),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Legacy kernel invocation: pack the variable-length scalar buffers
    /// into fixed-size slots, then forward to `run_v2`.
    ///
    /// Buffers are forwarded untouched. A scalar larger than [`SCALAR_SIZE`]
    /// aborts the call before anything reaches the backend.
    pub fn run(
        &self,
        module: RemoteHandle,
        function: RemoteHandle,
        input_buffers: &[RemoteBuffer],
        output_buffers: &[RemoteBuffer],
        input_scalars: &[&[u8]],
    ) -> c_int {
        let scalars = match pack_scalars(input_scalars) {
            Ok(scalars) => scalars,
            Err(e) => {
                error!("{}", e);
                return e.status();
            }
        };

        debug!(
            module,
            function,
            inputs = input_buffers.len(),
            outputs = output_buffers.len(),
            scalars = scalars.len(),
            "run -> run_v2"
        );

        self.backend
            .run_v2(module, function, input_buffers, output_buffers, &scalars)
    }

    /// Legacy performance request: derive the voltage corner from the
    /// bus-bandwidth-usage percentage and forward everything to
    /// `set_performance_v2`. The other seven parameters pass through
    /// unvalidated.
    pub fn set_performance(&self, request: &PerformanceRequest) -> c_int {
        let corner = PerformanceCorner::from_bus_usage(request.busbw_usage_percentage);
        debug!(
            busbw_usage_percentage = request.busbw_usage_percentage,
            ?corner,
            "set_performance -> set_performance_v2"
        );
        self.backend.set_performance_v2(request, corner)
    }

    /// Legacy kernel-image load. The legacy call carried no soname, but the
    /// remote loader caches modules by name, so a stale module would come
    /// back for a repeated name. Synthesize a process-unique one and forward
    /// to `load_library`.
    pub fn initialize_kernels(&self, code: &[u8]) -> (RemoteHandle, c_int) {
        let id = self.next_library_id.fetch_add(1, Ordering::Relaxed);
        let soname = synthesize_soname(id);
        debug!(soname = %soname.to_string_lossy(), code_len = code.len(), "initialize_kernels -> load_library");
        self.backend.load_library(&soname, code)
    }

    /// Legacy unload. Pure renaming onto `release_library`.
    pub fn release_kernels(&self, module: RemoteHandle) -> c_int {
        self.backend.release_library(module)
    }
}

/// Copy each legacy scalar buffer into its own fixed-size slot, preserving
/// positional order. Fails on the first scalar that does not fit, naming the
/// offending argument and both sizes.
fn pack_scalars(input_scalars: &[&[u8]]) -> Result<Vec<ScalarValue>, ShimError> {
    let mut scalars = Vec::with_capacity(input_scalars.len());
    for (index, scalar) in input_scalars.iter().enumerate() {
        if scalar.len() > SCALAR_SIZE {
            return Err(ShimError::ScalarTooLarge {
                index,
                limit: SCALAR_SIZE,
                actual: scalar.len(),
            });
        }
        scalars.push(ScalarValue::from_leading_bytes(scalar));
    }
    Ok(scalars)
}

/// Format the loader-facing soname for counter value `id`. Zero-padded to
/// four digits, widening past 9999 so uniqueness is preserved.
fn synthesize_soname(id: u64) -> CString {
    let name = format!("{SONAME_PREFIX}{id:04}{SONAME_SUFFIX}");
    CString::new(name).expect("soname format contains no interior NUL")
}
