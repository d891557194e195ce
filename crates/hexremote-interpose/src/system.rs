//! Binding of [`RemoteBackend`] to the real current-version entry points.
//!
//! The v2/v3 symbols live in the backend runtime this library is loaded
//! alongside; the dynamic linker resolves them at load time.

use std::ffi::{c_char, c_int, c_uint, CStr};

use hexremote_abi::{
    PerformanceCorner, PerformanceRequest, RemoteBuffer, RemoteHandle, ScalarValue,
};
use hexremote_compat::RemoteBackend;

extern "C" {
    fn halide_hexagon_remote_run_v2(
        module_ptr: RemoteHandle,
        function: RemoteHandle,
        input_buffers_ptrs: *const RemoteBuffer,
        input_buffers_len: c_int,
        output_buffers_ptrs: *const RemoteBuffer,
        output_buffers_len: c_int,
        input_scalars_ptrs: *const ScalarValue,
        input_scalars_len: c_int,
    ) -> c_int;

    fn halide_hexagon_remote_set_performance_v2(
        set_mips: c_int,
        mips_per_thread: c_uint,
        mips_total: c_uint,
        set_bus_bw: c_int,
        bw_megabytes_per_sec: c_uint,
        busbw_usage_percentage: c_uint,
        set_latency: c_int,
        latency: c_int,
        dcvs_voltage_corner: c_int,
    ) -> c_int;

    fn halide_hexagon_remote_load_library(
        soname: *const c_char,
        soname_len: c_int,
        code: *const u8,
        code_len: c_int,
        module_ptr: *mut RemoteHandle,
    ) -> c_int;

    fn halide_hexagon_remote_release_library(module_ptr: RemoteHandle) -> c_int;
}

/// The real backend: each trait method is one call into the corresponding
/// extern symbol, with no translation of its own.
pub struct SystemBackend;

impl RemoteBackend for SystemBackend {
    fn run_v2(
        &self,
        module: RemoteHandle,
        function: RemoteHandle,
        input_buffers: &[RemoteBuffer],
        output_buffers: &[RemoteBuffer],
        input_scalars: &[ScalarValue],
    ) -> c_int {
        // SAFETY: the slices stay alive for the duration of the call and the
        // backend does not retain the pointers past it.
        unsafe {
            halide_hexagon_remote_run_v2(
                module,
                function,
                input_buffers.as_ptr(),
                input_buffers.len() as c_int,
                output_buffers.as_ptr(),
                output_buffers.len() as c_int,
                input_scalars.as_ptr(),
                input_scalars.len() as c_int,
            )
        }
    }

    fn set_performance_v2(&self, request: &PerformanceRequest, corner: PerformanceCorner) -> c_int {
        // SAFETY: plain by-value integer arguments.
        unsafe {
            halide_hexagon_remote_set_performance_v2(
                request.set_mips,
                request.mips_per_thread,
                request.mips_total,
                request.set_bus_bw,
                request.bw_megabytes_per_sec,
                request.busbw_usage_percentage,
                request.set_latency,
                request.latency,
                corner as c_int,
            )
        }
    }

    fn load_library(&self, soname: &CStr, code: &[u8]) -> (RemoteHandle, c_int) {
        let soname_bytes = soname.to_bytes_with_nul();
        let mut module: RemoteHandle = 0;
        // SAFETY: soname is NUL-terminated with the forwarded length, code
        // covers code.len() bytes, and module is a valid out pointer.
        let status = unsafe {
            halide_hexagon_remote_load_library(
                soname.as_ptr(),
                soname_bytes.len() as c_int,
                code.as_ptr(),
                code.len() as c_int,
                &mut module,
            )
        };
        (module, status)
    }

    fn release_library(&self, module: RemoteHandle) -> c_int {
        // SAFETY: the handle is opaque and forwarded by value.
        unsafe { halide_hexagon_remote_release_library(module) }
    }
}
