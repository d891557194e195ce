//! Legacy Hexagon remote API interposition library.
//!
//! This cdylib exports the legacy kernel-dispatch entry points and adapts
//! each call onto the current ("v2"/"v3") backend contract via
//! [`hexremote_compat::CompatShim`]. It is loaded in place of the old shim
//! next to the backend runtime, which provides the v2/v3 symbols.
//!
//! Set HEXREMOTE_LOG=debug (or trace, info, warn, error) for diagnostics.

mod system;

use std::ffi::{c_int, c_uint};
use std::sync::OnceLock;

use tracing::info;

use hexremote_abi::{PerformanceRequest, RemoteBuffer, RemoteHandle, ERR_INVALID_ARGS};
use hexremote_compat::CompatShim;

use system::SystemBackend;

static SHIM: OnceLock<CompatShim<SystemBackend>> = OnceLock::new();

fn shim() -> &'static CompatShim<SystemBackend> {
    SHIM.get_or_init(|| {
        // Initialize logging on the first intercepted call.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("HEXREMOTE_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .try_init();
        info!("hexremote interpose active, forwarding to v2/v3 entry points");
        CompatShim::new(SystemBackend)
    })
}

/// Borrow a caller-provided descriptor array. A null pointer is only
/// acceptable together with a non-positive length.
///
/// # Safety
/// `ptr` must point to `len` valid descriptors when non-null.
unsafe fn buffer_slice<'a>(ptr: *const RemoteBuffer, len: c_int) -> Option<&'a [RemoteBuffer]> {
    if len <= 0 {
        Some(&[])
    } else if ptr.is_null() {
        None
    } else {
        // SAFETY: non-null with len valid descriptors per the contract above.
        Some(unsafe { std::slice::from_raw_parts(ptr, len as usize) })
    }
}

// ── Exported legacy entry points ─────────────────────────────────────

#[no_mangle]
pub unsafe extern "C" fn halide_hexagon_remote_run(
    module_ptr: RemoteHandle,
    function: RemoteHandle,
    input_buffers_ptrs: *mut RemoteBuffer,
    input_buffers_len: c_int,
    output_buffers_ptrs: *mut RemoteBuffer,
    output_buffers_len: c_int,
    input_scalars_ptrs: *const RemoteBuffer,
    input_scalars_len: c_int,
) -> c_int {
    // SAFETY: descriptor arrays are valid for their lengths per the legacy ABI.
    let (input_buffers, output_buffers, scalar_descs) = unsafe {
        let Some(input_buffers) = buffer_slice(input_buffers_ptrs, input_buffers_len) else {
            return ERR_INVALID_ARGS;
        };
        let Some(output_buffers) = buffer_slice(output_buffers_ptrs, output_buffers_len) else {
            return ERR_INVALID_ARGS;
        };
        let Some(scalar_descs) = buffer_slice(input_scalars_ptrs, input_scalars_len) else {
            return ERR_INVALID_ARGS;
        };
        (input_buffers, output_buffers, scalar_descs)
    };

    // SAFETY: each scalar descriptor covers data_len caller-owned bytes.
    let input_scalars: Vec<&[u8]> = scalar_descs
        .iter()
        .map(|desc| unsafe { desc.as_slice() })
        .collect();

    shim().run(
        module_ptr,
        function,
        input_buffers,
        output_buffers,
        &input_scalars,
    )
}

#[no_mangle]
pub extern "C" fn halide_hexagon_remote_set_performance(
    set_mips: c_int,
    mips_per_thread: c_uint,
    mips_total: c_uint,
    set_bus_bw: c_int,
    bw_megabytes_per_sec: c_uint,
    busbw_usage_percentage: c_uint,
    set_latency: c_int,
    latency: c_int,
) -> c_int {
    shim().set_performance(&PerformanceRequest {
        set_mips,
        mips_per_thread,
        mips_total,
        set_bus_bw,
        bw_megabytes_per_sec,
        busbw_usage_percentage,
        set_latency,
        latency,
    })
}

#[no_mangle]
pub unsafe extern "C" fn halide_hexagon_remote_initialize_kernels_v3(
    code: *const u8,
    code_len: c_int,
    module_ptr: *mut RemoteHandle,
) -> c_int {
    if module_ptr.is_null() || (code.is_null() && code_len > 0) {
        return ERR_INVALID_ARGS;
    }

    let code = if code_len <= 0 {
        &[]
    } else {
        // SAFETY: non-null and code_len bytes long, checked above.
        unsafe { std::slice::from_raw_parts(code, code_len as usize) }
    };

    let (module, status) = shim().initialize_kernels(code);
    // SAFETY: module_ptr is non-null, checked above.
    unsafe { *module_ptr = module };
    status
}

#[no_mangle]
pub extern "C" fn halide_hexagon_remote_release_kernels_v2(module_ptr: RemoteHandle) -> c_int {
    shim().release_kernels(module_ptr)
}
