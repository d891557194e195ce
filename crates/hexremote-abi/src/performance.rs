use std::ffi::{c_int, c_uint};

/// The eight legacy performance-tuning parameters, forwarded to the current
/// backend unchanged. The shim validates none of them -- numeric range
/// checking is the backend's job.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerformanceRequest {
    pub set_mips: c_int,
    pub mips_per_thread: c_uint,
    pub mips_total: c_uint,
    pub set_bus_bw: c_int,
    pub bw_megabytes_per_sec: c_uint,
    pub busbw_usage_percentage: c_uint,
    pub set_latency: c_int,
    pub latency: c_int,
}

/// Discrete operating point the current backend uses to tune compute/power
/// tradeoffs. Discriminants are fixed by the backend contract.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceCorner {
    Svs = 0,
    Nom = 1,
    Turbo = 2,
    Disable = 3,
}

impl PerformanceCorner {
    /// Derive the corner from the legacy bus-bandwidth-usage percentage.
    /// Only the three historical values select a corner; everything else
    /// (zero, out-of-range, or a negative value reinterpreted as unsigned)
    /// disables the voltage-corner request rather than failing.
    pub fn from_bus_usage(busbw_usage_percentage: c_uint) -> Self {
        match busbw_usage_percentage {
            25 => PerformanceCorner::Svs,
            50 => PerformanceCorner::Nom,
            100 => PerformanceCorner::Turbo,
            _ => PerformanceCorner::Disable,
        }
    }
}
