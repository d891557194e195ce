//! Legacy-to-current translation layer for the Hexagon remote API.
//!
//! Older callers dispatch kernels through the legacy entry points (`run`,
//! `set_performance`, `initialize_kernels`, `release_kernels`). The current
//! backend only accepts the evolved shapes (`run_v2`, `set_performance_v2`,
//! `load_library`, `release_library`). [`CompatShim`] repacks each legacy
//! call losslessly and forwards it, propagating the backend's status
//! verbatim -- no retries, no wrapping, no behavior change for existing
//! callers.
//!
//! The current backend is injected as a [`RemoteBackend`], so tests can
//! substitute a recording stub and the interpose library can bind the real
//! extern symbols.

pub mod backend;
pub mod error;
pub mod shim;

pub use backend::RemoteBackend;
pub use error::ShimError;
pub use shim::CompatShim;
