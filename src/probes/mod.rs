//! Probe interfaces: pure, nullary accessors for OS and runtime quantities.
//! A probe call must complete in bounded time and must never raise; if the
//! OS cannot report a value, the probe returns its documented "unknown"
//! sentinel.

pub mod host;
pub mod process;
pub mod runtime;

pub use host::HostDescriptor;
pub use process::ProcessProbe;
pub use runtime::RuntimeProbe;

/// Sentinel used by `i64`-valued probes to mean "the OS did not report a
/// value for this quantity". The catalogue checks in `crate::checks` treat
/// this as non-violation.
pub const UNKNOWN_I64: i64 = -1;

/// The zero-or-absent sentinel used for byte-size probes (heap sizes):
/// `0` means "not configured", distinct from "unknown".
pub const NOT_CONFIGURED_BYTES: i64 = 0;
