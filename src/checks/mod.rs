//! The concrete check catalogue. Each submodule implements exactly one
//! check: a probe (or small group), a violation predicate, a diagnostic
//! template, and an enforcement flag.

mod client_vm;
mod fd_limit;
mod fork_risk;
mod g1gc_version;
mod heap_size;
mod max_address_space;
mod max_map_count;
mod max_threads;
mod memory_lock;
mod serial_gc;
mod syscall_filter;

pub use client_vm::ClientVmCheck;
pub use fd_limit::FdLimitCheck;
pub use fork_risk::{OnErrorForkRiskCheck, OnOutOfMemoryErrorForkRiskCheck};
pub use g1gc_version::G1GcVersionCheck;
pub use heap_size::HeapSizeCheck;
pub use max_address_space::MaxAddressSpaceCheck;
pub use max_map_count::MaxMapCountCheck;
pub use max_threads::MaxThreadsCheck;
pub use memory_lock::MemoryLockCheck;
pub use serial_gc::SerialGcCheck;
pub use syscall_filter::SyscallFilterCheck;

/// Required floor for `max_map_count`.
pub const MAX_MAP_COUNT_FLOOR: i64 = 262_144;

/// Required floor for `max_threads`.
pub const MAX_THREADS_FLOOR: i64 = 2_048;
