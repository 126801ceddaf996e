//! Process-level OS probes: file-descriptor counts, thread limits,
//! address-space limits, locked-memory status, and the kernel's
//! `vm.max_map_count` tunable. These read `/proc` and call `getrlimit`
//! directly, the same unsafe-FFI idiom the teacher uses for socket tuning
//! (`performance/latency/socket_tuning.rs`) and high-resolution clocks
//! (`performance/latency/time_sync.rs`).

use super::UNKNOWN_I64;
use std::fs;
use std::mem::MaybeUninit;

/// Nullary accessors for the process's resource limits and security state.
/// Every numeric method returns [`UNKNOWN_I64`] when the host cannot report
/// a value; callers must treat that as "cannot determine, therefore cannot
/// fail".
pub trait ProcessProbe {
    fn max_fd_count(&self) -> i64;
    fn is_memory_locked(&self) -> bool;
    fn max_threads(&self) -> i64;
    fn max_address_space(&self) -> i64;
    fn max_map_count(&self) -> i64;
    fn is_syscall_filter_installed(&self) -> bool;
}

/// A real process probe, backed by `getrlimit(2)` and `/proc`. Unsupported
/// quantities on non-Linux hosts fall back to [`UNKNOWN_I64`] rather than
/// raising; a probe that cannot answer is expected, not exceptional.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinuxProcessProbe;

impl LinuxProcessProbe {
    fn getrlimit(resource: i32) -> Option<libc::rlimit> {
        unsafe {
            let mut limit = MaybeUninit::<libc::rlimit>::uninit();
            if libc::getrlimit(resource as libc::c_int, limit.as_mut_ptr()) == 0 {
                Some(limit.assume_init())
            } else {
                None
            }
        }
    }
}

impl ProcessProbe for LinuxProcessProbe {
    fn max_fd_count(&self) -> i64 {
        match Self::getrlimit(libc::RLIMIT_NOFILE) {
            Some(rlim) => rlim_as_i64(rlim.rlim_cur),
            None => UNKNOWN_I64,
        }
    }

    fn is_memory_locked(&self) -> bool {
        fs::read_to_string("/proc/self/status")
            .ok()
            .and_then(|status| {
                status.lines().find_map(|line| {
                    line.strip_prefix("VmLck:")
                        .map(|rest| rest.trim().split_whitespace().next().unwrap_or("0"))
                })
            })
            .and_then(|kb| kb.parse::<u64>().ok())
            .map(|kb| kb > 0)
            .unwrap_or(false)
    }

    fn max_threads(&self) -> i64 {
        #[cfg(target_os = "linux")]
        {
            match Self::getrlimit(libc::RLIMIT_NPROC) {
                Some(rlim) => rlim_as_i64(rlim.rlim_cur),
                None => UNKNOWN_I64,
            }
        }
        #[cfg(not(target_os = "linux"))]
        {
            UNKNOWN_I64
        }
    }

    fn max_address_space(&self) -> i64 {
        match Self::getrlimit(libc::RLIMIT_AS) {
            Some(rlim) => rlim_as_i64(rlim.rlim_cur),
            None => i64::MIN,
        }
    }

    fn max_map_count(&self) -> i64 {
        fs::read_to_string("/proc/sys/vm/max_map_count")
            .ok()
            .and_then(|s| s.trim().parse::<i64>().ok())
            .unwrap_or(UNKNOWN_I64)
    }

    fn is_syscall_filter_installed(&self) -> bool {
        fs::read_to_string("/proc/self/status")
            .ok()
            .and_then(|status| {
                status
                    .lines()
                    .find_map(|line| line.strip_prefix("Seccomp:"))
                    .map(|rest| rest.trim())
                    .map(|mode| mode != "0")
            })
            .unwrap_or(false)
    }
}

/// `rlim_t` is unsigned; the host's own "unlimited" value (`RLIM_INFINITY`)
/// does not fit in an `i64` on some platforms, so it is clamped to
/// `i64::MAX` rather than wrapping into a negative number that would be
/// misread as "unknown".
fn rlim_as_i64(value: libc::rlim_t) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// A probe with canned values, for tests and embedding harnesses that want
/// to exercise specific scenarios without touching the real host.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedProcessProbe {
    pub max_fd_count: i64,
    pub is_memory_locked: bool,
    pub max_threads: i64,
    pub max_address_space: i64,
    pub max_map_count: i64,
    pub is_syscall_filter_installed: bool,
}

impl ProcessProbe for FixedProcessProbe {
    fn max_fd_count(&self) -> i64 {
        self.max_fd_count
    }
    fn is_memory_locked(&self) -> bool {
        self.is_memory_locked
    }
    fn max_threads(&self) -> i64 {
        self.max_threads
    }
    fn max_address_space(&self) -> i64 {
        self.max_address_space
    }
    fn max_map_count(&self) -> i64 {
        self.max_map_count
    }
    fn is_syscall_filter_installed(&self) -> bool {
        self.is_syscall_filter_installed
    }
}
