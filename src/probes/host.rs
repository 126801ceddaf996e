//! Platform-conditional constants, exposed as an injected descriptor rather
//! than compile-time `cfg!`, so checks that depend on the host platform are
//! testable cross-platform without recompilation.

/// The host's sentinel for "this rlimit is unlimited" and the flavor of
/// file-descriptor floor it expects.
pub trait HostDescriptor {
    /// `true` on macOS, where the FD floor and the `rlim_infinity` sentinel
    /// both differ from every other supported host.
    fn is_macos(&self) -> bool;

    /// The minimum acceptable `max_fd_count` for this host: 10240 on macOS,
    /// 65536 everywhere else.
    fn fd_floor(&self) -> i64 {
        if self.is_macos() {
            10_240
        } else {
            65_536
        }
    }

    /// The host-native sentinel meaning "no limit": `i64::MAX`
    /// (`9223372036854775807`) on macOS, `-1` everywhere else.
    fn rlim_infinity(&self) -> i64 {
        if self.is_macos() {
            i64::MAX
        } else {
            -1
        }
    }
}

/// The real host, detected from `std::env::consts::OS` at runtime so the
/// same compiled binary's decisions stay inspectable and the logic stays
/// testable against a fake host.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealHost;

impl HostDescriptor for RealHost {
    fn is_macos(&self) -> bool {
        std::env::consts::OS == "macos"
    }
}

/// A fixed host descriptor for tests and embedding harnesses that want to
/// exercise macOS- or Linux-flavored behavior regardless of the machine
/// actually running the test.
#[derive(Debug, Clone, Copy)]
pub struct FixedHost {
    pub macos: bool,
}

impl HostDescriptor for FixedHost {
    fn is_macos(&self) -> bool {
        self.macos
    }
}
