use crate::check::Check;
use crate::probes::ProcessProbe;
use std::rc::Rc;

/// Flags a requested syscall filter (seccomp) that failed to install.
pub struct SyscallFilterCheck {
    process: Rc<dyn ProcessProbe>,
    syscall_filter_requested: bool,
}

impl SyscallFilterCheck {
    pub fn new(process: Rc<dyn ProcessProbe>, syscall_filter_requested: bool) -> Self {
        Self {
            process,
            syscall_filter_requested,
        }
    }
}

impl Check for SyscallFilterCheck {
    fn violated(&self) -> bool {
        self.syscall_filter_requested && !self.process.is_syscall_filter_installed()
    }

    fn diagnostic(&self) -> String {
        "system call filters failed to install; check the logs and fix your configuration \
         or disable system call filters at your own risk"
            .to_string()
    }

    fn id(&self) -> &'static str {
        "syscall-filter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probes::process::FixedProcessProbe;

    fn check(requested: bool, installed: bool) -> SyscallFilterCheck {
        SyscallFilterCheck::new(
            Rc::new(FixedProcessProbe {
                is_syscall_filter_installed: installed,
                ..Default::default()
            }),
            requested,
        )
    }

    #[test]
    fn requested_but_not_installed_violates() {
        assert!(check(true, false).violated());
    }

    #[test]
    fn requested_and_installed_ok() {
        assert!(!check(true, true).violated());
    }

    #[test]
    fn not_requested_never_violates() {
        assert!(!check(false, false).violated());
    }
}
