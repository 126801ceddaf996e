use crate::check::Check;
use crate::probes::{ProcessProbe, RuntimeProbe};
use std::rc::Rc;

/// True iff the directive is set to a non-empty string. `None` and
/// `Some(String::new())` are both "not set"; neither counts as forking.
fn might_fork(directive: &Option<String>) -> bool {
    directive.as_deref().is_some_and(|s| !s.is_empty())
}

/// Shared violation rule for the `MightForkCheck` family: violated iff the
/// sandbox has a syscall filter installed *and* the runtime is configured
/// to fork on the fatal event this check watches.
fn violates(process: &Rc<dyn ProcessProbe>, directive: &Option<String>) -> bool {
    process.is_syscall_filter_installed() && might_fork(directive)
}

/// `OnError` fork-risk check. Always enforced: if the sandbox forbids
/// forking yet the runtime would fork on a fatal error, startup must fail
/// even in development mode.
pub struct OnErrorForkRiskCheck {
    process: Rc<dyn ProcessProbe>,
    runtime: Rc<dyn RuntimeProbe>,
}

impl OnErrorForkRiskCheck {
    pub fn new(process: Rc<dyn ProcessProbe>, runtime: Rc<dyn RuntimeProbe>) -> Self {
        Self { process, runtime }
    }
}

impl Check for OnErrorForkRiskCheck {
    fn violated(&self) -> bool {
        violates(&self.process, &self.runtime.on_error_directive())
    }

    fn diagnostic(&self) -> String {
        format!(
            "OnError [{}] requires forking but is prevented by system call filters \
             ([bootstrap.seccomp=true]); upgrade to at least Java 8u92 and use ExitOnOutOfMemoryError",
            self.runtime.on_error_directive().unwrap_or_default()
        )
    }

    fn always_enforced(&self) -> bool {
        true
    }

    fn id(&self) -> &'static str {
        "on-error-fork-risk"
    }
}

/// `OnOutOfMemoryError` fork-risk check. Mirrors [`OnErrorForkRiskCheck`]
/// using the `OnOutOfMemoryError` directive.
pub struct OnOutOfMemoryErrorForkRiskCheck {
    process: Rc<dyn ProcessProbe>,
    runtime: Rc<dyn RuntimeProbe>,
}

impl OnOutOfMemoryErrorForkRiskCheck {
    pub fn new(process: Rc<dyn ProcessProbe>, runtime: Rc<dyn RuntimeProbe>) -> Self {
        Self { process, runtime }
    }
}

impl Check for OnOutOfMemoryErrorForkRiskCheck {
    fn violated(&self) -> bool {
        violates(&self.process, &self.runtime.on_out_of_memory_error_directive())
    }

    fn diagnostic(&self) -> String {
        format!(
            "OnOutOfMemoryError [{}] requires forking but is prevented by system call filters \
             ([bootstrap.seccomp=true]); upgrade to at least Java 8u92 and use ExitOnOutOfMemoryError",
            self.runtime
                .on_out_of_memory_error_directive()
                .unwrap_or_default()
        )
    }

    fn always_enforced(&self) -> bool {
        true
    }

    fn id(&self) -> &'static str {
        "on-oom-error-fork-risk"
    }
}
