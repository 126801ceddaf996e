use crate::check::Check;
use crate::probes::RuntimeProbe;
use std::rc::Rc;

/// Flags a JVM reporting it is running the client VM instead of the
/// server VM.
pub struct ClientVmCheck {
    runtime: Rc<dyn RuntimeProbe>,
}

impl ClientVmCheck {
    pub fn new(runtime: Rc<dyn RuntimeProbe>) -> Self {
        Self { runtime }
    }
}

impl Check for ClientVmCheck {
    fn violated(&self) -> bool {
        self.runtime.vm_name().contains("Client VM")
    }

    fn diagnostic(&self) -> String {
        format!(
            "JVM is using the client VM [{}] but should be using a server VM for the best performance",
            self.runtime.vm_name()
        )
    }

    fn id(&self) -> &'static str {
        "client-vm"
    }
}
