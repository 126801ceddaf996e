use crate::check::Check;
use crate::probes::ProcessProbe;
use std::rc::Rc;

/// Memory-lock. `mlockall_requested` is an operator config knob, not a
/// probe reading.
pub struct MemoryLockCheck {
    process: Rc<dyn ProcessProbe>,
    mlockall_requested: bool,
}

impl MemoryLockCheck {
    pub fn new(process: Rc<dyn ProcessProbe>, mlockall_requested: bool) -> Self {
        Self {
            process,
            mlockall_requested,
        }
    }
}

impl Check for MemoryLockCheck {
    fn violated(&self) -> bool {
        self.mlockall_requested && !self.process.is_memory_locked()
    }

    fn diagnostic(&self) -> String {
        "memory locking requested for elasticsearch process but memory is not locked".to_string()
    }

    fn id(&self) -> &'static str {
        "memory-lock"
    }
}
