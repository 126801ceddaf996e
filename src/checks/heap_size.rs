use crate::check::Check;
use crate::probes::RuntimeProbe;
use std::rc::Rc;

/// Heap-size equality. Skipped (non-violation) when either probe reports
/// `0` ("not configured").
pub struct HeapSizeCheck {
    runtime: Rc<dyn RuntimeProbe>,
}

impl HeapSizeCheck {
    pub fn new(runtime: Rc<dyn RuntimeProbe>) -> Self {
        Self { runtime }
    }
}

impl Check for HeapSizeCheck {
    fn violated(&self) -> bool {
        let initial = self.runtime.initial_heap_size();
        let max = self.runtime.max_heap_size();
        initial > 0 && max > 0 && initial != max
    }

    fn diagnostic(&self) -> String {
        format!(
            "initial heap size [{}] not equal to maximum heap size [{}]; these values must be set to the same value",
            self.runtime.initial_heap_size(),
            self.runtime.max_heap_size()
        )
    }

    fn id(&self) -> &'static str {
        "heap-size-equality"
    }
}
