use crate::check::Check;
use crate::probes::RuntimeProbe;
use std::rc::Rc;

/// Flags a JVM configured to use the serial garbage collector.
pub struct SerialGcCheck {
    runtime: Rc<dyn RuntimeProbe>,
}

impl SerialGcCheck {
    pub fn new(runtime: Rc<dyn RuntimeProbe>) -> Self {
        Self { runtime }
    }
}

impl Check for SerialGcCheck {
    fn violated(&self) -> bool {
        self.runtime.use_serial_gc() == "true"
    }

    fn diagnostic(&self) -> String {
        "JVM is using the serial collector but should not be for the best performance; \
         either it's the default for the VM [client] or -XX:+UseSerialGC was explicitly \
         specified; switch to a throughput collector"
            .to_string()
    }

    fn id(&self) -> &'static str {
        "serial-collector"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probes::runtime::FixedRuntimeProbe;

    fn check(use_serial_gc: &str) -> SerialGcCheck {
        SerialGcCheck::new(Rc::new(FixedRuntimeProbe {
            use_serial_gc: use_serial_gc.to_string(),
            ..Default::default()
        }))
    }

    #[test]
    fn serial_gc_violates() {
        let c = check("true");
        assert!(c.violated());
        assert!(c.diagnostic().contains("serial collector"));
    }

    #[test]
    fn non_serial_gc_ok() {
        assert!(!check("false").violated());
    }

    #[test]
    fn malformed_value_is_treated_as_false() {
        assert!(!check("garbage").violated());
    }
}
