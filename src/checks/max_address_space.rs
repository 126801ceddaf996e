use crate::check::Check;
use crate::probes::{HostDescriptor, ProcessProbe};
use std::rc::Rc;

/// Max address-space size. Violated iff the reported limit is neither the
/// host's `rlim_infinity` sentinel nor the probe's "unknown" sentinel
/// (`i64::MIN`). Those two are distinct: `rlim_infinity` is a real,
/// legitimate value ("unlimited"), while `i64::MIN` means the probe could
/// not determine anything at all.
pub struct MaxAddressSpaceCheck {
    process: Rc<dyn ProcessProbe>,
    host: Rc<dyn HostDescriptor>,
}

impl MaxAddressSpaceCheck {
    pub fn new(process: Rc<dyn ProcessProbe>, host: Rc<dyn HostDescriptor>) -> Self {
        Self { process, host }
    }
}

impl Check for MaxAddressSpaceCheck {
    fn violated(&self) -> bool {
        let value = self.process.max_address_space();
        value != i64::MIN && value != self.host.rlim_infinity()
    }

    fn diagnostic(&self) -> String {
        format!(
            "max size virtual memory [{}] for elasticsearch process is too low, increase to [unlimited]",
            self.process.max_address_space()
        )
    }

    fn id(&self) -> &'static str {
        "max-size-virtual-memory"
    }
}
