use super::MAX_MAP_COUNT_FLOOR;
use crate::check::Check;
use crate::probes::ProcessProbe;
use std::rc::Rc;

/// Kernel VM map count. Negative sentinel (non-Linux hosts, or any host
/// that cannot report `vm.max_map_count`) is non-violation.
pub struct MaxMapCountCheck {
    process: Rc<dyn ProcessProbe>,
}

impl MaxMapCountCheck {
    pub fn new(process: Rc<dyn ProcessProbe>) -> Self {
        Self { process }
    }
}

impl Check for MaxMapCountCheck {
    fn violated(&self) -> bool {
        let value = self.process.max_map_count();
        value >= 0 && value < MAX_MAP_COUNT_FLOOR
    }

    fn diagnostic(&self) -> String {
        format!(
            "max virtual memory areas vm.max_map_count [{}] is too low, increase to at least [{MAX_MAP_COUNT_FLOOR}]",
            self.process.max_map_count()
        )
    }

    fn id(&self) -> &'static str {
        "max-map-count"
    }
}
