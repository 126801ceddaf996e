use super::MAX_THREADS_FLOOR;
use crate::check::Check;
use crate::probes::ProcessProbe;
use std::rc::Rc;

/// Max number of threads. Negative sentinel is non-violation.
pub struct MaxThreadsCheck {
    process: Rc<dyn ProcessProbe>,
}

impl MaxThreadsCheck {
    pub fn new(process: Rc<dyn ProcessProbe>) -> Self {
        Self { process }
    }
}

impl Check for MaxThreadsCheck {
    fn violated(&self) -> bool {
        let value = self.process.max_threads();
        value >= 0 && value < MAX_THREADS_FLOOR
    }

    fn diagnostic(&self) -> String {
        format!(
            "max number of threads [{}] for user is too low, increase to at least [{MAX_THREADS_FLOOR}]",
            self.process.max_threads()
        )
    }

    fn id(&self) -> &'static str {
        "max-number-of-threads"
    }
}
