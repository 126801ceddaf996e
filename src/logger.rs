//! The engine's logging seam. Kept as a narrow trait so the core crate's
//! logic does not hard-depend on `tracing`; the crate's own default
//! implementation is `tracing`-backed to match the teacher's stack.

/// A minimal info-level sink. The engine calls `info` at most once per
/// invocation.
pub trait Logger {
    fn info(&self, msg: &str);
}

/// Default logger, backed by the `tracing` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }
}

/// A logger that records every call, for tests that assert on log volume.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingLogger {
    pub messages: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl Logger for RecordingLogger {
    fn info(&self, msg: &str) {
        self.messages.borrow_mut().push(msg.to_string());
    }
}
