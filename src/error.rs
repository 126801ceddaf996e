//! Error types for the bootstrap engine.
//!
//! Two distinct failure shapes: a configuration error raised synchronously
//! from constructors, and the aggregated validation failure raised once at
//! the end of an engine invocation. Neither is built on top of a generic
//! boxed-error or `anyhow`; callers that want to enumerate individual
//! violations need the concrete `ValidationFailure::causes`.

use std::fmt;

/// Raised synchronously when a check is constructed with an invalid
/// parameter (e.g. a non-positive floor). Never aggregated; escapes at
/// construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    pub fn limit_must_be_positive(n: i64) -> Self {
        Self {
            message: format!("limit must be positive but was [{n}]"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ConfigError {}

/// The aggregated failure raised by `Engine::run` when one or more checks
/// violate. `causes()` preserves check order and is not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    causes: Vec<String>,
}

impl ValidationFailure {
    pub(crate) fn from_diagnostics(diagnostics: Vec<String>) -> Self {
        Self { causes: diagnostics }
    }

    /// The individual per-check diagnostics, in the order the checks were
    /// supplied to the engine.
    pub fn causes(&self) -> &[String] {
        &self.causes
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "bootstrap checks failed")?;
        for (i, cause) in self.causes.iter().enumerate() {
            if i + 1 == self.causes.len() {
                write!(f, "{cause}")?;
            } else {
                writeln!(f, "{cause}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}
