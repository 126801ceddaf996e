use crate::check::Check;
use crate::error::ConfigError;
use crate::probes::ProcessProbe;
use std::rc::Rc;

/// File-descriptor floor. `limit` is the host-flavored floor (10240 on
/// macOS, 65536 everywhere else; see [`crate::probes::HostDescriptor::fd_floor`]);
/// the constructor rejects a non-positive limit synchronously.
pub struct FdLimitCheck {
    process: Rc<dyn ProcessProbe>,
    limit: i64,
}

impl FdLimitCheck {
    pub fn new(process: Rc<dyn ProcessProbe>, limit: i64) -> Result<Self, ConfigError> {
        if limit <= 0 {
            return Err(ConfigError::limit_must_be_positive(limit));
        }
        Ok(Self { process, limit })
    }
}

impl Check for FdLimitCheck {
    fn violated(&self) -> bool {
        let value = self.process.max_fd_count();
        value >= 0 && value < self.limit
    }

    fn diagnostic(&self) -> String {
        format!(
            "max file descriptors [{}] for elasticsearch process is too low, increase to at least [{}]",
            self.process.max_fd_count(),
            self.limit
        )
    }

    fn id(&self) -> &'static str {
        "max-file-descriptors"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probes::process::FixedProcessProbe;

    fn check(limit: i64, fd_count: i64) -> Result<FdLimitCheck, ConfigError> {
        FdLimitCheck::new(
            Rc::new(FixedProcessProbe {
                max_fd_count: fd_count,
                ..Default::default()
            }),
            limit,
        )
    }

    #[test]
    fn osx_floor_violation() {
        let c = check(10_240, 10_239).unwrap();
        assert!(c.violated());
        assert!(c.diagnostic().contains("max file descriptors"));
    }

    #[test]
    fn osx_floor_exact_is_ok() {
        assert!(!check(10_240, 10_240).unwrap().violated());
    }

    #[test]
    fn unknown_sentinel_is_ok() {
        assert!(!check(10_240, -1).unwrap().violated());
    }

    #[test]
    fn negative_limit_rejected_at_construction() {
        let err = check(-5, 100).unwrap_err();
        assert!(err.to_string().contains("limit must be positive but was [-5]"));
    }

    #[test]
    fn zero_limit_rejected_at_construction() {
        assert!(check(0, 100).is_err());
    }
}
