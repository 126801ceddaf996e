//! Enforcement-mode resolution: decides whether the process is reachable
//! beyond the local host.

use crate::transport::BoundTransport;

/// Derived, never stored: `Production` iff any bound address is non-local
/// or the publish address is non-local; otherwise `Development`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnforcementMode {
    Development,
    Production,
}

impl EnforcementMode {
    pub fn is_production(self) -> bool {
        matches!(self, EnforcementMode::Production)
    }
}

/// Standalone form of the resolver, for callers that only need the bool.
pub fn enforce_limits(transport: &BoundTransport) -> bool {
    transport.is_production()
}

/// Resolve the mode a `BoundTransport` snapshot implies.
pub fn resolve(transport: &BoundTransport) -> EnforcementMode {
    if enforce_limits(transport) {
        EnforcementMode::Production
    } else {
        EnforcementMode::Development
    }
}
