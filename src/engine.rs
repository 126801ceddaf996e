//! The engine: runs the ordered check list under a resolved mode, aggregates
//! failures, emits one combined error or returns success, and emits at most
//! one informational log line. Single-threaded and synchronous; no check may
//! suspend, block on I/O, or spawn helpers.

use crate::check::Check;
use crate::error::ValidationFailure;
use crate::logger::Logger;
use crate::mode::{self, EnforcementMode};
use crate::transport::BoundTransport;

const PRODUCTION_LOG_LINE: &str =
    "bound or publishing to a non-loopback or non-link-local address, enforcing bootstrap checks";

/// Runs `checks` under `mode`. A check is active iff `mode == Production`
/// or `check.always_enforced()`. No address-based logging happens on this
/// entry point; it's the direct form used by tests and embedding harnesses
/// that already know their mode.
pub fn run(
    mode: EnforcementMode,
    checks: &[Box<dyn Check>],
    label: &str,
) -> Result<(), ValidationFailure> {
    let mut diagnostics = Vec::new();

    for check in checks {
        let active = mode.is_production() || check.always_enforced();
        if !active {
            continue;
        }
        if check.violated() {
            diagnostics.push(check.diagnostic());
        }
    }

    if diagnostics.is_empty() {
        Ok(())
    } else {
        tracing::debug!(label, count = diagnostics.len(), "bootstrap checks failed");
        Err(ValidationFailure::from_diagnostics(diagnostics))
    }
}

/// Resolves mode from `transport`, logs exactly one informational line iff
/// that resolves to `Production`, then delegates to [`run`].
pub fn run_for_transport(
    transport: &BoundTransport,
    checks: &[Box<dyn Check>],
    label: &str,
    logger: &dyn Logger,
) -> Result<(), ValidationFailure> {
    let resolved = mode::resolve(transport);
    if resolved.is_production() {
        logger.info(PRODUCTION_LOG_LINE);
    }
    run(resolved, checks, label)
}
