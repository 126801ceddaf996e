//! bootcheck: a pre-start environment validation engine for long-running
//! server processes.
//!
//! Before a server opens its listening sockets to non-local peers, the
//! engine runs an ordered list of [`Check`]s against the host OS, the
//! process's resource limits, and a managed runtime the server embeds.
//! Any violation aborts startup with a single [`ValidationFailure`]
//! aggregating every violated check's diagnostic; every non-violating
//! check is silently accepted.
//!
//! The engine itself is a pure guard: it does not repair violations,
//! retry, perform network I/O, or mutate OS state. It is invoked exactly
//! once during startup, synchronously, on the calling thread.

pub mod check;
pub mod checks;
pub mod engine;
pub mod error;
pub mod logger;
pub mod mode;
pub mod probes;
pub mod transport;

pub use check::{Check, ClosureCheck};
pub use error::{ConfigError, ValidationFailure};
pub use logger::{Logger, TracingLogger};
pub use mode::{enforce_limits, EnforcementMode};
pub use transport::BoundTransport;
