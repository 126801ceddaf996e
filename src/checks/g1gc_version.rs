use crate::check::Check;
use crate::probes::RuntimeProbe;
use std::rc::Rc;

/// G1GC version gate. Violated iff the vendor starts with `"Oracle"`, G1GC
/// is enabled, the runtime is Java 8, and the version parses to
/// `25.<u>-b<b>` with `u < 40`.
///
/// Version parsing accepts exactly the shape `25.<digits>-b<digits>`; any
/// other shape is non-violation. No `regex` dependency is pulled in for
/// this; the grammar is simple enough for `str::split`/`strip_prefix`,
/// matching the rest of the pack's avoidance of `regex` entirely.
pub struct G1GcVersionCheck {
    runtime: Rc<dyn RuntimeProbe>,
}

impl G1GcVersionCheck {
    pub fn new(runtime: Rc<dyn RuntimeProbe>) -> Self {
        Self { runtime }
    }
}

/// Parses `25.<u>-b<b>` and returns `u` (the update number), or `None` if
/// the version string does not match that exact shape.
fn parse_update_number(version: &str) -> Option<u32> {
    let rest = version.strip_prefix("25.")?;
    let (update_str, build_str) = rest.split_once("-b")?;
    if update_str.is_empty() || !update_str.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if build_str.is_empty() || !build_str.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    update_str.parse::<u32>().ok()
}

impl Check for G1GcVersionCheck {
    fn violated(&self) -> bool {
        if !self.runtime.vendor().starts_with("Oracle") {
            return false;
        }
        if !self.runtime.is_g1gc_enabled() || !self.runtime.is_java8() {
            return false;
        }
        match parse_update_number(&self.runtime.version()) {
            Some(update) => update < 40,
            None => false,
        }
    }

    fn diagnostic(&self) -> String {
        format!(
            "JVM version [{}] can cause data corruption when used with G1GC; upgrade to at least Java 8u40",
            self.runtime.version()
        )
    }

    fn id(&self) -> &'static str {
        "g1gc-version"
    }
}
