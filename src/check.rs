//! The unit of validation. Deliberately flat: a check is a pure function of
//! the probes it closes over, not a subclass hierarchy.

/// The uniform capability every bootstrap check exposes.
pub trait Check {
    /// True iff the check is failing. Must not mutate observable state.
    fn violated(&self) -> bool;

    /// Non-empty diagnostic string describing the failure. Only meaningful
    /// when `violated()` is true.
    fn diagnostic(&self) -> String;

    /// When true, the check fires regardless of `EnforcementMode`.
    fn always_enforced(&self) -> bool {
        false
    }

    /// Stable identifier for diagnostics/tests. Defaults to an empty string;
    /// the catalogue checks override it.
    fn id(&self) -> &'static str {
        ""
    }
}

impl<C: Check + ?Sized> Check for Box<C> {
    fn violated(&self) -> bool {
        (**self).violated()
    }
    fn diagnostic(&self) -> String {
        (**self).diagnostic()
    }
    fn always_enforced(&self) -> bool {
        (**self).always_enforced()
    }
    fn id(&self) -> &'static str {
        (**self).id()
    }
}

/// A check built from plain closures, used directly by tests and by the
/// simplest catalogue entries that need no state beyond their probes.
pub struct ClosureCheck<V, D>
where
    V: Fn() -> bool,
    D: Fn() -> String,
{
    violated: V,
    diagnostic: D,
    always_enforced: bool,
    id: &'static str,
}

impl<V, D> ClosureCheck<V, D>
where
    V: Fn() -> bool,
    D: Fn() -> String,
{
    pub fn new(id: &'static str, violated: V, diagnostic: D) -> Self {
        Self {
            violated,
            diagnostic,
            always_enforced: false,
            id,
        }
    }

    pub fn always_enforced(mut self) -> Self {
        self.always_enforced = true;
        self
    }
}

impl<V, D> Check for ClosureCheck<V, D>
where
    V: Fn() -> bool,
    D: Fn() -> String,
{
    fn violated(&self) -> bool {
        (self.violated)()
    }

    fn diagnostic(&self) -> String {
        (self.diagnostic)()
    }

    fn always_enforced(&self) -> bool {
        self.always_enforced
    }

    fn id(&self) -> &'static str {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_check_is_pure() {
        let check = ClosureCheck::new("always-true", || true, || "boom".to_string());
        assert!(check.violated());
        assert!(check.violated()); // idempotent
        assert_eq!(check.diagnostic(), "boom");
        assert!(!check.always_enforced());
    }

    #[test]
    fn always_enforced_flag_sticks() {
        let check = ClosureCheck::new("x", || true, || "x".into()).always_enforced();
        assert!(check.always_enforced());
    }
}
