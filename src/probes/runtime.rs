//! The managed-runtime information source: vendor, VM name, version string,
//! heap sizes, GC flags, and fork-on-fatal-error directives. This is an
//! external collaborator; the engine only ever reads it through this trait.
//! A Rust server embedding a managed runtime (a JVM-hosted plugin host, a
//! CLR bridge, anything with its own GC and heap configuration) supplies
//! the real implementation; the core crate never assumes which runtime it
//! is.

/// Nullary accessors for the embedded/managed runtime's configuration.
/// String-valued methods return an empty string for "not reported", never
/// `None`, except for the fork-on-fatal-error directives, which
/// deliberately distinguish "not set" (`None`) from "set to the empty
/// string". The engine treats both identically as non-forking.
pub trait RuntimeProbe {
    /// Configured initial heap size in bytes. `0` means "not configured".
    fn initial_heap_size(&self) -> i64;
    /// Configured maximum heap size in bytes. `0` means "not configured".
    fn max_heap_size(&self) -> i64;
    /// The runtime's self-reported VM name (e.g. `"Java HotSpot(TM) 64-Bit Server VM"`).
    fn vm_name(&self) -> String;
    /// `"true"` or `"false"`; any other value is treated as `"false"`.
    fn use_serial_gc(&self) -> String;
    /// The runtime vendor string (e.g. `"Oracle Corporation"`).
    fn vendor(&self) -> String;
    /// `true` iff G1GC is the active collector.
    fn is_g1gc_enabled(&self) -> bool;
    /// The runtime's version string, in whatever format the vendor reports.
    fn version(&self) -> String;
    /// `true` iff the runtime is running Java 8 (the only version the
    /// G1GC gate applies to).
    fn is_java8(&self) -> bool;
    /// The configured `OnError` directive, if any.
    fn on_error_directive(&self) -> Option<String>;
    /// The configured `OnOutOfMemoryError` directive, if any.
    fn on_out_of_memory_error_directive(&self) -> Option<String>;
}

/// A runtime probe with canned values, used by tests, by embedding
/// harnesses that don't manage a JVM-like runtime at all (all defaults
/// report "not configured" / non-violating), and as the default wired into
/// the demo binary when no managed runtime is present.
#[derive(Debug, Clone, Default)]
pub struct FixedRuntimeProbe {
    pub initial_heap_size: i64,
    pub max_heap_size: i64,
    pub vm_name: String,
    pub use_serial_gc: String,
    pub vendor: String,
    pub is_g1gc_enabled: bool,
    pub version: String,
    pub is_java8: bool,
    pub on_error_directive: Option<String>,
    pub on_out_of_memory_error_directive: Option<String>,
}

impl RuntimeProbe for FixedRuntimeProbe {
    fn initial_heap_size(&self) -> i64 {
        self.initial_heap_size
    }
    fn max_heap_size(&self) -> i64 {
        self.max_heap_size
    }
    fn vm_name(&self) -> String {
        self.vm_name.clone()
    }
    fn use_serial_gc(&self) -> String {
        self.use_serial_gc.clone()
    }
    fn vendor(&self) -> String {
        self.vendor.clone()
    }
    fn is_g1gc_enabled(&self) -> bool {
        self.is_g1gc_enabled
    }
    fn version(&self) -> String {
        self.version.clone()
    }
    fn is_java8(&self) -> bool {
        self.is_java8
    }
    fn on_error_directive(&self) -> Option<String> {
        self.on_error_directive.clone()
    }
    fn on_out_of_memory_error_directive(&self) -> Option<String> {
        self.on_out_of_memory_error_directive.clone()
    }
}
