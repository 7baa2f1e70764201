//! Process-local counters for mailshim.
//!
//! The shim lives for one invocation, so this is deliberately small: plain
//! and labeled counters over a global registry. Until [`init`] is called the
//! registry is absent and every counter handed out is a detached no-op, which
//! is the default for production shim runs — telemetry is strictly opt-in.
//!
//! ```rust
//! mailshim_metrics::init();
//!
//! let appended = mailshim_metrics::counter(mailshim_metrics::names::ENTRIES_APPENDED);
//! appended.inc();
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

/// Global metrics registry.
static REGISTRY: RwLock<Option<MetricsRegistry>> = RwLock::new(None);

/// Install the global registry. Counters created before this call stay no-ops.
pub fn init() {
    let mut guard = REGISTRY.write().unwrap();
    *guard = Some(MetricsRegistry::new());
}

/// Get or create a counter, detached if the registry is uninitialized.
pub fn counter(name: &str) -> Counter {
    let guard = REGISTRY.read().unwrap();
    match &*guard {
        Some(registry) => registry.counter(name),
        None => Counter::detached(),
    }
}

/// Get or create a counter with a single label, detached if uninitialized.
pub fn labeled_counter(name: &str, label: &str, value: &str) -> Counter {
    let guard = REGISTRY.read().unwrap();
    match &*guard {
        Some(registry) => registry.labeled_counter(name, label, value),
        None => Counter::detached(),
    }
}

/// Registry of named counters.
///
/// Labeled counters are keyed by `name{label="value"}` so every lookup for
/// the same series shares one underlying cell.
pub struct MetricsRegistry {
    counters: Mutex<HashMap<String, Counter>>,
}

impl MetricsRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            counters: Mutex::new(HashMap::new()),
        }
    }

    /// Get or create a counter by name.
    pub fn counter(&self, name: &str) -> Counter {
        let mut counters = self.counters.lock().unwrap();
        counters.entry(name.to_string()).or_default().clone()
    }

    /// Get or create a counter for one labeled series.
    pub fn labeled_counter(&self, name: &str, label: &str, value: &str) -> Counter {
        self.counter(&format!("{name}{{{label}=\"{value}\"}}"))
    }
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A monotonically increasing counter.
#[derive(Clone, Default)]
pub struct Counter {
    value: Arc<AtomicU64>,
}

impl Counter {
    /// Create a counter not tracked by any registry.
    pub fn detached() -> Self {
        Self::default()
    }

    /// Increment by 1.
    pub fn inc(&self) {
        self.value.fetch_add(1, Ordering::Relaxed);
    }

    /// Current value.
    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}

/// Counter names emitted by the shim pipeline.
pub mod names {
    /// Successful appends, labeled by uid.
    pub const ENTRIES_APPENDED: &str = "mailshim_entries_appended_total";
    /// Pipeline failures, labeled by failure tag.
    pub const EMIT_FAILURES: &str = "mailshim_emit_failures_total";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_increments() {
        let counter = Counter::detached();
        assert_eq!(counter.get(), 0);
        counter.inc();
        counter.inc();
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn test_registry_shares_series() {
        let registry = MetricsRegistry::new();
        registry.counter("appends").inc();
        registry.counter("appends").inc();
        assert_eq!(registry.counter("appends").get(), 2);
    }

    #[test]
    fn test_labeled_series_are_distinct() {
        let registry = MetricsRegistry::new();
        registry.labeled_counter("failures", "reason", "stdin-failed").inc();
        registry.labeled_counter("failures", "reason", "open-log-file").inc();
        registry.labeled_counter("failures", "reason", "open-log-file").inc();

        assert_eq!(
            registry.labeled_counter("failures", "reason", "stdin-failed").get(),
            1
        );
        assert_eq!(
            registry.labeled_counter("failures", "reason", "open-log-file").get(),
            2
        );
    }

    #[test]
    fn test_uninitialized_registry_is_noop() {
        // Never calls init(); counters must still be usable.
        let counter = counter("orphan");
        counter.inc();
        assert_eq!(counter.get(), 1);
        // a second lookup is detached from the first
        assert_eq!(super::counter("orphan").get(), 0);
    }
}
