//! Search metrics
//!
//! - Counters only, monotonic
//! - Relaxed atomics; passive, never consulted by the engine

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Per-engine counters
#[derive(Debug, Default)]
pub struct SearchMetrics {
    searches_executed: AtomicU64,
    searches_failed: AtomicU64,
    items_matched: AtomicU64,
    /// Selected values that resolved to an empty bucket
    lookup_misses: AtomicU64,
}

impl SearchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_search(&self, matched: usize) {
        self.searches_executed.fetch_add(1, Ordering::Relaxed);
        self.items_matched.fetch_add(matched as u64, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.searches_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_lookup_misses(&self, misses: usize) {
        if misses > 0 {
            self.lookup_misses.fetch_add(misses as u64, Ordering::Relaxed);
        }
    }

    pub fn searches_executed(&self) -> u64 {
        self.searches_executed.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            searches_executed: self.searches_executed.load(Ordering::Relaxed),
            searches_failed: self.searches_failed.load(Ordering::Relaxed),
            items_matched: self.items_matched.load(Ordering::Relaxed),
            lookup_misses: self.lookup_misses.load(Ordering::Relaxed),
        }
    }

    /// Current values as a JSON object
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.snapshot()).unwrap_or_default()
    }
}

/// A point-in-time copy of the counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub searches_executed: u64,
    pub searches_failed: u64,
    pub items_matched: u64,
    pub lookup_misses: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = SearchMetrics::new();
        assert_eq!(
            metrics.snapshot(),
            MetricsSnapshot {
                searches_executed: 0,
                searches_failed: 0,
                items_matched: 0,
                lookup_misses: 0,
            }
        );
    }

    #[test]
    fn test_record_search_accumulates() {
        let metrics = SearchMetrics::new();
        metrics.record_search(4);
        metrics.record_search(2);
        metrics.add_lookup_misses(0);
        metrics.add_lookup_misses(3);
        metrics.record_failure();

        let snap = metrics.snapshot();
        assert_eq!(snap.searches_executed, 2);
        assert_eq!(snap.items_matched, 6);
        assert_eq!(snap.lookup_misses, 3);
        assert_eq!(snap.searches_failed, 1);
    }

    #[test]
    fn test_to_json() {
        let metrics = SearchMetrics::new();
        metrics.record_search(5);

        let parsed: serde_json::Value = serde_json::from_str(&metrics.to_json()).unwrap();
        assert_eq!(parsed["searches_executed"], 1);
        assert_eq!(parsed["items_matched"], 5);
    }
}
