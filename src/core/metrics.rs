//! Logger metrics for observability
//!
//! Provides counters for monitoring a logger node: events its sink accepted,
//! calls suppressed by its level gate, and enricher faults.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for a single logger node
///
/// # Example
///
/// ```
/// use rust_structured_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_dispatched();
/// metrics.record_suppressed();
///
/// assert_eq!(metrics.dispatched_count(), 1);
/// assert_eq!(metrics.suppressed_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Events the downstream sink accepted
    dispatched: AtomicU64,

    /// Calls rejected by the level gate or carrying an empty template
    suppressed: AtomicU64,

    /// Enricher invocations that returned an error or panicked
    enricher_faults: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            dispatched: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            enricher_faults: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn dispatched_count(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed_count(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn enricher_faults(&self) -> u64 {
        self.enricher_faults.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dispatched(&self) -> u64 {
        self.dispatched.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_enricher_fault(&self) -> u64 {
        self.enricher_faults.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of calls suppressed, as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if no calls have been seen.
    pub fn suppression_rate(&self) -> f64 {
        let suppressed = self.suppressed_count() as f64;
        let total = self.dispatched_count() as f64 + suppressed;
        if total == 0.0 {
            0.0
        } else {
            (suppressed / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.dispatched.store(0, Ordering::Relaxed);
        self.suppressed.store(0, Ordering::Relaxed);
        self.enricher_faults.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            dispatched: AtomicU64::new(self.dispatched_count()),
            suppressed: AtomicU64::new(self.suppressed_count()),
            enricher_faults: AtomicU64::new(self.enricher_faults()),
        }
    }
}
