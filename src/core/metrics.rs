//! Pipeline metrics for observability
//!
//! Provides counters and statistics for monitoring pipeline health:
//! how many messages passed or failed the filter stage, and how the
//! delivery attempts fanned out across success, degraded delivery and
//! failure.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for pipeline observability
///
/// Counts messages at the admission stage and attempts at the delivery
/// stage. One accepted message produces one attempt per handler, so the
/// attempt counters grow faster than the message counters on fan-out
/// pipelines.
///
/// # Example
///
/// ```
/// use logpipe::PipelineMetrics;
///
/// let metrics = PipelineMetrics::new();
///
/// // Record events
/// metrics.record_accepted();
/// metrics.record_delivered();
///
/// // Check counts
/// assert_eq!(metrics.accepted_count(), 1);
/// assert_eq!(metrics.delivered_count(), 1);
/// ```
#[derive(Debug)]
pub struct PipelineMetrics {
    /// Messages that passed every filter
    accepted_count: AtomicU64,

    /// Messages rejected by a filter (not an error condition)
    filtered_count: AtomicU64,

    /// Delivery attempts that reached their destination unmodified
    delivered_count: AtomicU64,

    /// Delivery attempts that succeeded in degraded form after a fallback
    recovered_count: AtomicU64,

    /// Delivery attempts that failed (including handler panics)
    failed_count: AtomicU64,
}

impl PipelineMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            accepted_count: AtomicU64::new(0),
            filtered_count: AtomicU64::new(0),
            delivered_count: AtomicU64::new(0),
            recovered_count: AtomicU64::new(0),
            failed_count: AtomicU64::new(0),
        }
    }

    /// Get the number of messages that passed every filter
    #[inline]
    pub fn accepted_count(&self) -> u64 {
        self.accepted_count.load(Ordering::Relaxed)
    }

    /// Get the number of messages rejected by a filter
    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered_count.load(Ordering::Relaxed)
    }

    /// Get the number of clean deliveries
    #[inline]
    pub fn delivered_count(&self) -> u64 {
        self.delivered_count.load(Ordering::Relaxed)
    }

    /// Get the number of degraded deliveries
    #[inline]
    pub fn recovered_count(&self) -> u64 {
        self.recovered_count.load(Ordering::Relaxed)
    }

    /// Get the number of failed delivery attempts
    #[inline]
    pub fn failed_count(&self) -> u64 {
        self.failed_count.load(Ordering::Relaxed)
    }

    /// Record a message accepted by the filter stage
    #[inline]
    pub fn record_accepted(&self) -> u64 {
        self.accepted_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a message rejected by the filter stage
    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a clean delivery attempt
    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a degraded delivery attempt
    #[inline]
    pub fn record_recovered(&self) -> u64 {
        self.recovered_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a failed delivery attempt
    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Total delivery attempts across all outcomes
    #[inline]
    pub fn attempt_count(&self) -> u64 {
        self.delivered_count() + self.recovered_count() + self.failed_count()
    }

    /// Get failure rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if no delivery has been attempted. Degraded deliveries
    /// count as successes here; they reached the destination.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.failed_count() as f64;
        let total = self.attempt_count() as f64;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    ///
    /// Useful for testing or periodic reset of metrics.
    pub fn reset(&self) {
        self.accepted_count.store(0, Ordering::Relaxed);
        self.filtered_count.store(0, Ordering::Relaxed);
        self.delivered_count.store(0, Ordering::Relaxed);
        self.recovered_count.store(0, Ordering::Relaxed);
        self.failed_count.store(0, Ordering::Relaxed);
    }
}

impl Default for PipelineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for PipelineMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            accepted_count: AtomicU64::new(self.accepted_count()),
            filtered_count: AtomicU64::new(self.filtered_count()),
            delivered_count: AtomicU64::new(self.delivered_count()),
            recovered_count: AtomicU64::new(self.recovered_count()),
            failed_count: AtomicU64::new(self.failed_count()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = PipelineMetrics::new();
        assert_eq!(metrics.accepted_count(), 0);
        assert_eq!(metrics.filtered_count(), 0);
        assert_eq!(metrics.delivered_count(), 0);
        assert_eq!(metrics.recovered_count(), 0);
        assert_eq!(metrics.failed_count(), 0);
    }

    #[test]
    fn test_metrics_record_filtered() {
        let metrics = PipelineMetrics::new();
        assert_eq!(metrics.record_filtered(), 0); // Returns previous value
        assert_eq!(metrics.filtered_count(), 1);
        metrics.record_filtered();
        assert_eq!(metrics.filtered_count(), 2);
    }

    #[test]
    fn test_metrics_attempt_count() {
        let metrics = PipelineMetrics::new();
        metrics.record_delivered();
        metrics.record_recovered();
        metrics.record_failed();
        assert_eq!(metrics.attempt_count(), 3);
    }

    #[test]
    fn test_metrics_failure_rate() {
        let metrics = PipelineMetrics::new();

        // No attempts - 0% failure rate
        assert_eq!(metrics.failure_rate(), 0.0);

        // 100 delivered, 0 failed - 0% failure rate
        for _ in 0..100 {
            metrics.record_delivered();
        }
        assert_eq!(metrics.failure_rate(), 0.0);

        // 100 delivered, 10 failed - ~9.09% failure rate
        for _ in 0..10 {
            metrics.record_failed();
        }
        let rate = metrics.failure_rate();
        assert!(rate > 9.0 && rate < 10.0, "Failure rate was {}", rate);

        // Degraded deliveries do not raise the failure rate
        metrics.record_recovered();
        assert!(metrics.failure_rate() < rate);
    }

    #[test]
    fn test_metrics_reset() {
        let metrics = PipelineMetrics::new();
        metrics.record_accepted();
        metrics.record_delivered();
        metrics.record_failed();

        metrics.reset();

        assert_eq!(metrics.accepted_count(), 0);
        assert_eq!(metrics.delivered_count(), 0);
        assert_eq!(metrics.failed_count(), 0);
    }

    #[test]
    fn test_metrics_clone() {
        let metrics = PipelineMetrics::new();
        metrics.record_accepted();
        metrics.record_delivered();
        metrics.record_delivered();

        let snapshot = metrics.clone();
        assert_eq!(snapshot.accepted_count(), 1);
        assert_eq!(snapshot.delivered_count(), 2);

        // Original and clone are independent
        metrics.record_failed();
        assert_eq!(metrics.failed_count(), 1);
        assert_eq!(snapshot.failed_count(), 0);
    }
}
