//! Router metrics for observability
//!
//! Write failures are never reported to the caller of an emit operation; these
//! counters are the only place they show up.

use std::sync::atomic::{AtomicU64, Ordering};

/// # Example
///
/// ```
/// use rust_level_router::RouterMetrics;
///
/// let metrics = RouterMetrics::new();
/// metrics.record_written();
/// metrics.record_discarded();
/// metrics.record_write_failure();
///
/// assert_eq!(metrics.lines_written(), 1);
/// assert_eq!(metrics.lines_discarded(), 1);
/// assert_eq!(metrics.write_failures(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RouterMetrics {
    /// Lines a real destination accepted without error
    lines_written: AtomicU64,

    /// Lines dropped because their channel is switched off
    lines_discarded: AtomicU64,

    /// Lines whose appender returned an error
    write_failures: AtomicU64,

    /// Fatal lines emitted
    fatal_events: AtomicU64,
}

impl RouterMetrics {
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            lines_discarded: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            fatal_events: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn lines_discarded(&self) -> u64 {
        self.lines_discarded.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn fatal_events(&self) -> u64 {
        self.fatal_events.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) {
        self.lines_written.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_discarded(&self) {
        self.lines_discarded.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_write_failure(&self) {
        self.write_failures.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_fatal(&self) {
        self.fatal_events.fetch_add(1, Ordering::Relaxed);
    }

    /// Percentage of writes to real destinations that failed.
    ///
    /// Discarded lines never reach a destination and are left out.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.write_failures() as f64;
        let total = failed + self.lines_written() as f64;
        if total == 0.0 {
            0.0
        } else {
            failed / total * 100.0
        }
    }
}
