//! Observability stubs (metrics, tracing)

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics handle for recording counters
#[derive(Debug, Default)]
pub struct Metrics {
    files_processed: AtomicU64,
    process_failures: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_processed(&self) {
        self.files_processed.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "files_processed", "Metric incremented");
    }

    pub fn process_failed(&self) {
        self.process_failures.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "process_failures", "Metric incremented");
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            files_processed: self.files_processed.load(Ordering::Relaxed),
            process_failures: self.process_failures.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MetricsSnapshot {
    pub files_processed: u64,
    pub process_failures: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let metrics = Metrics::new();
        metrics.file_processed();
        metrics.file_processed();
        metrics.process_failed();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.files_processed, 2);
        assert_eq!(snapshot.process_failures, 1);
    }
}
