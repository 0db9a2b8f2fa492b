use serde::{Deserialize, Serialize};

/// Accepted and rejected record counts.
///
/// Used both as the per-batch tally the aligned reader reports and as a
/// lifetime accumulator. Counts only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowMetrics {
    pub accepted: u64,
    pub rejected: u64,
}

impl RowMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records seen, well-formed or not
    pub fn total(&self) -> u64 {
        self.accepted + self.rejected
    }

    pub fn merge(&mut self, other: &RowMetrics) {
        self.accepted += other.accepted;
        self.rejected += other.rejected;
    }
}

/// Receives the row counts of every batch that returned data.
pub trait MetricsReporter {
    fn report(&mut self, batch: &RowMetrics);
}

impl MetricsReporter for RowMetrics {
    fn report(&mut self, batch: &RowMetrics) {
        self.merge(batch);
    }
}

/// Discards counts
impl MetricsReporter for () {
    fn report(&mut self, _batch: &RowMetrics) {}
}

impl<R: MetricsReporter + ?Sized> MetricsReporter for &mut R {
    fn report(&mut self, batch: &RowMetrics) {
        (**self).report(batch)
    }
}
