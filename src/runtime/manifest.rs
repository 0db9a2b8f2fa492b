use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::metrics::RowMetrics;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanManifest {
    pub scan_name: String,
    pub sources: Vec<ScanReport>,
    pub failures: Vec<ScanFailure>,
}

/// Outcome of scanning one source to exhaustion (or to the batch cap)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanReport {
    pub source_name: String,
    pub db_name: String,
    pub path: String,
    pub attributes: Vec<String>,
    pub batches: usize,
    pub rows: RowMetrics,
    pub exhausted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanFailure {
    pub source_name: String,
    pub error: String,
}

impl ScanManifest {
    pub fn new(scan_name: String) -> Self {
        Self {
            scan_name,
            sources: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn add_report(&mut self, report: ScanReport) {
        self.sources.push(report);
    }

    pub fn add_failure(&mut self, failure: ScanFailure) {
        self.failures.push(failure);
    }

    /// Row counts summed over every successful source
    pub fn total_rows(&self) -> RowMetrics {
        let mut total = RowMetrics::new();
        for report in &self.sources {
            total.merge(&report.rows);
        }
        total
    }

    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }
}
