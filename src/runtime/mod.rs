use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::batch::ColumnBatch;
use crate::config::ScanConfig;
use crate::connector::Connector;
use crate::session::ConnectorSession;

mod manifest;
pub use manifest::{ScanFailure, ScanManifest, ScanReport};

/// Drain one source batch by batch, handing each aligned batch to `consume`.
///
/// Stops at the end of the source or after `max_batches`. The connector is
/// closed on every path, including when reading or consuming fails.
pub fn scan_source<C, F>(connector: C, config: &ScanConfig, mut consume: F) -> Result<ScanReport>
where
    C: Connector,
    F: FnMut(&ColumnBatch) -> Result<()>,
{
    config.validate()?;

    let source_name = connector.source_name().to_string();
    let mut session = ConnectorSession::open(connector)
        .with_context(|| format!("Failed to open source: {}", source_name))?;

    let mut report = ScanReport {
        source_name: source_name.clone(),
        db_name: session.db_name().to_string(),
        path: session.path().to_string(),
        attributes: Vec::new(),
        batches: 0,
        rows: Default::default(),
        exhausted: false,
    };

    loop {
        if config.max_batches.is_some_and(|max| report.batches >= max) {
            break;
        }

        let batch = session.read_rows(config.batch_size).with_context(|| {
            format!("Failed to read batch {} from {}", report.batches, source_name)
        })?;
        let Some(batch) = batch else {
            report.exhausted = true;
            break;
        };

        report.attributes = batch
            .attributes()
            .iter()
            .map(|a| a.name().to_string())
            .collect();
        consume(&batch).with_context(|| {
            format!("Failed to consume batch {} from {}", report.batches, source_name)
        })?;
        report.batches += 1;
    }

    report.rows = session.close();
    info!(
        source = %source_name,
        batches = report.batches,
        accepted = report.rows.accepted,
        rejected = report.rows.rejected,
        exhausted = report.exhausted,
        "source scanned"
    );
    if report.rows.rejected > 0 {
        warn!(
            source = %source_name,
            rejected = report.rows.rejected,
            "malformed records were dropped"
        );
    }

    Ok(report)
}

/// Scan independent sources in parallel.
///
/// A failing source is recorded in the manifest and never stops the
/// others. The manifest is written to `manifest_path` when configured.
pub fn scan_sources<C, F>(connectors: Vec<C>, config: &ScanConfig, consume: F) -> Result<ScanManifest>
where
    C: Connector + Send,
    F: Fn(&str, &ColumnBatch) -> Result<()> + Sync,
{
    config.validate()?;
    info!(scan = %config.name, sources = connectors.len(), "starting scan");

    let results: Vec<(String, Result<ScanReport>)> = connectors
        .into_par_iter()
        .map(|connector| {
            let name = connector.source_name().to_string();
            let result = scan_source(connector, config, |batch| consume(&name, batch));
            (name, result)
        })
        .collect();

    let mut manifest = ScanManifest::new(config.name.clone());
    for (source_name, result) in results {
        match result {
            Ok(report) => manifest.add_report(report),
            Err(e) => {
                let error = format!("{:#}", e);
                warn!(source = %source_name, error = %error, "source scan failed");
                manifest.add_failure(ScanFailure { source_name, error });
            }
        }
    }

    if let Some(path) = &config.manifest_path {
        manifest
            .write_to_file(path)
            .with_context(|| format!("Failed to write manifest: {:?}", path))?;
        info!(path = %path.display(), "manifest written");
    }

    Ok(manifest)
}
