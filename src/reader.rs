use tracing::{debug, trace};

use crate::batch::ColumnBatch;
use crate::connector::Connector;
use crate::error::{ConnectorError, Result};
use crate::metrics::{MetricsReporter, RowMetrics};

/// Read up to `num` records from `connector` and align them to its schema.
///
/// Returns `Ok(None)` when the connector reports that no data was read.
/// Otherwise every column of the returned batch holds one value per
/// well-formed record, in read order. Records whose arity differs from
/// the schema are dropped whole and counted as rejected; the batch's
/// counts go to `reporter`.
///
/// The schema is looked up again on every call. `num` must be positive:
/// a zero-sized read could never reach the end of the source.
pub fn read_rows<C, R>(connector: &mut C, num: usize, reporter: &mut R) -> Result<Option<ColumnBatch>>
where
    C: Connector + ?Sized,
    R: MetricsReporter + ?Sized,
{
    if num == 0 {
        return Err(ConnectorError::source_read(format!(
            "batch size for {} must be positive",
            connector.source_name()
        )));
    }

    let attributes = connector.attributes()?;
    let mut batch = ColumnBatch::new(attributes);

    let mut records = Vec::new();
    if !connector.read_rows_into(num, &mut records)? {
        trace!(source = connector.source_name(), "no more data");
        return Ok(None);
    }

    let mut counts = RowMetrics::new();
    for record in records {
        match batch.push_row(record.into_tuples()) {
            Ok(()) => counts.accepted += 1,
            Err(values) => {
                debug!(
                    source = connector.source_name(),
                    arity = values.len(),
                    expected = batch.width(),
                    "dropping malformed record"
                );
                counts.rejected += 1;
            }
        }
    }

    trace!(
        source = connector.source_name(),
        accepted = counts.accepted,
        rejected = counts.rejected,
        "batch aligned"
    );
    reporter.report(&counts);
    Ok(Some(batch))
}
