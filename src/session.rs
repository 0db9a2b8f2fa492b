use tracing::{debug, warn};

use crate::attribute::Attribute;
use crate::batch::ColumnBatch;
use crate::connector::Connector;
use crate::error::Result;
use crate::metrics::RowMetrics;
use crate::reader;

/// An initialized connector that is closed exactly once, on every exit path.
///
/// Also keeps the lifetime accepted/rejected counts of all batches read
/// through it.
pub struct ConnectorSession<C: Connector> {
    connector: C,
    metrics: RowMetrics,
    closed: bool,
}

impl<C: Connector> ConnectorSession<C> {
    /// Initialize `connector`. If initialization fails the connector is
    /// still closed before the error is returned.
    pub fn open(mut connector: C) -> Result<Self> {
        if let Err(e) = connector.init_connector() {
            warn!(source = connector.source_name(), error = %e, "failed to initialize connector");
            connector.close();
            return Err(e);
        }
        debug!(
            source = connector.source_name(),
            db = connector.db_name(),
            path = connector.path(),
            "connector initialized"
        );
        Ok(Self {
            connector,
            metrics: RowMetrics::new(),
            closed: false,
        })
    }

    /// Aligned batch of up to `num` records, or `None` once the source is exhausted
    pub fn read_rows(&mut self, num: usize) -> Result<Option<ColumnBatch>> {
        reader::read_rows(&mut self.connector, num, &mut self.metrics)
    }

    pub fn attributes(&mut self) -> Result<Vec<Attribute>> {
        self.connector.attributes()
    }

    pub fn metrics(&self) -> RowMetrics {
        self.metrics
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    pub fn db_name(&self) -> &str {
        self.connector.db_name()
    }

    pub fn path(&self) -> &str {
        self.connector.path()
    }

    pub fn source_name(&self) -> &str {
        self.connector.source_name()
    }

    /// Release the connector and return the lifetime counts
    pub fn close(mut self) -> RowMetrics {
        self.release();
        self.metrics
    }

    fn release(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.connector.close();
        debug!(
            source = self.connector.source_name(),
            accepted = self.metrics.accepted,
            rejected = self.metrics.rejected,
            "connector closed"
        );
    }
}

impl<C: Connector> Drop for ConnectorSession<C> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::MemoryConnector;
    use crate::error::ErrorKind;

    #[test]
    fn test_open_read_close() {
        let mut conn = MemoryConnector::new("t", &["a", "b"]).with_rows(vec![
            vec!["1", "2"],
            vec!["3"],
            vec!["4", "5"],
        ]);

        let metrics = {
            let mut session = ConnectorSession::open(&mut conn).unwrap();
            assert_eq!(session.source_name(), "t");
            assert!(session.connector().is_initialized());

            let first = session.read_rows(2).unwrap().unwrap();
            assert_eq!(first.num_rows(), 1);
            let second = session.read_rows(2).unwrap().unwrap();
            assert_eq!(second.column_by_name("b").unwrap(), ["5"]);
            assert!(session.read_rows(2).unwrap().is_none());
            session.close()
        };

        assert_eq!(metrics, RowMetrics { accepted: 2, rejected: 1 });
        assert_eq!(conn.init_calls(), 1);
        assert_eq!(conn.close_calls(), 1);
        assert!(!conn.is_initialized());
    }

    #[test]
    fn test_drop_closes_after_read_failure() {
        let mut conn = MemoryConnector::new("t", &["a"]).fail_read("disk gone");
        {
            let mut session = ConnectorSession::open(&mut conn).unwrap();
            let err = session.read_rows(1).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::SourceRead);
        }
        assert_eq!(conn.close_calls(), 1);
    }

    #[test]
    fn test_failed_open_still_closes() {
        let mut conn = MemoryConnector::new("t", &["a"]).fail_init("auth failed");
        let err = ConnectorSession::open(&mut conn).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Connection);
        assert_eq!(conn.close_calls(), 1);
    }

    #[test]
    fn test_schema_refetched_every_batch() {
        let mut conn = MemoryConnector::new("t", &["a"]).with_rows([["1"], ["2"], ["3"]]);
        {
            let mut session = ConnectorSession::open(&mut conn).unwrap();
            while session.read_rows(1).unwrap().is_some() {}
        }
        // three batches plus the exhausted call
        assert_eq!(conn.schema_calls(), 4);
    }
}
