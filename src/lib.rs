//! Uniform connector contract for tabular sources and the aligned batch
//! reader built on top of it.
//!
//! A concrete adapter implements [`Connector`]; callers read schema-aligned
//! [`ColumnBatch`]es through [`read_rows`] or a [`ConnectorSession`].

pub mod attribute;
pub mod batch;
pub mod config;
pub mod connector;
pub mod error;
pub mod metrics;
pub mod reader;
pub mod record;
pub mod runtime;
pub mod session;

pub use attribute::Attribute;
pub use batch::ColumnBatch;
pub use config::ScanConfig;
pub use connector::{Connector, MemoryConnector};
pub use error::{ConnectorError, ErrorKind, Result};
pub use metrics::{MetricsReporter, RowMetrics};
pub use reader::read_rows;
pub use record::Record;
pub use runtime::{scan_source, scan_sources, ScanManifest, ScanReport};
pub use session::ConnectorSession;
