use thiserror::Error;

/// Failures a connector can surface to its caller.
///
/// Row arity mismatches are not represented here: the aligned reader drops
/// those rows and counts them instead of failing the batch.
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("connection error: {0}")]
    Connection(String),
    #[error("schema error: {0}")]
    Schema(String),
    #[error("source read error: {0}")]
    SourceRead(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Connection,
    Schema,
    SourceRead,
}

impl ConnectorError {
    pub fn connection(msg: impl Into<String>) -> Self {
        ConnectorError::Connection(msg.into())
    }

    pub fn schema(msg: impl Into<String>) -> Self {
        ConnectorError::Schema(msg.into())
    }

    pub fn source_read(msg: impl Into<String>) -> Self {
        ConnectorError::SourceRead(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ConnectorError::Connection(_) => ErrorKind::Connection,
            ConnectorError::Schema(_) => ErrorKind::Schema,
            ConnectorError::SourceRead(_) => ErrorKind::SourceRead,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConnectorError>;
