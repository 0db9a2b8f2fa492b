use serde::{Deserialize, Serialize};
use std::fmt;

/// One column of a source's schema.
/// Position in the sequence returned by `Connector::attributes` defines column order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    name: String,
    source_name: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, source_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_name: source_name.into(),
        }
    }

    /// Column name as reported by the source
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the source (table, file) that owns this column
    pub fn source_name(&self) -> &str {
        &self.source_name
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.source_name, self.name)
    }
}
