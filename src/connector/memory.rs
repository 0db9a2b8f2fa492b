use std::collections::VecDeque;

use super::Connector;
use crate::attribute::Attribute;
use crate::error::{ConnectorError, Result};
use crate::record::Record;

/// A connector over rows held in memory.
///
/// Serves as the reference adapter for the `Connector` contract and as a
/// test double: each failure point can be armed with `fail_init`,
/// `fail_schema` and `fail_read`.
#[derive(Debug, Default)]
pub struct MemoryConnector {
    db_name: String,
    path: String,
    source_name: String,
    attributes: Vec<Attribute>,
    rows: VecDeque<Record>,
    init_error: Option<String>,
    schema_error: Option<String>,
    read_error: Option<String>,
    initialized: bool,
    init_calls: usize,
    close_calls: usize,
    schema_calls: usize,
}

impl MemoryConnector {
    /// Create a connector whose attributes are `columns`, owned by `source_name`
    pub fn new<S: AsRef<str>>(source_name: &str, columns: &[S]) -> Self {
        let attributes = columns
            .iter()
            .map(|c| Attribute::new(c.as_ref(), source_name))
            .collect();
        Self {
            db_name: "memory".to_string(),
            path: format!("memory://{}", source_name),
            source_name: source_name.to_string(),
            attributes,
            ..Default::default()
        }
    }

    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_db_name(mut self, db_name: impl Into<String>) -> Self {
        self.db_name = db_name.into();
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Queue a row; rows are served in insertion order
    pub fn push_row<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push_back(values.into_iter().collect());
    }

    pub fn with_rows<R, I, S>(mut self, rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            self.push_row(row);
        }
        self
    }

    pub fn fail_init(mut self, msg: impl Into<String>) -> Self {
        self.init_error = Some(msg.into());
        self
    }

    pub fn fail_schema(mut self, msg: impl Into<String>) -> Self {
        self.schema_error = Some(msg.into());
        self
    }

    pub fn fail_read(mut self, msg: impl Into<String>) -> Self {
        self.read_error = Some(msg.into());
        self
    }

    /// Rows not yet handed out
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn init_calls(&self) -> usize {
        self.init_calls
    }

    pub fn close_calls(&self) -> usize {
        self.close_calls
    }

    /// How many times the schema was looked up
    pub fn schema_calls(&self) -> usize {
        self.schema_calls
    }
}

impl Connector for MemoryConnector {
    fn db_name(&self) -> &str {
        &self.db_name
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn source_name(&self) -> &str {
        &self.source_name
    }

    fn init_connector(&mut self) -> Result<()> {
        self.init_calls += 1;
        if let Some(msg) = &self.init_error {
            return Err(ConnectorError::connection(msg.clone()));
        }
        self.initialized = true;
        Ok(())
    }

    fn destroy_connector(&mut self) {
        self.initialized = false;
    }

    fn attributes(&mut self) -> Result<Vec<Attribute>> {
        self.schema_calls += 1;
        if let Some(msg) = &self.schema_error {
            return Err(ConnectorError::schema(msg.clone()));
        }
        Ok(self.attributes.clone())
    }

    fn read_rows_into(&mut self, num: usize, out: &mut Vec<Record>) -> Result<bool> {
        if let Some(msg) = &self.read_error {
            return Err(ConnectorError::source_read(msg.clone()));
        }
        if !self.initialized {
            return Err(ConnectorError::source_read(format!(
                "connector for {} is not initialized",
                self.source_name
            )));
        }
        if self.rows.is_empty() {
            return Ok(false);
        }
        let take = num.min(self.rows.len());
        out.extend(self.rows.drain(..take));
        Ok(true)
    }

    fn close(&mut self) {
        self.close_calls += 1;
        self.destroy_connector();
    }
}
