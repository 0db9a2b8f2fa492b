use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;

use crate::attribute::Attribute;

/// Schema-aligned result of one batch read.
///
/// An ordered map from attribute to column values kept as two parallel
/// vectors. Columns are keyed by position and stay in schema order, so a
/// schema that repeats an attribute still gets one column per entry. Every
/// column holds exactly one value per accepted record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnBatch {
    attributes: Vec<Attribute>,
    columns: Vec<Vec<String>>,
}

impl ColumnBatch {
    /// Empty columns for `attributes`, in the given order
    pub fn new(attributes: Vec<Attribute>) -> Self {
        let columns = vec![Vec::new(); attributes.len()];
        Self {
            attributes,
            columns,
        }
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.attributes.len()
    }

    /// Number of accepted rows
    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    /// Values of the first column keyed by `attribute`.
    /// Use `column_at` to reach a repeated attribute's later columns.
    pub fn column(&self, attribute: &Attribute) -> Option<&[String]> {
        let idx = self.attributes.iter().position(|a| a == attribute)?;
        Some(&self.columns[idx])
    }

    /// Values of the first column named `name`, whatever source owns it.
    /// Prefer `column` when names may repeat across sources.
    pub fn column_by_name(&self, name: &str) -> Option<&[String]> {
        let idx = self.attributes.iter().position(|a| a.name() == name)?;
        Some(&self.columns[idx])
    }

    pub fn column_at(&self, idx: usize) -> Option<&[String]> {
        self.columns.get(idx).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Attribute, &[String])> {
        self.attributes
            .iter()
            .zip(self.columns.iter().map(Vec::as_slice))
    }

    /// Append one row positionally.
    /// The row is rejected untouched when its arity differs from the column count.
    pub(crate) fn push_row(&mut self, values: Vec<String>) -> Result<(), Vec<String>> {
        if values.len() != self.columns.len() {
            return Err(values);
        }
        for (column, value) in self.columns.iter_mut().zip(values) {
            column.push(value);
        }
        Ok(())
    }

    /// Convert to an Arrow batch of nullable Utf8 columns named after the attributes
    pub fn to_record_batch(&self) -> anyhow::Result<RecordBatch> {
        let fields: Vec<Field> = self
            .attributes
            .iter()
            .map(|a| Field::new(a.name(), DataType::Utf8, true))
            .collect();
        let schema = Arc::new(Schema::new(fields));

        if self.columns.is_empty() {
            return Ok(RecordBatch::new_empty(schema));
        }

        let arrays: Vec<ArrayRef> = self
            .columns
            .iter()
            .map(|values| {
                Arc::new(StringArray::from_iter_values(values.iter())) as ArrayRef
            })
            .collect();

        RecordBatch::try_new(schema, arrays)
            .map_err(|e| anyhow::anyhow!("Failed to create RecordBatch: {}", e))
    }
}

impl IntoIterator for ColumnBatch {
    type Item = (Attribute, Vec<String>);
    type IntoIter = std::iter::Zip<std::vec::IntoIter<Attribute>, std::vec::IntoIter<Vec<String>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter().zip(self.columns)
    }
}
