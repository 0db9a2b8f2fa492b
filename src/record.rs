/// One raw row as emitted by a connector's low-level reader.
/// Values carry no column identity; they are matched to attributes by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    tuples: Vec<String>,
}

impl Record {
    pub fn new(tuples: Vec<String>) -> Self {
        Self { tuples }
    }

    pub fn tuples(&self) -> &[String] {
        &self.tuples
    }

    pub fn into_tuples(self) -> Vec<String> {
        self.tuples
    }

    /// Number of values in the row
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }
}

impl From<Vec<String>> for Record {
    fn from(tuples: Vec<String>) -> Self {
        Self::new(tuples)
    }
}

impl<S: Into<String>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
