use crate::attribute::Attribute;
use crate::error::Result;
use crate::record::Record;

pub mod memory;

pub use memory::MemoryConnector;

/// Capability set every concrete source adapter provides.
///
/// One caller drives one connector: every state-changing method takes
/// `&mut self`, so batch reads on the same instance are serialized by the
/// borrow checker. `init_connector` must run once before any read and
/// `close` once at teardown; `ConnectorSession` enforces both.
pub trait Connector {
    fn db_name(&self) -> &str;
    fn path(&self) -> &str;
    fn source_name(&self) -> &str;

    /// Establish the underlying handle. Fails with `ConnectorError::Connection`.
    fn init_connector(&mut self) -> Result<()>;

    /// Release the underlying handle. Best effort, never fails.
    fn destroy_connector(&mut self);

    /// Ordered schema of the source. Fails with `ConnectorError::Schema`.
    fn attributes(&mut self) -> Result<Vec<Attribute>>;

    /// Append up to `num` raw records to `out`.
    ///
    /// Returns `false` exactly when the source has no further data.
    /// Fails with `ConnectorError::SourceRead`.
    fn read_rows_into(&mut self, num: usize, out: &mut Vec<Record>) -> Result<bool>;

    fn close(&mut self) {
        self.destroy_connector();
    }
}

impl<C: Connector + ?Sized> Connector for Box<C> {
    fn db_name(&self) -> &str {
        (**self).db_name()
    }

    fn path(&self) -> &str {
        (**self).path()
    }

    fn source_name(&self) -> &str {
        (**self).source_name()
    }

    fn init_connector(&mut self) -> Result<()> {
        (**self).init_connector()
    }

    fn destroy_connector(&mut self) {
        (**self).destroy_connector()
    }

    fn attributes(&mut self) -> Result<Vec<Attribute>> {
        (**self).attributes()
    }

    fn read_rows_into(&mut self, num: usize, out: &mut Vec<Record>) -> Result<bool> {
        (**self).read_rows_into(num, out)
    }

    fn close(&mut self) {
        (**self).close()
    }
}

impl<C: Connector + ?Sized> Connector for &mut C {
    fn db_name(&self) -> &str {
        (**self).db_name()
    }

    fn path(&self) -> &str {
        (**self).path()
    }

    fn source_name(&self) -> &str {
        (**self).source_name()
    }

    fn init_connector(&mut self) -> Result<()> {
        (**self).init_connector()
    }

    fn destroy_connector(&mut self) {
        (**self).destroy_connector()
    }

    fn attributes(&mut self) -> Result<Vec<Attribute>> {
        (**self).attributes()
    }

    fn read_rows_into(&mut self, num: usize, out: &mut Vec<Record>) -> Result<bool> {
        (**self).read_rows_into(num, out)
    }

    fn close(&mut self) {
        (**self).close()
    }
}
