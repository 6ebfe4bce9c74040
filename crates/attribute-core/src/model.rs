//! The owning record type of an attribute.

use crate::identifier::Identifier;

/// A dynamically defined record type backed by one table.
pub trait MetaModel: Send + Sync {
    /// Backing table every attribute of this model filters on.
    fn table_name(&self) -> &Identifier;
}

/// Minimal [`MetaModel`] that only knows its table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableModel {
    table_name: Identifier,
}

impl TableModel {
    pub fn new(table_name: Identifier) -> Self {
        Self { table_name }
    }
}

impl MetaModel for TableModel {
    fn table_name(&self) -> &Identifier {
        &self.table_name
    }
}
