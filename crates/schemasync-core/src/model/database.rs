use crate::model::Table;
use derive_more::{Deref, IntoIterator};

///
/// Database
///
/// Tables in processing order (not necessarily sorted by name).
///

#[derive(Clone, Debug, Default, Deref, Eq, IntoIterator, PartialEq)]
pub struct Database {
    #[into_iterator(owned, ref)]
    pub tables: Vec<Table>,
}

impl Database {
    #[must_use]
    pub const fn new(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    #[must_use]
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }
}
