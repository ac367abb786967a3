use crate::model::{Column, Key};

///
/// Table
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
    pub primary_key_columns: Vec<String>,
    pub primary_key_type: PrimaryKeyType,
    pub keys: Vec<Key>,
}

impl Table {
    /// Build an empty table with no available primary key.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn key(&self, name: &str) -> Option<&Key> {
        self.keys.iter().find(|k| k.name == name)
    }
}

///
/// PrimaryKeyType
///
/// How (or whether) a table has a primary key. Only the two named cases
/// carry meaning here; any other discriminant the producing schema model
/// defines is carried through untouched as `Other`.
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum PrimaryKeyType {
    #[default]
    NoAvailableKey,
    ExplicitPrimaryKey,
    Other(u64),
}

impl PrimaryKeyType {
    const NO_AVAILABLE_KEY: u64 = 0;
    const EXPLICIT_PRIMARY_KEY: u64 = 1;

    /// Infer the type for data that predates the field: a table listing
    /// primary key columns has an explicit primary key.
    #[must_use]
    pub const fn infer(primary_key_columns: &[String]) -> Self {
        if primary_key_columns.is_empty() {
            Self::NoAvailableKey
        } else {
            Self::ExplicitPrimaryKey
        }
    }

    #[must_use]
    pub const fn discriminant(self) -> u64 {
        match self {
            Self::NoAvailableKey => Self::NO_AVAILABLE_KEY,
            Self::ExplicitPrimaryKey => Self::EXPLICIT_PRIMARY_KEY,
            Self::Other(raw) => raw,
        }
    }

    #[must_use]
    pub const fn from_discriminant(raw: u64) -> Self {
        match raw {
            Self::NO_AVAILABLE_KEY => Self::NoAvailableKey,
            Self::EXPLICIT_PRIMARY_KEY => Self::ExplicitPrimaryKey,
            other => Self::Other(other),
        }
    }
}
