///
/// Key
///
/// Secondary index over an ordered list of column names. Names are not
/// checked against the owning table here.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Key {
    pub name: String,
    pub key_type: KeyType,
    pub columns: Vec<String>,
}

impl Key {
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, key_type: KeyType, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            key_type,
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }
}

///
/// KeyType
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum KeyType {
    #[default]
    Standard,
    Unique,
    Spatial,
}

impl KeyType {
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Unique)
    }
}
