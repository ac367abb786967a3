use bitflags::bitflags;

///
/// Column
///
/// One column of a table. Optional attributes use their zero value
/// (0, empty string, `ColumnDefault::None`, no flags) for "unset".
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Column {
    pub name: String,
    pub column_type: String,
    pub size: u64,
    pub scale: u64,
    pub nullable: bool,
    pub type_restriction: String,
    pub reference_system: String,
    pub db_type_def: String,
    pub default: ColumnDefault,
    pub flags: ColumnFlags,
}

impl Column {
    /// Build a nullable column with no size, scale, default, or flags.
    #[must_use]
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub const fn with_scale(mut self, scale: u64) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub const fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    #[must_use]
    pub fn with_type_restriction(mut self, restriction: impl Into<String>) -> Self {
        self.type_restriction = restriction.into();
        self
    }

    #[must_use]
    pub fn with_reference_system(mut self, reference_system: impl Into<String>) -> Self {
        self.reference_system = reference_system.into();
        self
    }

    #[must_use]
    pub fn with_db_type_def(mut self, db_type_def: impl Into<String>) -> Self {
        self.db_type_def = db_type_def.into();
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: ColumnDefault) -> Self {
        self.default = default;
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: ColumnFlags) -> Self {
        self.flags |= flags;
        self
    }
}

impl Default for Column {
    fn default() -> Self {
        Self {
            name: String::new(),
            column_type: String::new(),
            size: 0,
            scale: 0,
            nullable: true,
            type_restriction: String::new(),
            reference_system: String::new(),
            db_type_def: String::new(),
            default: ColumnDefault::None,
            flags: ColumnFlags::empty(),
        }
    }
}

///
/// ColumnDefault
///
/// Column default. "No default" and "default of kind K
/// with value V" cannot both hold.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum ColumnDefault {
    #[default]
    None,

    /// Reserved; no producer emits it yet but decoders must accept it.
    Sequence(String),

    Value(String),

    Expression(String),
}

impl ColumnDefault {
    #[must_use]
    pub const fn kind(&self) -> DefaultKind {
        match self {
            Self::None => DefaultKind::NoDefault,
            Self::Sequence(_) => DefaultKind::Sequence,
            Self::Value(_) => DefaultKind::DefaultValue,
            Self::Expression(_) => DefaultKind::DefaultExpression,
        }
    }

    /// Associated value, if a default is set.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Sequence(v) | Self::Value(v) | Self::Expression(v) => Some(v),
        }
    }

    #[must_use]
    pub const fn is_set(&self) -> bool {
        !matches!(self, Self::None)
    }
}

///
/// DefaultKind
///
/// Payload-free tag of a `ColumnDefault`.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DefaultKind {
    NoDefault,
    Sequence,
    DefaultValue,
    DefaultExpression,
}

bitflags! {
    ///
    /// ColumnFlags
    ///
    /// Independent per-column markers; any combination is valid.
    ///

    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct ColumnFlags: u8 {
        const MYSQL_TIMESTAMP = 1 << 0;
        const MYSQL_ON_UPDATE_TIMESTAMP = 1 << 1;
        const TIME_ZONE = 1 << 2;
        const SIMPLE_GEOMETRY = 1 << 3;
    }
}
