//! Wire key registry.
//!
//! Keys are case-sensitive and permanent once shipped. Renaming one breaks
//! every peer built before the rename; add a new key instead.

// shared
pub(crate) const NAME: &str = "name";
pub(crate) const COLUMNS: &str = "columns";

// column
pub(crate) const COLUMN_TYPE: &str = "column_type";
pub(crate) const SIZE: &str = "size";
pub(crate) const SCALE: &str = "scale";
pub(crate) const NULLABLE: &str = "nullable";
pub(crate) const TYPE_RESTRICTION: &str = "type_restriction";
pub(crate) const REFERENCE_SYSTEM: &str = "reference_system";
pub(crate) const DB_TYPE_DEF: &str = "db_type_def";
pub(crate) const SEQUENCE: &str = "sequence";
pub(crate) const DEFAULT_VALUE: &str = "default_value";
/// Carries `ColumnDefault::Expression`; the name predates the model.
pub(crate) const DEFAULT_FUNCTION: &str = "default_function";
pub(crate) const MYSQL_TIMESTAMP: &str = "mysql_timestamp";
pub(crate) const MYSQL_ON_UPDATE_TIMESTAMP: &str = "mysql_on_update_timestamp";
pub(crate) const TIME_ZONE: &str = "time_zone";
pub(crate) const SIMPLE_GEOMETRY: &str = "simple_geometry";

// key
pub(crate) const UNIQUE: &str = "unique";
pub(crate) const KEY_TYPE: &str = "key_type";
pub(crate) const KEY_TYPE_STANDARD: &str = "standard";
pub(crate) const KEY_TYPE_UNIQUE: &str = "unique";
pub(crate) const KEY_TYPE_SPATIAL: &str = "spatial";

// table
pub(crate) const PRIMARY_KEY_COLUMNS: &str = "primary_key_columns";
pub(crate) const PRIMARY_KEY_TYPE: &str = "primary_key_type";
pub(crate) const KEYS: &str = "keys";

// database
pub(crate) const TABLES: &str = "tables";
