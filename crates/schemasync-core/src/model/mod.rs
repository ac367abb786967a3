//! In-memory schema snapshot: databases, tables, columns, and keys.
//!
//! These are plain value types. Wire aliasing (legacy keys, default
//! backfill) lives in `codec` and never leaks into this module.

mod column;
mod database;
mod key;
mod table;

#[cfg(test)]
mod tests;

pub use column::{Column, ColumnDefault, ColumnFlags, DefaultKind};
pub use database::Database;
pub use key::{Key, KeyType};
pub use table::{PrimaryKeyType, Table};
