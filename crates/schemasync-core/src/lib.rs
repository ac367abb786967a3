//! Self-describing, version-tolerant binary encoding for relational schema
//! snapshots (databases, tables, columns, keys) exchanged between peers
//! that may not run the same release.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod codec;
pub mod config;
pub mod error;
pub mod model;
pub mod obs;

pub(crate) mod serialize;

///
/// Prelude
///
/// Prelude contains only domain vocabulary and the codec entrypoints.
///

pub mod prelude {
    pub use crate::{
        codec::{SchemaEntity, SchemaReader, SchemaWriter, decode, encode},
        model::{
            Column, ColumnDefault, ColumnFlags, Database, Key, KeyType, PrimaryKeyType, Table,
        },
    };
}
