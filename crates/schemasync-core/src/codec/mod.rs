//! Schema codec: converts schema snapshots to and from self-describing
//! binary maps.
//!
//! Encoders omit absent optional attributes so omission doubles as the
//! "use default" signal. Decoders skip keys they do not recognize, which is
//! what lets an older peer read a newer peer's output.

mod column;
mod database;
mod key;
mod stream;
mod table;
mod wire;


use crate::{
    config::CodecConfig,
    error::CodecError,
    model::{Column, Database, Key, Table},
    obs::{
        EntityLabel,
        sink::{self, CodecEvent},
    },
    serialize,
};
use serde::{
    Serialize,
    de::{DeserializeOwned, IgnoredAny, MapAccess},
};
use std::io::{Read, Write};

pub use stream::{SchemaReader, SchemaWriter};

mod sealed {
    pub trait Sealed {}
}

///
/// SchemaEntity
///
/// One of the four top-level wire entities.
///

pub trait SchemaEntity: Serialize + DeserializeOwned + sealed::Sealed {
    const ENTITY: EntityLabel;
}

macro_rules! schema_entity {
    ($($ty:ty => $label:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl SchemaEntity for $ty {
                const ENTITY: EntityLabel = EntityLabel::$label;
            }
        )*
    };
}

schema_entity! {
    Column => Column,
    Key => Key,
    Table => Table,
    Database => Database,
}

/// Encode one entity into a standalone buffer.
pub fn encode<T: SchemaEntity>(entity: &T) -> Result<Vec<u8>, CodecError> {
    serialize::serialize(entity)
}

/// Encode one entity onto a writer.
pub fn encode_to_writer<W, T>(writer: W, entity: &T) -> Result<(), CodecError>
where
    W: Write,
    T: SchemaEntity,
{
    serialize::serialize_into(writer, entity)
}

/// Decode exactly one entity from `bytes` using the default [`CodecConfig`].
pub fn decode<T: SchemaEntity>(bytes: &[u8]) -> Result<T, CodecError> {
    decode_with(bytes, &CodecConfig::default())
}

/// Decode exactly one entity from `bytes`.
///
/// All-or-nothing: either a fully populated entity or an error, never a
/// partially decoded value.
pub fn decode_with<T: SchemaEntity>(bytes: &[u8], config: &CodecConfig) -> Result<T, CodecError> {
    serialize::deserialize_bounded(bytes, config.max_payload_bytes).inspect_err(record_failure)
}

/// Decode exactly one entity from a reader, which must then be exhausted.
pub fn decode_from_reader<R, T>(reader: R) -> Result<T, CodecError>
where
    R: Read,
    T: SchemaEntity,
{
    let mut reader = SchemaReader::new(reader);
    let entity = reader.read()?;
    reader.finish()?;

    Ok(entity)
}

pub(crate) fn record_failure(err: &CodecError) {
    sink::record(CodecEvent::DecodeFailed { kind: err.kind() });
}

// Consume and discard the value of a key this version does not know.
fn skip_unknown<'de, A>(map: &mut A, entity: EntityLabel, key: &str) -> Result<(), A::Error>
where
    A: MapAccess<'de>,
{
    map.next_value::<IgnoredAny>()?;
    sink::record(CodecEvent::UnknownKeySkipped { entity, key });

    Ok(())
}
