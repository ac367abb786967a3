use crate::{
    codec::{skip_unknown, wire},
    model::{PrimaryKeyType, Table},
    obs::{
        EntityLabel,
        sink::{self, CodecEvent},
    },
};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};
use std::fmt;

const WIRE_LEN: usize = 5;

impl Serialize for Table {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(WIRE_LEN))?;
        map.serialize_entry(wire::NAME, &self.name)?;
        map.serialize_entry(wire::COLUMNS, &self.columns)?;
        map.serialize_entry(wire::PRIMARY_KEY_COLUMNS, &self.primary_key_columns)?;
        map.serialize_entry(wire::PRIMARY_KEY_TYPE, &self.primary_key_type.discriminant())?;
        map.serialize_entry(wire::KEYS, &self.keys)?;

        let ok = map.end()?;
        sink::record(CodecEvent::Encoded {
            entity: EntityLabel::Table,
        });

        Ok(ok)
    }
}

impl<'de> Deserialize<'de> for Table {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(TableVisitor)
    }
}

struct TableVisitor;

impl<'de> Visitor<'de> for TableVisitor {
    type Value = Table;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a table map")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Table, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut table = Table::default();
        let mut primary_key_type = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                wire::NAME => table.name = map.next_value()?,
                wire::COLUMNS => table.columns = map.next_value()?,
                wire::PRIMARY_KEY_COLUMNS => table.primary_key_columns = map.next_value()?,
                wire::PRIMARY_KEY_TYPE => {
                    let raw: u64 = map.next_value()?;
                    primary_key_type = Some(PrimaryKeyType::from_discriminant(raw));
                }
                wire::KEYS => table.keys = map.next_value()?,
                other => skip_unknown(&mut map, EntityLabel::Table, other)?,
            }
        }

        // producers that predate `primary_key_type` never send it; only
        // infer once the whole map (and so the key column list) is read
        table.primary_key_type = match primary_key_type {
            Some(primary_key_type) => primary_key_type,
            None => {
                let inferred = PrimaryKeyType::infer(&table.primary_key_columns);
                sink::record(CodecEvent::PrimaryKeyTypeBackfilled {
                    table: &table.name,
                    inferred,
                });

                inferred
            }
        };

        sink::record(CodecEvent::Decoded {
            entity: EntityLabel::Table,
        });

        Ok(table)
    }
}
