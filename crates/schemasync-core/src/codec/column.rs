use crate::{
    codec::{skip_unknown, wire},
    model::{Column, ColumnDefault, ColumnFlags},
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

/// `name` and `column_type` are always written.
const REQUIRED_ENTRIES: usize = 2;

const FLAG_KEYS: [(ColumnFlags, &str); 4] = [
    (ColumnFlags::MYSQL_TIMESTAMP, wire::MYSQL_TIMESTAMP),
    (
        ColumnFlags::MYSQL_ON_UPDATE_TIMESTAMP,
        wire::MYSQL_ON_UPDATE_TIMESTAMP,
    ),
    (ColumnFlags::TIME_ZONE, wire::TIME_ZONE),
    (ColumnFlags::SIMPLE_GEOMETRY, wire::SIMPLE_GEOMETRY),
];

/// Optional entries in emission order, `None` when omitted.
fn optional_entries(column: &Column) -> [Option<(&'static str, OptionalValue<'_>)>; 7] {
    [
        (column.size != 0).then_some((wire::SIZE, OptionalValue::Int(column.size))),
        (column.scale != 0).then_some((wire::SCALE, OptionalValue::Int(column.scale))),
        (!column.nullable).then_some((wire::NULLABLE, OptionalValue::Bool(false))),
        non_empty(wire::TYPE_RESTRICTION, &column.type_restriction),
        non_empty(wire::REFERENCE_SYSTEM, &column.reference_system),
        non_empty(wire::DB_TYPE_DEF, &column.db_type_def),
        default_entry(&column.default),
    ]
}

fn non_empty<'a>(key: &'static str, value: &'a str) -> Option<(&'static str, OptionalValue<'a>)> {
    (!value.is_empty()).then_some((key, OptionalValue::Str(value)))
}

fn default_entry(default: &ColumnDefault) -> Option<(&'static str, OptionalValue<'_>)> {
    let key = match default {
        ColumnDefault::None => return None,
        ColumnDefault::Sequence(_) => wire::SEQUENCE,
        ColumnDefault::Value(_) => wire::DEFAULT_VALUE,
        ColumnDefault::Expression(_) => wire::DEFAULT_FUNCTION,
    };

    default.value().map(|value| (key, OptionalValue::Str(value)))
}

fn flag_for_key(key: &str) -> Option<ColumnFlags> {
    FLAG_KEYS
        .iter()
        .find_map(|(flag, name)| (*name == key).then_some(*flag))
}

/// Number of map entries `column` encodes to.
pub(crate) fn wire_len(column: &Column) -> usize {
    let optional = optional_entries(column).iter().flatten().count();
    let flags = FLAG_KEYS
        .iter()
        .filter(|(flag, _)| column.flags.contains(*flag))
        .count();

    REQUIRED_ENTRIES + optional + flags
}

///
/// OptionalValue
///

#[derive(Clone, Copy)]
enum OptionalValue<'a> {
    Int(u64),
    Bool(bool),
    Str(&'a str),
}

impl Serialize for OptionalValue<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Self::Int(v) => serializer.serialize_u64(v),
            Self::Bool(v) => serializer.serialize_bool(v),
            Self::Str(v) => serializer.serialize_str(v),
        }
    }
}

impl Serialize for Column {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(wire_len(self)))?;
        map.serialize_entry(wire::NAME, &self.name)?;
        map.serialize_entry(wire::COLUMN_TYPE, &self.column_type)?;

        for (key, value) in optional_entries(self).into_iter().flatten() {
            map.serialize_entry(key, &value)?;
        }

        for (flag, key) in FLAG_KEYS {
            if self.flags.contains(flag) {
                map.serialize_entry(key, &true)?;
            }
        }

        let ok = map.end()?;
        sink::record(CodecEvent::Encoded {
            entity: EntityLabel::Column,
        });

        Ok(ok)
    }
}

impl<'de> Deserialize<'de> for Column {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ColumnVisitor)
    }
}

struct ColumnVisitor;

impl<'de> Visitor<'de> for ColumnVisitor {
    type Value = Column;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a column map")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Column, A::Error>
    where
        A: MapAccess<'de>,
    {
        // absent keys keep these defaults: nullable, zero size/scale, no flags
        let mut column = Column::default();

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                wire::NAME => column.name = map.next_value()?,
                wire::COLUMN_TYPE => column.column_type = map.next_value()?,
                wire::SIZE => column.size = map.next_value()?,
                wire::SCALE => column.scale = map.next_value()?,
                wire::NULLABLE => column.nullable = map.next_value()?,
                wire::TYPE_RESTRICTION => column.type_restriction = map.next_value()?,
                wire::REFERENCE_SYSTEM => column.reference_system = map.next_value()?,
                wire::DB_TYPE_DEF => column.db_type_def = map.next_value()?,
                wire::SEQUENCE => column.default = ColumnDefault::Sequence(map.next_value()?),
                wire::DEFAULT_VALUE => column.default = ColumnDefault::Value(map.next_value()?),
                wire::DEFAULT_FUNCTION => {
                    column.default = ColumnDefault::Expression(map.next_value()?);
                }
                other => match flag_for_key(other) {
                    Some(flag) => {
                        if map.next_value::<bool>()? {
                            column.flags |= flag;
                        }
                    }
                    None => skip_unknown(&mut map, EntityLabel::Column, other)?,
                },
            }
        }

        sink::record(CodecEvent::Decoded {
            entity: EntityLabel::Column,
        });

        Ok(column)
    }
}
