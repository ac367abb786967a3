use crate::{
    codec::{skip_unknown, wire},
    model::{Key, KeyType},
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

/// `name`, one uniqueness entry, and `columns`.
const WIRE_LEN: usize = 3;

fn key_type_from_wire(raw: &str) -> Option<KeyType> {
    match raw {
        wire::KEY_TYPE_STANDARD => Some(KeyType::Standard),
        wire::KEY_TYPE_UNIQUE => Some(KeyType::Unique),
        wire::KEY_TYPE_SPATIAL => Some(KeyType::Spatial),
        _ => None,
    }
}

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(WIRE_LEN))?;
        map.serialize_entry(wire::NAME, &self.name)?;

        // peers that only know the boolean `unique` flag can still read
        // standard and unique keys; `key_type` is reserved for the third case
        match self.key_type {
            KeyType::Standard => map.serialize_entry(wire::UNIQUE, &false)?,
            KeyType::Unique => map.serialize_entry(wire::UNIQUE, &true)?,
            KeyType::Spatial => map.serialize_entry(wire::KEY_TYPE, wire::KEY_TYPE_SPATIAL)?,
        }

        map.serialize_entry(wire::COLUMNS, &self.columns)?;

        let ok = map.end()?;
        sink::record(CodecEvent::Encoded {
            entity: EntityLabel::Key,
        });

        Ok(ok)
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(KeyVisitor)
    }
}

struct KeyVisitor;

impl<'de> Visitor<'de> for KeyVisitor {
    type Value = Key;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a key map")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Key, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut key = Key::default();

        // `unique` and `key_type` both land in `key_type`; last one wins
        while let Some(attr) = map.next_key::<String>()? {
            match attr.as_str() {
                wire::NAME => key.name = map.next_value()?,
                wire::UNIQUE => {
                    key.key_type = if map.next_value::<bool>()? {
                        KeyType::Unique
                    } else {
                        KeyType::Standard
                    };
                }
                wire::KEY_TYPE => {
                    let raw: String = map.next_value()?;
                    match key_type_from_wire(&raw) {
                        Some(key_type) => key.key_type = key_type,
                        None => sink::record(CodecEvent::UnrecognizedKeyType {
                            key: &key.name,
                            key_type: &raw,
                        }),
                    }
                }
                wire::COLUMNS => key.columns = map.next_value()?,
                other => skip_unknown(&mut map, EntityLabel::Key, other)?,
            }
        }

        sink::record(CodecEvent::Decoded {
            entity: EntityLabel::Key,
        });

        Ok(key)
    }
}
