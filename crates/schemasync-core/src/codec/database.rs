use crate::{
    codec::{skip_unknown, wire},
    model::Database,
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

impl Serialize for Database {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(wire::TABLES, &self.tables)?;

        let ok = map.end()?;
        sink::record(CodecEvent::Encoded {
            entity: EntityLabel::Database,
        });

        Ok(ok)
    }
}

impl<'de> Deserialize<'de> for Database {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DatabaseVisitor)
    }
}

struct DatabaseVisitor;

impl<'de> Visitor<'de> for DatabaseVisitor {
    type Value = Database;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a database map")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Database, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut database = Database::default();

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                wire::TABLES => database.tables = map.next_value()?,
                other => skip_unknown(&mut map, EntityLabel::Database, other)?,
            }
        }

        sink::record(CodecEvent::Decoded {
            entity: EntityLabel::Database,
        });

        Ok(database)
    }
}
