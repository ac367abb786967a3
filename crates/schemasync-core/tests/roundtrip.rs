use proptest::prelude::*;
use schemasync_core::prelude::*;

fn arb_ident() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,12}"
}

fn arb_opt_text() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[ -~]{1,16}"]
}

fn arb_default() -> impl Strategy<Value = ColumnDefault> {
    prop_oneof![
        Just(ColumnDefault::None),
        arb_opt_text().prop_map(ColumnDefault::Sequence),
        arb_opt_text().prop_map(ColumnDefault::Value),
        arb_opt_text().prop_map(ColumnDefault::Expression),
    ]
}

fn arb_column() -> impl Strategy<Value = Column> {
    (
        arb_ident(),
        prop_oneof![Just("INT"), Just("VARCHAR"), Just("DECIMAL"), Just("GEOMETRY")],
        prop_oneof![Just(0u64), any::<u64>()],
        prop_oneof![Just(0u64), 1u64..40],
        any::<bool>(),
        (arb_opt_text(), arb_opt_text(), arb_opt_text()),
        arb_default(),
        any::<u8>(),
    )
        .prop_map(
            |(name, ty, size, scale, nullable, (restriction, srid, type_def), default, bits)| {
                Column {
                    name,
                    column_type: ty.to_string(),
                    size,
                    scale,
                    nullable,
                    type_restriction: restriction,
                    reference_system: srid,
                    db_type_def: type_def,
                    default,
                    flags: ColumnFlags::from_bits_truncate(bits),
                }
            },
        )
}

fn arb_key() -> impl Strategy<Value = Key> {
    (
        arb_ident(),
        prop_oneof![
            Just(KeyType::Standard),
            Just(KeyType::Unique),
            Just(KeyType::Spatial)
        ],
        prop::collection::vec(arb_ident(), 0..4),
    )
        .prop_map(|(name, key_type, columns)| Key::new(name, key_type, columns))
}

fn arb_primary_key_type() -> impl Strategy<Value = PrimaryKeyType> {
    prop_oneof![
        Just(PrimaryKeyType::NoAvailableKey),
        Just(PrimaryKeyType::ExplicitPrimaryKey),
        (2u64..16).prop_map(PrimaryKeyType::Other),
    ]
}

fn arb_table() -> impl Strategy<Value = Table> {
    (
        arb_ident(),
        prop::collection::vec(arb_column(), 0..5),
        prop::collection::vec(arb_ident(), 0..3),
        arb_primary_key_type(),
        prop::collection::vec(arb_key(), 0..3),
    )
        .prop_map(
            |(name, columns, primary_key_columns, primary_key_type, keys)| Table {
                name,
                columns,
                primary_key_columns,
                primary_key_type,
                keys,
            },
        )
}

fn arb_database() -> impl Strategy<Value = Database> {
    prop::collection::vec(arb_table(), 0..4).prop_map(Database::new)
}

proptest! {
    #[test]
    fn column_round_trips(column in arb_column()) {
        let decoded: Column = decode(&encode(&column).unwrap()).unwrap();
        prop_assert_eq!(decoded, column);
    }

    #[test]
    fn key_round_trips(key in arb_key()) {
        let decoded: Key = decode(&encode(&key).unwrap()).unwrap();
        prop_assert_eq!(decoded, key);
    }

    #[test]
    fn table_round_trips(table in arb_table()) {
        let decoded: Table = decode(&encode(&table).unwrap()).unwrap();
        prop_assert_eq!(decoded, table);
    }

    #[test]
    fn database_round_trips(database in arb_database()) {
        let decoded: Database = decode(&encode(&database).unwrap()).unwrap();
        prop_assert_eq!(decoded, database);
    }

    #[test]
    fn every_strict_prefix_of_a_table_fails(table in arb_table(), cut in any::<prop::sample::Index>()) {
        let bytes = encode(&table).unwrap();
        let prefix = &bytes[..cut.index(bytes.len())];

        prop_assert!(decode::<Table>(prefix).is_err());
    }
}

#[test]
fn all_defaults_round_trip() {
    let database = Database::new(vec![Table::new(""), Table::new("t")]);
    let decoded: Database = decode(&encode(&database).unwrap()).unwrap();

    assert_eq!(decoded, database);
}
