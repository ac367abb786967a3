use super::*;

#[test]
fn new_column_uses_wire_defaults() {
    let column = Column::new("id", "INT");

    assert!(column.nullable);
    assert_eq!(column.size, 0);
    assert_eq!(column.scale, 0);
    assert_eq!(column.default, ColumnDefault::None);
    assert!(column.flags.is_empty());
}

#[test]
fn column_default_exposes_kind_and_value() {
    let default = ColumnDefault::Expression("NOW()".into());

    assert_eq!(default.kind(), DefaultKind::DefaultExpression);
    assert_eq!(default.value(), Some("NOW()"));
    assert!(default.is_set());

    assert_eq!(ColumnDefault::None.kind(), DefaultKind::NoDefault);
    assert_eq!(ColumnDefault::None.value(), None);
}

#[test]
fn with_flags_accumulates() {
    let column = Column::new("ts", "DATETIME")
        .with_flags(ColumnFlags::MYSQL_TIMESTAMP)
        .with_flags(ColumnFlags::TIME_ZONE);

    assert!(column.flags.contains(ColumnFlags::MYSQL_TIMESTAMP | ColumnFlags::TIME_ZONE));
    assert!(!column.flags.contains(ColumnFlags::SIMPLE_GEOMETRY));
}

#[test]
fn primary_key_type_infers_from_key_columns() {
    assert_eq!(PrimaryKeyType::infer(&[]), PrimaryKeyType::NoAvailableKey);
    assert_eq!(
        PrimaryKeyType::infer(&["id".to_string()]),
        PrimaryKeyType::ExplicitPrimaryKey
    );
}

#[test]
fn primary_key_type_preserves_unnamed_discriminants() {
    for raw in [0, 1, 2, 3, 250] {
        assert_eq!(PrimaryKeyType::from_discriminant(raw).discriminant(), raw);
    }

    assert_eq!(PrimaryKeyType::from_discriminant(2), PrimaryKeyType::Other(2));
}

#[test]
fn table_and_database_lookups_by_name() {
    let mut table = Table::new("users");
    table.columns.push(Column::new("id", "INT"));
    table
        .keys
        .push(Key::new("users_email", KeyType::Unique, ["email"]));

    assert!(table.column("id").is_some());
    assert!(table.column("missing").is_none());
    assert!(table.key("users_email").is_some_and(|k| k.key_type.is_unique()));

    let database = Database::new(vec![table, Table::new("orders")]);
    assert!(database.table("orders").is_some());
    assert_eq!(database.len(), 2);

    let names: Vec<_> = (&database).into_iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["users", "orders"]);
}
