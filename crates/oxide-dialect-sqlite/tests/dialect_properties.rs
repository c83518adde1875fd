//! Behavior of the SQLite dialect as seen by the ORM core: type
//! resolution, table registration, literals and sharing across threads.

mod common;
use common::*;

use std::sync::Arc;
use std::thread;

use oxide_dialect::{Dialect, Feature, Field, Name, SqlType, Table};
use oxide_dialect_sqlite::SqliteDialect;

fn known_types() -> Vec<SqlType> {
    vec![
        SqlType::Boolean,
        SqlType::Smallint,
        SqlType::Integer,
        SqlType::Bigint,
        SqlType::Real,
        SqlType::DoublePrecision,
        SqlType::Varchar(None),
        SqlType::Varchar(Some(32)),
        SqlType::Text,
        SqlType::Blob,
        SqlType::Timestamp,
        SqlType::Json,
        SqlType::Jsonb,
        SqlType::Custom("GEOMETRY".into()),
    ]
}

#[test]
fn integer_kinds_collapse_and_others_pass_through() {
    for ty in known_types() {
        let resolved = SqliteDialect::resolve_type(&ty);
        match ty {
            SqlType::Smallint | SqlType::Bigint | SqlType::Integer => {
                assert_eq!(resolved, SqlType::Integer, "{ty}");
            }
            other => assert_eq!(resolved, other),
        }
    }
}

#[test]
fn resolve_type_is_idempotent() {
    for ty in known_types() {
        let once = SqliteDialect::resolve_type(&ty);
        assert_eq!(SqliteDialect::resolve_type(&once), once);
    }
}

#[test]
fn on_table_rewrites_discovered_types() {
    let dialect = SqliteDialect::new();
    let mut table = users_table();

    dialect.on_table(&mut table);

    let types: Vec<(&str, &SqlType)> = table
        .fields()
        .iter()
        .map(|f| (f.name.as_str(), &f.discovered_sql_type))
        .collect();
    assert_eq!(
        types,
        vec![
            ("id", &SqlType::Integer),
            ("age", &SqlType::Integer),
            ("score", &SqlType::Integer),
            ("name", &SqlType::Varchar(Some(100))),
            ("avatar", &SqlType::Blob),
            ("bio", &SqlType::Varchar(None)),
        ]
    );
    assert_eq!(table.field("bio").unwrap().create_table_sql_type(), &SqlType::Text);
}

#[test]
fn on_table_is_idempotent() {
    let dialect = SqliteDialect::new();
    let mut once = users_table();
    dialect.on_table(&mut once);

    let mut twice = users_table();
    dialect.on_table(&mut twice);
    dialect.on_table(&mut twice);

    assert_eq!(once, twice);
}

#[test]
fn register_table_resolves_and_caches() {
    init_tracing();
    let dialect = SqliteDialect::new();

    let users = dialect.register_table(users_table());
    assert_eq!(users.field("age").unwrap().discovered_sql_type, SqlType::Integer);

    // A second reflection of the same name keeps the first registration.
    let again = dialect.register_table(
        Table::new("users").with_field(Field::new("other", SqlType::Text)),
    );
    assert!(Arc::ptr_eq(&users, &again));
    assert!(again.field("other").is_none());

    dialect.register_table(Table::new("posts"));
    assert_eq!(dialect.tables().names(), vec!["posts", "users"]);
}

#[test]
fn blob_literal_scenarios() {
    let dialect = SqliteDialect::new();
    let cases: [(Option<&[u8]>, &str); 4] = [
        (Some(&[0x41, 0x42]), "X'4142'"),
        (None, "NULL"),
        (Some(&[]), "X''"),
        (Some(&[0x0a, 0xb0, 0xff]), "X'0ab0ff'"),
    ];

    for (bytes, expected) in cases {
        let mut buf = String::new();
        dialect.append_bytes(&mut buf, bytes);
        assert_eq!(buf, expected);
    }
}

#[test]
fn blob_literal_payload_decodes_to_input() {
    let dialect = SqliteDialect::new();
    let inputs: Vec<Vec<u8>> = vec![
        vec![],
        vec![0],
        b"hello world".to_vec(),
        (0..=255).collect(),
        vec![0xff; 1000],
    ];

    for input in inputs {
        let mut buf = String::new();
        dialect.append_bytes(&mut buf, Some(&input));
        let decoded = hex::decode(blob_payload(&buf)).unwrap();
        assert_eq!(decoded, input);
    }
}

#[test]
fn absent_bytes_differ_from_empty_bytes() {
    let dialect = SqliteDialect::new();
    let mut absent = String::new();
    let mut empty = String::new();

    dialect.append_bytes(&mut absent, None);
    dialect.append_bytes(&mut empty, Some(&[]));

    assert_eq!(absent, "NULL");
    assert_eq!(empty, "X''");
    assert_ne!(absent, empty);
}

#[test]
fn identifiers_are_double_quoted() {
    let dialect = SqliteDialect::new();
    assert_eq!(dialect.identifier_quote(), '"');
    assert_eq!(dialect.quote_identifier("users"), "\"users\"");
    assert_eq!(dialect.quote_identifier("my \"table\""), "\"my \"\"table\"\"\"");
}

#[test]
fn dialect_is_shared_across_threads() {
    init_tracing();
    let dialect = SqliteDialect::new();
    let expected = dialect.features();

    thread::scope(|s| {
        for i in 0..8 {
            let dialect = &dialect;
            s.spawn(move || {
                for _ in 0..100 {
                    assert_eq!(dialect.features(), expected);
                    assert!(dialect.features().contains(Feature::CTE));
                    assert!(!dialect.features().contains(Feature::OUTPUT));
                    assert_eq!(dialect.name(), Name::Sqlite);

                    let mut buf = String::new();
                    dialect.append_bytes(&mut buf, Some(&[0x41, 0x42]));
                    assert_eq!(buf, "X'4142'");
                }
                dialect.register_table(
                    Table::new(format!("t{i}"))
                        .with_field(Field::new("id", SqlType::Bigint).primary_key()),
                );
            });
        }
    });

    assert_eq!(dialect.tables().len(), 8);
    for name in dialect.tables().names() {
        let table = dialect.tables().get(&name).unwrap();
        assert_eq!(table.field("id").unwrap().discovered_sql_type, SqlType::Integer);
    }
    assert_eq!(dialect.features(), SqliteDialect::FEATURES);
}

#[test]
fn dialect_selected_from_config_name() {
    let name: Name = "sqlite3".parse().unwrap();
    assert_eq!(name, SqliteDialect::new().name());
}
