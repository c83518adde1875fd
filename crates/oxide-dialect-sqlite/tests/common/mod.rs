#![allow(dead_code)]

use oxide_dialect::{Dialect, Field, SqlType, Table};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// Routes dialect logs to the test harness; set `RUST_LOG=trace` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub async fn create_test_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create in-memory SQLite pool")
}

/// Reflected metadata for a `users` model with every integer width.
pub fn users_table() -> Table {
    Table::new("users")
        .with_field(Field::new("id", SqlType::Bigint).primary_key().auto_increment())
        .with_field(Field::new("age", SqlType::Smallint))
        .with_field(Field::new("score", SqlType::Integer))
        .with_field(Field::new("name", SqlType::Varchar(Some(100))).not_null())
        .with_field(Field::new("avatar", SqlType::Blob))
        .with_field(Field::new("bio", SqlType::Varchar(None)).user_sql_type(SqlType::Text))
}

/// Renders `CREATE TABLE` from registered metadata.
pub fn create_table_sql(dialect: &impl Dialect, table: &Table) -> String {
    let mut sql = String::from("CREATE TABLE ");
    dialect.append_ident(&mut sql, &table.name);
    sql.push_str(" (");
    for (i, field) in table.fields().iter().enumerate() {
        if i > 0 {
            sql.push_str(", ");
        }
        dialect.append_ident(&mut sql, &field.name);
        sql.push(' ');
        sql.push_str(&field.create_table_sql_type().to_sql());
        if field.primary_key {
            sql.push_str(" PRIMARY KEY");
        } else if !field.nullable {
            sql.push_str(" NOT NULL");
        }
    }
    sql.push(')');
    sql
}

/// Hex payload between `X'` and the closing quote of a blob literal.
pub fn blob_payload(literal: &str) -> &str {
    literal
        .strip_prefix("X'")
        .and_then(|rest| rest.strip_suffix('\''))
        .unwrap_or_else(|| panic!("Not a blob literal: {literal}"))
}
