//! # oxide-dialect-sqlite
//!
//! SQLite dialect for `oxide-dialect`.
//!
//! # How SQLite differs from other dialects
//!
//! - **[Type affinity]**: SQLite columns carry an affinity rather than a
//!   strict type, and only `INTEGER PRIMARY KEY` aliases the [ROWID]. The
//!   dialect rewrites `SMALLINT` and `BIGINT` fields to `INTEGER` when a
//!   table is registered.
//! - **[Blob literals]**: binary values are written as `X'<hex>'`.
//! - **Identifier quoting**: SQLite uses double quotes (`"`) as the
//!   standard quoting style, though it also accepts backticks and square
//!   brackets. See [SQLite keywords].
//! - **Features**: common table expressions, [RETURNING] (since 3.35.0),
//!   table aliases on INSERT and DELETE, and [UPSERT] via `ON CONFLICT`
//!   (since 3.24.0).
//!
//! [Type affinity]: https://www.sqlite.org/datatype3.html
//! [ROWID]: https://www.sqlite.org/lang_createtable.html#rowid
//! [Blob literals]: https://www.sqlite.org/lang_expr.html#literal_values_constants_
//! [SQLite keywords]: https://www.sqlite.org/lang_keywords.html
//! [RETURNING]: https://www.sqlite.org/lang_returning.html
//! [UPSERT]: https://www.sqlite.org/lang_upsert.html
//!
//! ## Example
//!
//! ```rust
//! use oxide_dialect::{Dialect, Feature, Field, SqlType, Table};
//! use oxide_dialect_sqlite::SqliteDialect;
//!
//! let dialect = SqliteDialect::new();
//! assert!(dialect.features().contains(Feature::RETURNING));
//!
//! let users = dialect.register_table(
//!     Table::new("users")
//!         .with_field(Field::new("id", SqlType::Bigint).primary_key())
//!         .with_field(Field::new("avatar", SqlType::Blob)),
//! );
//! assert_eq!(users.field("id").unwrap().discovered_sql_type, SqlType::Integer);
//!
//! let mut sql = String::from("SELECT ");
//! dialect.append_bytes(&mut sql, Some(b"AB".as_slice()));
//! assert_eq!(sql, "SELECT X'4142'");
//! ```

mod dialect;

pub use dialect::SqliteDialect;
