//! # oxide-dialect
//!
//! The contract between a generic ORM core and the SQL engines it targets.
//!
//! The ORM core builds SQL abstractly (columns, types, literals, clauses)
//! and delegates every engine-specific decision to a [`Dialect`]:
//!
//! - which optional SQL constructs are legal ([`Feature`]),
//! - how identifiers are quoted and literals are written,
//! - which SQL type a reflected field declares ([`Dialect::on_table`]).
//!
//! Dialects own a [`Tables`] registry that caches reflected table metadata
//! for the lifetime of the dialect.
//!
//! ## Example
//!
//! ```rust
//! use oxide_dialect::{Feature, Field, SqlType, Table};
//!
//! let table = Table::new("users")
//!     .with_field(Field::new("id", SqlType::discover::<i64>()).primary_key())
//!     .with_field(Field::new("name", SqlType::Text));
//!
//! assert_eq!(table.primary_key().unwrap().discovered_sql_type, SqlType::Bigint);
//!
//! let features = Feature::CTE | Feature::RETURNING;
//! assert!(features.contains(Feature::CTE));
//! assert!(!features.contains(Feature::OUTPUT));
//! ```

pub mod dialect;
mod error;
pub mod feature;
pub mod literal;
mod name;
pub mod schema;
pub mod sqltype;

pub use dialect::Dialect;
pub use error::{DialectError, Result};
pub use feature::Feature;
pub use name::Name;
pub use schema::{Field, Table, Tables};
pub use sqltype::{Discover, SqlType};
