//! SQLite dialect implementation.

use oxide_dialect::{literal, Dialect, Feature, Name, SqlType, Table, Tables};
use sqlx::SqlitePool;
use tracing::{debug, trace};

/// Bytes hex-encoded per step of [`SqliteDialect::append_bytes`].
const HEX_CHUNK: usize = 64;

/// SQLite dialect.
#[derive(Debug)]
pub struct SqliteDialect {
    tables: Tables,
    features: Feature,
}

impl SqliteDialect {
    /// Optional constructs SQLite accepts.
    pub const FEATURES: Feature = Feature::CTE
        .union(Feature::RETURNING) // SQLite 3.35.0+
        .union(Feature::INSERT_TABLE_ALIAS)
        .union(Feature::DELETE_TABLE_ALIAS)
        .union(Feature::INSERT_ON_CONFLICT); // SQLite 3.24.0+

    /// Creates a new SQLite dialect with an empty table registry.
    #[must_use]
    pub fn new() -> Self {
        debug!(features = ?Self::FEATURES.names(), "created sqlite dialect");
        Self {
            tables: Tables::new(),
            features: Self::FEATURES,
        }
    }

    /// Returns the type SQLite should declare for a discovered type.
    ///
    /// SQLite columns have no size, and only a column declared exactly
    /// `INTEGER PRIMARY KEY` aliases the ROWID, so every sized integer kind
    /// collapses to `INTEGER`. Other types are returned unchanged.
    #[must_use]
    pub fn resolve_type(discovered: &SqlType) -> SqlType {
        if discovered.is_fixed_width_integer() {
            SqlType::Integer
        } else {
            discovered.clone()
        }
    }
}

impl Default for SqliteDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for SqliteDialect {
    type Connection = SqlitePool;

    fn init(&self, _conn: &SqlitePool) {}

    fn name(&self) -> Name {
        Name::Sqlite
    }

    fn features(&self) -> Feature {
        self.features
    }

    fn tables(&self) -> &Tables {
        &self.tables
    }

    fn on_table(&self, table: &mut Table) {
        for field in table.fields_mut() {
            let resolved = Self::resolve_type(&field.discovered_sql_type);
            if resolved != field.discovered_sql_type {
                trace!(
                    field = %field.name,
                    from = %field.discovered_sql_type,
                    to = %resolved,
                    "resolved field type"
                );
            }
            field.discovered_sql_type = resolved;
        }
    }

    fn identifier_quote(&self) -> char {
        '"' // SQLite also accepts backticks and brackets, but double quotes are standard
    }

    fn append_bytes(&self, buf: &mut String, bytes: Option<&[u8]>) {
        let Some(bytes) = bytes else {
            literal::append_null(buf);
            return;
        };

        buf.reserve(bytes.len() * 2 + 3);
        buf.push_str("X'");
        let mut scratch = [0u8; HEX_CHUNK * 2];
        for chunk in bytes.chunks(HEX_CHUNK) {
            let out = &mut scratch[..chunk.len() * 2];
            if hex::encode_to_slice(chunk, out).is_ok() {
                buf.extend(out.iter().copied().map(char::from));
            }
        }
        buf.push('\'');
    }

    fn append_bool(&self, buf: &mut String, value: bool) {
        buf.push(if value { '1' } else { '0' });
    }
}
