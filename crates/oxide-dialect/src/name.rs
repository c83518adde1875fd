//! Engine identifiers.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DialectError;

/// Identifies a database engine among all supported dialects.
///
/// Parses from configuration text with [`FromStr`] (case-insensitive,
/// accepting common aliases) or through serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Name {
    /// PostgreSQL.
    #[serde(alias = "postgres", alias = "postgresql")]
    Pg,
    /// SQLite.
    #[serde(alias = "sqlite3")]
    Sqlite,
    /// MySQL and MariaDB.
    #[serde(alias = "mariadb")]
    Mysql,
    /// Microsoft SQL Server.
    #[serde(alias = "sqlserver")]
    Mssql,
}

impl Name {
    /// Returns the lower-case tag for this engine.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pg => "pg",
            Self::Sqlite => "sqlite",
            Self::Mysql => "mysql",
            Self::Mssql => "mssql",
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Name {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pg" | "postgres" | "postgresql" => Ok(Self::Pg),
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            "mysql" | "mariadb" => Ok(Self::Mysql),
            "mssql" | "sqlserver" => Ok(Self::Mssql),
            _ => Err(DialectError::UnknownName(s.to_string())),
        }
    }
}
