//! Error types for dialect selection.

use thiserror::Error;

/// Errors raised while selecting a dialect.
///
/// Dialect operations themselves are total and never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialectError {
    /// The dialect name is not recognized.
    #[error("unknown dialect name: {0:?}")]
    UnknownName(String),
}

/// Result type alias for dialect operations.
pub type Result<T> = std::result::Result<T, DialectError>;
