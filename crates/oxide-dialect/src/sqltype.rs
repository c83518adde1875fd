//! Generic SQL type classification.
//!
//! Reflection assigns every field a [`SqlType`] before any dialect sees it.
//! Dialects then resolve it to the type they prefer to declare (see
//! [`Dialect::on_table`](crate::Dialect::on_table)).

use core::fmt;

/// Generic SQL types discovered for mapped fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SqlType {
    /// Boolean.
    Boolean,

    // Integer types
    /// Small integer (2 bytes).
    Smallint,
    /// Integer (4 bytes).
    Integer,
    /// Big integer (8 bytes).
    Bigint,

    // Floating point
    /// Real (4-byte float).
    Real,
    /// Double precision (8-byte float).
    DoublePrecision,

    // String types
    /// Variable-length character string.
    Varchar(Option<u32>),
    /// Text (variable length, no limit).
    Text,

    /// Binary large object.
    Blob,
    /// Timestamp.
    Timestamp,

    /// JSON document.
    Json,
    /// Binary JSON document.
    Jsonb,

    /// Any type outside this enumeration, kept verbatim.
    Custom(String),
}

impl SqlType {
    /// Returns the SQL representation of the type.
    #[must_use]
    pub fn to_sql(&self) -> String {
        match self {
            Self::Boolean => String::from("BOOLEAN"),
            Self::Smallint => String::from("SMALLINT"),
            Self::Integer => String::from("INTEGER"),
            Self::Bigint => String::from("BIGINT"),
            Self::Real => String::from("REAL"),
            Self::DoublePrecision => String::from("DOUBLE PRECISION"),
            Self::Varchar(len) => match len {
                Some(n) => format!("VARCHAR({n})"),
                None => String::from("VARCHAR"),
            },
            Self::Text => String::from("TEXT"),
            Self::Blob => String::from("BLOB"),
            Self::Timestamp => String::from("TIMESTAMP"),
            Self::Json => String::from("JSON"),
            Self::Jsonb => String::from("JSONB"),
            Self::Custom(name) => name.clone(),
        }
    }

    /// Returns whether this is a sized integer kind other than `INTEGER`.
    #[must_use]
    pub const fn is_fixed_width_integer(&self) -> bool {
        matches!(self, Self::Smallint | Self::Bigint)
    }

    /// Returns the discovered type for the Rust type `T`.
    #[must_use]
    pub fn discover<T: Discover + ?Sized>() -> Self {
        T::sql_type()
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

/// Rust types with a generic SQL classification.
///
/// This is the scalar part of reflection: it answers which [`SqlType`] a
/// field of type `Self` is discovered as.
pub trait Discover {
    /// The generic SQL type for values of this type.
    fn sql_type() -> SqlType;
}

macro_rules! impl_discover {
    ($($ty:ty => $sql:expr),+ $(,)?) => {
        $(
            impl Discover for $ty {
                fn sql_type() -> SqlType {
                    $sql
                }
            }
        )+
    };
}

impl_discover!(
    bool => SqlType::Boolean,
    i8 => SqlType::Smallint,
    u8 => SqlType::Smallint,
    i16 => SqlType::Smallint,
    u16 => SqlType::Integer,
    i32 => SqlType::Integer,
    u32 => SqlType::Bigint,
    i64 => SqlType::Bigint,
    u64 => SqlType::Bigint,
    f32 => SqlType::Real,
    f64 => SqlType::DoublePrecision,
    String => SqlType::Varchar(None),
    str => SqlType::Varchar(None),
    Vec<u8> => SqlType::Blob,
    [u8] => SqlType::Blob,
);

impl<T: Discover + ?Sized> Discover for &T {
    fn sql_type() -> SqlType {
        T::sql_type()
    }
}

impl<T: Discover> Discover for Option<T> {
    fn sql_type() -> SqlType {
        T::sql_type()
    }
}
