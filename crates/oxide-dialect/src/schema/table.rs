//! Table and field metadata.

use crate::sqltype::SqlType;

/// Metadata for one mapped field (column).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Column name.
    pub name: String,
    /// Type assigned by reflection and resolved by the dialect on
    /// registration.
    pub discovered_sql_type: SqlType,
    /// Explicit type from the model definition. Dialects never rewrite it.
    pub user_sql_type: Option<SqlType>,
    /// Whether the column is nullable.
    pub nullable: bool,
    /// Whether this is the primary key.
    pub primary_key: bool,
    /// Whether this column auto-increments.
    pub auto_increment: bool,
}

impl Field {
    /// Creates a nullable field with the given discovered type.
    #[must_use]
    pub fn new(name: impl Into<String>, discovered_sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            discovered_sql_type,
            user_sql_type: None,
            nullable: true,
            primary_key: false,
            auto_increment: false,
        }
    }

    /// Sets an explicit SQL type that overrides the discovered one in DDL.
    #[must_use]
    pub fn user_sql_type(mut self, sql_type: SqlType) -> Self {
        self.user_sql_type = Some(sql_type);
        self
    }

    /// Sets the field as NOT NULL.
    #[must_use]
    pub const fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Sets the field as PRIMARY KEY.
    #[must_use]
    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false; // Primary keys are implicitly NOT NULL
        self
    }

    /// Sets the field as auto-incrementing.
    #[must_use]
    pub const fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    /// Returns the type to declare in `CREATE TABLE`.
    #[must_use]
    pub const fn create_table_sql_type(&self) -> &SqlType {
        match &self.user_sql_type {
            Some(sql_type) => sql_type,
            None => &self.discovered_sql_type,
        }
    }
}

/// Metadata for one mapped table.
///
/// Built by reflection and handed to the dialect once through
/// [`Dialect::on_table`](crate::Dialect::on_table). Field names are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// SQL table name.
    pub name: String,
    fields: Vec<Field>,
}

impl Table {
    /// Creates a table without fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field, replacing any existing field with the same name.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        match self.field_mut(&field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    /// Returns the fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the fields for in-place mutation.
    ///
    /// Names must stay unique; only types and flags are meant to change.
    pub fn fields_mut(&mut self) -> impl Iterator<Item = &mut Field> {
        self.fields.iter_mut()
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Looks up a field by name for mutation.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Returns the primary key field, if any.
    #[must_use]
    pub fn primary_key(&self) -> Option<&Field> {
        self.fields.iter().find(|f| f.primary_key)
    }

    /// Returns the column names in declaration order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}
