//! SQL Dialect support.
//!
//! Different databases have slightly different SQL syntax. The ORM core
//! builds SQL abstractly and asks the [`Dialect`] for every engine-specific
//! decision: which optional clauses are legal, how identifiers are quoted,
//! how literals are written and which column type a field declares.

use std::sync::Arc;

use crate::feature::Feature;
use crate::literal;
use crate::name::Name;
use crate::schema::{Table, Tables};

/// Trait for SQL dialect-specific behavior.
///
/// One dialect value lives for the whole process. Everything except
/// [`on_table`](Self::on_table) is read-only, so a dialect can be shared
/// between threads without locking.
pub trait Dialect: Send + Sync {
    /// Driver handle passed to [`init`](Self::init).
    type Connection: ?Sized;

    /// Performs per-connection engine setup. Called once at startup.
    fn init(&self, conn: &Self::Connection);

    /// Returns the engine identifier.
    fn name(&self) -> Name;

    /// Returns the optional SQL capabilities of this engine.
    fn features(&self) -> Feature;

    /// Returns the table registry owned by this dialect.
    fn tables(&self) -> &Tables;

    /// Adjusts freshly reflected table metadata to this engine.
    ///
    /// Called once per table before any SQL references its columns. Must be
    /// idempotent.
    fn on_table(&self, table: &mut Table);

    /// Returns the identifier quote character (e.g., `"` for standard SQL, `` ` `` for MySQL).
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Appends a binary literal, or NULL when `bytes` is `None`.
    ///
    /// `Some(&[])` is an empty blob, not NULL.
    fn append_bytes(&self, buf: &mut String, bytes: Option<&[u8]>);

    /// Appends the NULL literal.
    fn append_null(&self, buf: &mut String) {
        literal::append_null(buf);
    }

    /// Appends a boolean literal.
    fn append_bool(&self, buf: &mut String, value: bool) {
        buf.push_str(if value { "TRUE" } else { "FALSE" });
    }

    /// Appends a single-quoted string literal.
    fn append_string(&self, buf: &mut String, s: &str) {
        literal::append_quoted(buf, s, '\'');
    }

    /// Appends a quoted identifier.
    fn append_ident(&self, buf: &mut String, ident: &str) {
        literal::append_quoted(buf, ident, self.identifier_quote());
    }

    /// Quotes an identifier.
    fn quote_identifier(&self, name: &str) -> String {
        let mut buf = String::with_capacity(name.len() + 2);
        self.append_ident(&mut buf, name);
        buf
    }

    /// Runs [`on_table`](Self::on_table) on `table` and stores it in
    /// [`tables`](Self::tables).
    ///
    /// A name that is already registered keeps its stored metadata.
    fn register_table(&self, table: Table) -> Arc<Table> {
        self.tables().register_with(table, |t| self.on_table(t))
    }
}
