//! Optional SQL capabilities.
//!
//! Every dialect advertises a fixed [`Feature`] set. The query builder asks
//! `dialect.features().contains(Feature::RETURNING)` instead of branching on
//! the engine, so adding a dialect never touches builder code.

use bitflags::bitflags;

bitflags! {
    /// Set of optional SQL constructs a dialect accepts.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Feature: u32 {
        /// `WITH name AS (...)` common table expressions.
        const CTE = 1;
        /// `WITH name (cols) AS (VALUES ...)`.
        const WITH_VALUES = 1 << 1;
        /// `RETURNING` on INSERT, UPDATE and DELETE.
        const RETURNING = 1 << 2;
        /// `RETURNING` on INSERT only.
        const INSERT_RETURNING = 1 << 3;
        /// `RETURNING` on DELETE only.
        const DELETE_RETURNING = 1 << 4;
        /// SQL Server `OUTPUT` clause.
        const OUTPUT = 1 << 5;
        /// `DEFAULT` as a value placeholder in VALUES lists.
        const DEFAULT_PLACEHOLDER = 1 << 6;
        /// `expr::type` casts.
        const DOUBLE_COLON_CAST = 1 << 7;
        /// `VALUES ROW(...)` row constructors.
        const VALUES_ROW = 1 << 8;
        /// `UPDATE a, b SET ...`.
        const UPDATE_MULTI_TABLE = 1 << 9;
        /// `INSERT INTO table AS alias`.
        const INSERT_TABLE_ALIAS = 1 << 10;
        /// `UPDATE table AS alias`.
        const UPDATE_TABLE_ALIAS = 1 << 11;
        /// `DELETE FROM table AS alias`.
        const DELETE_TABLE_ALIAS = 1 << 12;
        /// `AUTO_INCREMENT` column attribute.
        const AUTO_INCREMENT = 1 << 13;
        /// `IDENTITY` column attribute.
        const IDENTITY = 1 << 14;
        /// `DROP TABLE ... CASCADE`.
        const TABLE_CASCADE = 1 << 15;
        /// `TRUNCATE ... RESTART IDENTITY`.
        const TABLE_IDENTITY = 1 << 16;
        /// `TRUNCATE TABLE`.
        const TABLE_TRUNCATE = 1 << 17;
        /// `INSERT ... ON CONFLICT` upserts.
        const INSERT_ON_CONFLICT = 1 << 18;
        /// `INSERT ... ON DUPLICATE KEY UPDATE`.
        const INSERT_ON_DUPLICATE_KEY = 1 << 19;
        /// `INSERT IGNORE`.
        const INSERT_IGNORE = 1 << 20;
        /// `CREATE TABLE IF NOT EXISTS`.
        const TABLE_NOT_EXISTS = 1 << 21;
        /// `OFFSET ... FETCH NEXT ... ROWS ONLY`.
        const OFFSET_FETCH = 1 << 22;
        /// `SELECT EXISTS (...)`.
        const SELECT_EXISTS = 1 << 23;
        /// `UPDATE ... FROM other_table`.
        const UPDATE_FROM_TABLE = 1 << 24;
    }
}

impl Feature {
    /// Returns the names of the flags set in `self`, in declaration order.
    ///
    /// Used for log output; the names match the constant names.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }
}
