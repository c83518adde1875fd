//! Registry of reflected tables.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use super::Table;

/// Table metadata cache owned by a dialect.
///
/// Tables are registered once and never removed. The first registration of
/// a name wins; later registrations of the same name return the stored
/// table without running the hook again.
#[derive(Debug, Default)]
pub struct Tables {
    tables: RwLock<HashMap<String, Arc<Table>>>,
}

impl Tables {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `table`, running `on_table` on it first.
    ///
    /// Returns the stored table, which is the previously registered one if
    /// the name was already known.
    pub fn register_with<F>(&self, mut table: Table, on_table: F) -> Arc<Table>
    where
        F: FnOnce(&mut Table),
    {
        if let Some(existing) = self.get(&table.name) {
            return existing;
        }

        on_table(&mut table);

        let mut tables = self.tables.write();
        // Another caller may have registered the name while the hook ran.
        let stored = tables
            .entry(table.name.clone())
            .or_insert_with(|| {
                debug!(
                    table = %table.name,
                    fields = table.fields().len(),
                    "registered table"
                );
                Arc::new(table)
            });
        Arc::clone(stored)
    }

    /// Returns the table registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<Table>> {
        self.tables.read().get(name).cloned()
    }

    /// Returns whether a table named `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tables.read().contains_key(name)
    }

    /// Returns the registered table names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tables.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns the number of registered tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.read().len()
    }

    /// Returns whether no table is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.read().is_empty()
    }
}
