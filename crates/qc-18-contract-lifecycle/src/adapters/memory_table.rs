//! # In-Memory Table Store
//!
//! `TableStore` implementation for tests and local tooling. The production
//! store is the host's transactional engine.

use crate::errors::TableError;
use crate::ports::outbound::TableStore;
use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

type Tables = HashMap<String, BTreeMap<String, String>>;

/// Point-in-time copy of every table, for emulating host rollback.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableSnapshot(Tables);

/// In-memory implementation of `TableStore`.
#[derive(Debug, Default)]
pub struct InMemoryTableStore {
    tables: RwLock<Tables>,
}

impl InMemoryTableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tables.
    ///
    /// # Errors
    ///
    /// [`TableError::LockPoisoned`].
    pub fn table_count(&self) -> Result<usize, TableError> {
        let tables = self.tables.read().map_err(|_| TableError::LockPoisoned)?;
        Ok(tables.len())
    }

    /// Copies the current contents.
    ///
    /// # Errors
    ///
    /// [`TableError::LockPoisoned`].
    pub fn snapshot(&self) -> Result<TableSnapshot, TableError> {
        let tables = self.tables.read().map_err(|_| TableError::LockPoisoned)?;
        Ok(TableSnapshot(tables.clone()))
    }

    /// Discards every write made since `snapshot` was taken.
    ///
    /// # Errors
    ///
    /// [`TableError::LockPoisoned`].
    pub fn restore(&self, snapshot: TableSnapshot) -> Result<(), TableError> {
        let mut tables = self.tables.write().map_err(|_| TableError::LockPoisoned)?;
        *tables = snapshot.0;
        Ok(())
    }
}

impl TableStore for InMemoryTableStore {
    fn table_exists(&self, table: &str) -> Result<bool, TableError> {
        let tables = self.tables.read().map_err(|_| TableError::LockPoisoned)?;
        Ok(tables.contains_key(table))
    }

    fn create_table(&self, table: &str) -> Result<(), TableError> {
        let mut tables = self.tables.write().map_err(|_| TableError::LockPoisoned)?;
        if tables.contains_key(table) {
            return Err(TableError::TableExists(table.to_string()));
        }
        tables.insert(table.to_string(), BTreeMap::new());
        Ok(())
    }

    fn get_field(&self, table: &str, key: &str) -> Result<Option<String>, TableError> {
        let tables = self.tables.read().map_err(|_| TableError::LockPoisoned)?;
        Ok(tables.get(table).and_then(|rows| rows.get(key)).cloned())
    }

    fn set_field(&self, table: &str, key: &str, value: &str) -> Result<(), TableError> {
        let mut tables = self.tables.write().map_err(|_| TableError::LockPoisoned)?;
        let rows = tables
            .get_mut(table)
            .ok_or_else(|| TableError::TableNotFound(table.to_string()))?;
        rows.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
