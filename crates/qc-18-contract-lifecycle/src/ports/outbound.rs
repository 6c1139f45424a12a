//! # Driven Ports (SPI - Outbound)
//!
//! The table storage collaborator. The host's transactional key-value engine
//! implements this trait; the precompile never begins or commits a
//! transaction and assumes one ambient transaction per call.

use crate::errors::TableError;

/// Per-contract key-value table storage.
///
/// Every field value is an opaque string. The lifecycle layer defines the
/// encoding of the fields it owns and must parse exactly what it writes.
pub trait TableStore: Send + Sync {
    /// True if a table named `table` exists.
    ///
    /// # Errors
    ///
    /// [`TableError::LockPoisoned`] or another storage failure.
    fn table_exists(&self, table: &str) -> Result<bool, TableError>;

    /// Creates an empty table.
    ///
    /// # Errors
    ///
    /// [`TableError::TableExists`] if it is already present.
    fn create_table(&self, table: &str) -> Result<(), TableError>;

    /// Reads one field.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - table exists but the key has no value, or the table is absent
    ///
    /// # Errors
    ///
    /// [`TableError::LockPoisoned`] or another storage failure.
    fn get_field(&self, table: &str, key: &str) -> Result<Option<String>, TableError>;

    /// Writes one field, replacing any previous value.
    ///
    /// # Errors
    ///
    /// [`TableError::TableNotFound`] if the table does not exist.
    fn set_field(&self, table: &str, key: &str, value: &str) -> Result<(), TableError>;
}
