//! # Driving Ports (API - Inbound)
//!
//! Typed entry points of the lifecycle state machine. The precompiled
//! dispatcher is one caller; hosts embedding the service may call it
//! directly.

use crate::domain::entities::CallOutcome;
use crate::domain::value_objects::Address;
use crate::errors::TableError;

/// The five lifecycle operations.
///
/// Business failures are reported in [`CallOutcome::code`]; `Err` is only
/// returned when the storage collaborator fails.
pub trait ContractLifecycleApi: Send + Sync {
    /// Available -> Frozen.
    ///
    /// # Errors
    ///
    /// Storage failures.
    fn freeze(&self, caller: Address, contract: Address) -> Result<CallOutcome, TableError>;

    /// Frozen -> Available.
    ///
    /// # Errors
    ///
    /// Storage failures.
    fn unfreeze(&self, caller: Address, contract: Address) -> Result<CallOutcome, TableError>;

    /// Appends `manager` to the authority list.
    ///
    /// # Errors
    ///
    /// Storage failures.
    fn grant_manager(
        &self,
        caller: Address,
        contract: Address,
        manager: Address,
    ) -> Result<CallOutcome, TableError>;

    /// Returns the authority list in grant order.
    ///
    /// # Errors
    ///
    /// Storage failures.
    fn list_manager(&self, contract: Address) -> Result<CallOutcome, TableError>;

    /// Returns the status description.
    ///
    /// # Errors
    ///
    /// Storage failures.
    fn get_status(&self, contract: Address) -> Result<CallOutcome, TableError>;
}
