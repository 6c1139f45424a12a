//! # Precompiled Contracts
//!
//! Native contracts sharing the bytes-in/bytes-out call interface.
//! The registry is assembled once and never mutated afterwards.

pub mod lifecycle;

use crate::domain::entities::CallContext;
use crate::domain::value_objects::{Address, Bytes};
use crate::errors::PrecompileError;
use std::collections::BTreeMap;

/// Trait for precompiled contracts.
pub trait Precompiled: Send + Sync {
    /// Execute the precompile with given input.
    ///
    /// # Arguments
    ///
    /// * `context` - Origin and block of the current call
    /// * `input` - Selector followed by ABI-encoded arguments
    ///
    /// # Returns
    ///
    /// * `Bytes` - ABI-encoded result, including declared failure codes
    ///
    /// # Errors
    ///
    /// Malformed input or storage failure; the host must abort the call.
    fn call(&self, context: &CallContext, input: &[u8]) -> Result<Bytes, PrecompileError>;

    /// Get the address of this precompile.
    fn address(&self) -> Address;

    /// Human-readable name, for logs.
    fn name(&self) -> &'static str;
}

/// Address-indexed set of precompiled contracts.
#[derive(Default)]
pub struct PrecompiledRegistry {
    contracts: BTreeMap<Address, Box<dyn Precompiled>>,
}

impl PrecompiledRegistry {
    /// Builds a registry from `contracts`. A later entry at the same address
    /// replaces an earlier one.
    #[must_use]
    pub fn new(contracts: Vec<Box<dyn Precompiled>>) -> Self {
        let contracts = contracts.into_iter().map(|c| (c.address(), c)).collect();
        Self { contracts }
    }

    /// True if `address` is bound to a precompile.
    #[must_use]
    pub fn is_precompiled(&self, address: &Address) -> bool {
        self.contracts.contains_key(address)
    }

    /// Registered addresses in ascending order.
    #[must_use]
    pub fn addresses(&self) -> Vec<Address> {
        self.contracts.keys().copied().collect()
    }

    /// Check if an address is a precompile and execute it.
    ///
    /// Returns `None` if nothing is registered at `address`.
    #[must_use]
    pub fn execute(
        &self,
        address: Address,
        context: &CallContext,
        input: &[u8],
    ) -> Option<Result<Bytes, PrecompileError>> {
        self.contracts
            .get(&address)
            .map(|contract| contract.call(context, input))
    }
}

// =============================================================================
// TESTS
// =============================================================================
