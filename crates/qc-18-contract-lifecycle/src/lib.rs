//! # QC-18 Contract Lifecycle - Precompiled Lifecycle Management
//!
//! **Subsystem ID:** 18
//! **Status:** Production-Ready
//!
//! ## Purpose
//!
//! A native (precompiled) contract that freezes, unfreezes and delegates
//! management of *other* deployed contracts by mutating fields of their
//! account tables. Called like any contract: selector + ABI arguments in,
//! ABI result out.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Freeze only from Available, unfreeze only from Frozen | `domain/lifecycle.rs` - `decide()` |
//! | INVARIANT-2 | Every mutation requires a listed manager | `domain/policy.rs` - `is_authorized()` |
//! | INVARIANT-3 | Authority list is append-only and duplicate-free | `domain/entities.rs` - `AuthorityList::push()` |
//! | INVARIANT-4 | Missing account table is reported distinctly | `adapters/record_table.rs` - `read_record()` |
//! | INVARIANT-5 | At most one write per call, none after a failed check | `service.rs` - `mutate()` |
//! | INVARIANT-6 | Accounts without code are never governed | `domain/lifecycle.rs` - `decide()` |
//!
//! ## Return Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | `1` | Mutation applied |
//! | `0` | Query succeeded |
//! | `-51900` | Contract already frozen |
//! | `-51901` | Contract already available |
//! | `-51902` | Manager already granted |
//! | `-51903` | Account holds no code |
//! | `-51904` | Account table does not exist |
//! | `-51905` | Caller not authorized |
//!
//! Malformed input (short selector, unknown selector, bad ABI) is a
//! [`errors::PrecompileError`], never a return code.
//!
//! ## Outbound Dependencies
//!
//! | Collaborator | Trait | Purpose |
//! |--------------|-------|---------|
//! | Table storage | `TableStore` | Read/write account table fields |
//!
//! ## Usage Example
//!
//! ```ignore
//! use qc_18_contract_lifecycle::prelude::*;
//!
//! let store = Arc::new(InMemoryTableStore::new());
//! let precompile = ContractLifeCyclePrecompiled::new(store, LifecycleConfig::default());
//!
//! let input = encode_call("freeze(address)", &[AbiValue::Address(contract)]);
//! let output = precompile.call(&context, input.as_slice())?;
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]

// =============================================================================
// MODULES
// =============================================================================

pub mod abi;
pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod precompiled;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain
    pub use crate::domain::codes::*;
    pub use crate::domain::entities::{
        AuthorityList, BlockContext, CallContext, CallOutcome, ContractRecord, ContractStatus,
        LifecycleState, OutcomePayload,
    };
    pub use crate::domain::policy::{AuthorizationPolicy, ZeroCallerPolicy};
    pub use crate::domain::value_objects::{Address, Bytes, Hash, U256};

    // Codec
    pub use crate::abi::{
        decode, encode, encode_call, function_selector, AbiValue, ParamType, Selector,
    };

    // Ports
    pub use crate::ports::inbound::ContractLifecycleApi;
    pub use crate::ports::outbound::TableStore;

    // Adapters
    pub use crate::adapters::{InMemoryTableStore, RecordTable, TableSnapshot};

    // Precompiled
    pub use crate::precompiled::lifecycle::{ContractLifeCyclePrecompiled, LifecycleMethod};
    pub use crate::precompiled::{Precompiled, PrecompiledRegistry};

    // Service and config
    pub use crate::config::LifecycleConfig;
    pub use crate::service::LifecycleService;

    // Errors
    pub use crate::errors::{AbiError, ConfigError, PrecompileError, TableError};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 18;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Contract Lifecycle";

// =============================================================================
// TESTS
// =============================================================================
