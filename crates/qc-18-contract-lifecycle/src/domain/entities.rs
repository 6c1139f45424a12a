//! # Core Domain Entities
//!
//! Contract records, status values, call context and call outcomes.

use crate::domain::value_objects::{Address, Hash};
use serde::{Deserialize, Serialize};

// =============================================================================
// CONTRACT STATUS
// =============================================================================

/// Status values reported by `getStatus`.
///
/// The discriminant indexes the status description table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractStatus {
    /// Placeholder for an unset status.
    Invalid = 0,
    /// Contract exists and may be called.
    Available = 1,
    /// Contract exists but is frozen.
    Frozen = 2,
    /// No account table exists for the address.
    AddressNonExistent = 3,
    /// Address exists but is not a contract.
    NotContractAddress = 4,
}

impl ContractStatus {
    /// Number of status values (size of the description table).
    pub const COUNT: usize = 5;

    /// All values, in index order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Invalid,
        Self::Available,
        Self::Frozen,
        Self::AddressNonExistent,
        Self::NotContractAddress,
    ];

    /// Index into the description table.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Variant name, used as the default description.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Invalid => "Invalid",
            Self::Available => "Available",
            Self::Frozen => "Frozen",
            Self::AddressNonExistent => "AddressNonExistent",
            Self::NotContractAddress => "NotContractAddress",
        }
    }
}

/// The freeze axis of an existing contract.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleState {
    /// Callable.
    #[default]
    Available,
    /// Frozen by a manager.
    Frozen,
}

impl LifecycleState {
    /// Maps to the reported [`ContractStatus`].
    #[must_use]
    pub const fn status(self) -> ContractStatus {
        match self {
            Self::Available => ContractStatus::Available,
            Self::Frozen => ContractStatus::Frozen,
        }
    }
}

// =============================================================================
// AUTHORITY LIST
// =============================================================================

/// Ordered, duplicate-free list of manager addresses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorityList(Vec<Address>);

impl AuthorityList {
    /// Creates an empty (ungoverned) list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Builds a list from addresses, keeping the first occurrence of each.
    pub fn from_addresses<I: IntoIterator<Item = Address>>(addresses: I) -> Self {
        let mut list = Self::new();
        for address in addresses {
            list.push(address);
        }
        list
    }

    /// Appends `address` unless already present. Returns whether it was added.
    pub fn push(&mut self, address: Address) -> bool {
        if self.contains(&address) {
            return false;
        }
        self.0.push(address);
        true
    }

    /// Membership test.
    #[must_use]
    pub fn contains(&self, address: &Address) -> bool {
        self.0.contains(address)
    }

    /// Number of managers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no manager has been granted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Managers in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Address] {
        &self.0
    }

    /// Consumes the list.
    #[must_use]
    pub fn into_vec(self) -> Vec<Address> {
        self.0
    }
}

// =============================================================================
// CONTRACT RECORD
// =============================================================================

/// Lifecycle view of one contract's account table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractRecord {
    /// Contract address the record belongs to.
    pub address: Address,
    /// Freeze state.
    pub state: LifecycleState,
    /// Managers allowed to mutate the record.
    pub authorities: AuthorityList,
    /// False for a plain account whose table carries no code hash.
    pub is_contract: bool,
}

impl ContractRecord {
    /// Record with default state and no managers.
    #[must_use]
    pub fn new(address: Address) -> Self {
        Self {
            address,
            state: LifecycleState::Available,
            authorities: AuthorityList::new(),
            is_contract: true,
        }
    }
}

// =============================================================================
// CALL CONTEXT
// =============================================================================

/// Block metadata visible to a call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockContext {
    /// Current block hash.
    pub hash: Hash,
    /// Current block number.
    pub number: u64,
}

/// Ambient context of a precompiled call, supplied by the host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallContext {
    /// Transaction origin; the caller checked against authority lists.
    pub origin: Address,
    /// Block the call executes in.
    pub block: BlockContext,
}

impl CallContext {
    /// Creates a context.
    #[must_use]
    pub const fn new(origin: Address, block: BlockContext) -> Self {
        Self { origin, block }
    }

    /// Same block, different origin.
    #[must_use]
    pub fn with_origin(&self, origin: Address) -> Self {
        Self {
            origin,
            block: self.block.clone(),
        }
    }
}

// =============================================================================
// CALL OUTCOME
// =============================================================================

/// Optional data returned after the status code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutcomePayload {
    /// Only the code is returned.
    None,
    /// A description string.
    Text(String),
    /// A list of addresses.
    Addresses(Vec<Address>),
}

/// Result of one lifecycle operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallOutcome {
    /// Return code (see [`crate::domain::codes`]).
    pub code: i64,
    /// Trailing payload.
    pub payload: OutcomePayload,
}

impl CallOutcome {
    /// Code without payload.
    #[must_use]
    pub const fn code(code: i64) -> Self {
        Self {
            code,
            payload: OutcomePayload::None,
        }
    }

    /// Code followed by a string.
    #[must_use]
    pub fn with_text(code: i64, text: impl Into<String>) -> Self {
        Self {
            code,
            payload: OutcomePayload::Text(text.into()),
        }
    }

    /// Code followed by an address list.
    #[must_use]
    pub fn with_addresses(code: i64, addresses: Vec<Address>) -> Self {
        Self {
            code,
            payload: OutcomePayload::Addresses(addresses),
        }
    }

    /// True for non-negative codes.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code >= 0
    }
}

// =============================================================================
// TESTS
// =============================================================================
