//! # Authorization Policy
//!
//! Decides whether a caller may mutate a contract's lifecycle state.
//! Evaluated against the record read in the current call; nothing is cached.

use crate::domain::entities::ContractRecord;
use crate::domain::value_objects::Address;
use serde::{Deserialize, Serialize};

/// How the all-zero caller address is treated.
///
/// Hosts that do not authenticate a caller report the zero address as the
/// origin. Which of these the zero address means is a deployment decision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroCallerPolicy {
    /// The zero address is an ordinary address. It is authorized only once
    /// it has been explicitly granted as a manager.
    #[default]
    Ordinary,
    /// A zero caller is unauthenticated and never authorized, even if listed.
    Deny,
}

/// Membership-based authorization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthorizationPolicy {
    zero_caller: ZeroCallerPolicy,
}

impl AuthorizationPolicy {
    /// Creates a policy.
    #[must_use]
    pub const fn new(zero_caller: ZeroCallerPolicy) -> Self {
        Self { zero_caller }
    }

    /// True iff `caller` is a manager of `record`.
    #[must_use]
    pub fn is_authorized(&self, record: &ContractRecord, caller: Address) -> bool {
        if caller.is_zero() && self.zero_caller == ZeroCallerPolicy::Deny {
            return false;
        }
        record.authorities.contains(&caller)
    }
}
