//! # Lifecycle State Machine
//!
//! Pure transition rules. No I/O: callers read the record, ask for a
//! [`Decision`], and apply the returned [`Transition`] themselves.
//!
//! ```text
//!   NonExistent         (no transitions)
//!   NotContractAddress  (no transitions)
//!
//!   Available --freeze--> Frozen
//!   Frozen  --unfreeze--> Available
//!
//!   authorities --grantManager--> authorities ++ [m]   (either state)
//! ```
//!
//! Checks run in a fixed order (exists, holds code, authorized, state) and
//! the first failure decides the code.

use crate::domain::codes::{
    CODE_INVALID_CONTRACT_ADDRESS, CODE_INVALID_CONTRACT_AVAILABLE, CODE_INVALID_CONTRACT_FROZEN,
    CODE_INVALID_CONTRACT_REPEAT_AUTHORIZATION, CODE_INVALID_NO_AUTHORIZED,
    CODE_INVALID_TABLE_NOT_EXIST, CODE_QUERY_OK,
};
use crate::domain::entities::{CallOutcome, ContractRecord, ContractStatus, LifecycleState};
use crate::domain::policy::AuthorizationPolicy;
use crate::domain::value_objects::Address;

/// A mutating lifecycle request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleOp {
    /// Available -> Frozen.
    Freeze,
    /// Frozen -> Available.
    Unfreeze,
    /// Append a manager.
    GrantManager(Address),
}

/// A single write to apply to the record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Overwrite the freeze state.
    SetState(LifecycleState),
    /// Append a manager to the authority list.
    AppendManager(Address),
}

/// Result of evaluating a [`LifecycleOp`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// All checks passed.
    Apply(Transition),
    /// A check failed with this code. Nothing may be written.
    Reject(i64),
}

/// Evaluates `op` requested by `caller` against `record`.
#[must_use]
pub fn decide(
    op: LifecycleOp,
    record: Option<&ContractRecord>,
    caller: Address,
    policy: &AuthorizationPolicy,
) -> Decision {
    let Some(record) = record else {
        return Decision::Reject(CODE_INVALID_TABLE_NOT_EXIST);
    };

    if !record.is_contract {
        return Decision::Reject(CODE_INVALID_CONTRACT_ADDRESS);
    }

    if !policy.is_authorized(record, caller) {
        return Decision::Reject(CODE_INVALID_NO_AUTHORIZED);
    }

    match op {
        LifecycleOp::Freeze => match record.state {
            LifecycleState::Available => {
                Decision::Apply(Transition::SetState(LifecycleState::Frozen))
            }
            LifecycleState::Frozen => Decision::Reject(CODE_INVALID_CONTRACT_FROZEN),
        },
        LifecycleOp::Unfreeze => match record.state {
            LifecycleState::Frozen => {
                Decision::Apply(Transition::SetState(LifecycleState::Available))
            }
            LifecycleState::Available => Decision::Reject(CODE_INVALID_CONTRACT_AVAILABLE),
        },
        LifecycleOp::GrantManager(manager) => {
            if record.authorities.contains(&manager) {
                Decision::Reject(CODE_INVALID_CONTRACT_REPEAT_AUTHORIZATION)
            } else {
                Decision::Apply(Transition::AppendManager(manager))
            }
        }
    }
}

/// Status reported for `record`; `AddressNonExistent` when absent.
#[must_use]
pub fn status_of(record: Option<&ContractRecord>) -> ContractStatus {
    match record {
        None => ContractStatus::AddressNonExistent,
        Some(r) if !r.is_contract => ContractStatus::NotContractAddress,
        Some(r) => r.state.status(),
    }
}

/// Query code for `record`: ok for a contract, otherwise the reason it has
/// no lifecycle.
fn query_code(record: Option<&ContractRecord>) -> i64 {
    match record {
        None => CODE_INVALID_TABLE_NOT_EXIST,
        Some(r) if !r.is_contract => CODE_INVALID_CONTRACT_ADDRESS,
        Some(_) => CODE_QUERY_OK,
    }
}

/// `getStatus` outcome: code plus the description of the status.
#[must_use]
pub fn query_status(record: Option<&ContractRecord>, descriptions: &[String]) -> CallOutcome {
    let status = status_of(record);
    let code = query_code(record);
    let text = descriptions
        .get(status.index())
        .cloned()
        .unwrap_or_else(|| status.name().to_string());
    CallOutcome::with_text(code, text)
}

/// `listManager` outcome: code plus the managers in grant order.
#[must_use]
pub fn query_managers(record: Option<&ContractRecord>) -> CallOutcome {
    match record {
        Some(r) if r.is_contract => {
            CallOutcome::with_addresses(CODE_QUERY_OK, r.authorities.as_slice().to_vec())
        }
        _ => CallOutcome::with_addresses(query_code(record), Vec::new()),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AuthorityList, OutcomePayload};

    const MANAGER: Address = Address([0x11; 20]);
    const STRANGER: Address = Address([0x22; 20]);

    fn governed(state: LifecycleState) -> ContractRecord {
        ContractRecord {
            address: Address([0xc0; 20]),
            state,
            authorities: AuthorityList::from_addresses([MANAGER]),
            is_contract: true,
        }
    }

    fn plain_account() -> ContractRecord {
        ContractRecord {
            is_contract: false,
            ..governed(LifecycleState::Available)
        }
    }

    fn descriptions() -> Vec<String> {
        ContractStatus::ALL
            .iter()
            .map(|s| s.name().to_string())
            .collect()
    }

    #[test]
    fn test_nonexistent_rejected_before_authorization() {
        let policy = AuthorizationPolicy::default();
        for op in [
            LifecycleOp::Freeze,
            LifecycleOp::Unfreeze,
            LifecycleOp::GrantManager(STRANGER),
        ] {
            assert_eq!(
                decide(op, None, MANAGER, &policy),
                Decision::Reject(CODE_INVALID_TABLE_NOT_EXIST)
            );
        }
    }

    #[test]
    fn test_plain_account_rejected_before_authorization() {
        let policy = AuthorizationPolicy::default();
        let record = plain_account();
        for op in [
            LifecycleOp::Freeze,
            LifecycleOp::Unfreeze,
            LifecycleOp::GrantManager(STRANGER),
        ] {
            // MANAGER is listed, yet the account holds no code.
            assert_eq!(
                decide(op, Some(&record), MANAGER, &policy),
                Decision::Reject(CODE_INVALID_CONTRACT_ADDRESS)
            );
        }
    }

    #[test]
    fn test_plain_account_queries() {
        let record = plain_account();
        assert_eq!(
            query_status(Some(&record), &descriptions()),
            CallOutcome::with_text(CODE_INVALID_CONTRACT_ADDRESS, "NotContractAddress")
        );
        assert_eq!(
            query_managers(Some(&record)),
            CallOutcome::with_addresses(CODE_INVALID_CONTRACT_ADDRESS, Vec::new())
        );
    }

    #[test]
    fn test_unauthorized_checked_before_state() {
        let policy = AuthorizationPolicy::default();
        let frozen = governed(LifecycleState::Frozen);
        // Would also be "already frozen", but authorization comes first.
        assert_eq!(
            decide(LifecycleOp::Freeze, Some(&frozen), STRANGER, &policy),
            Decision::Reject(CODE_INVALID_NO_AUTHORIZED)
        );
    }

    #[test]
    fn test_ungoverned_record_rejects_all_mutations() {
        let policy = AuthorizationPolicy::default();
        let record = ContractRecord::new(Address([0xc0; 20]));
        for caller in [Address::ZERO, MANAGER, STRANGER] {
            for op in [
                LifecycleOp::Freeze,
                LifecycleOp::Unfreeze,
                LifecycleOp::GrantManager(caller),
            ] {
                assert_eq!(
                    decide(op, Some(&record), caller, &policy),
                    Decision::Reject(CODE_INVALID_NO_AUTHORIZED)
                );
            }
        }
    }

    #[test]
    fn test_freeze_transitions() {
        let policy = AuthorizationPolicy::default();
        assert_eq!(
            decide(
                LifecycleOp::Freeze,
                Some(&governed(LifecycleState::Available)),
                MANAGER,
                &policy
            ),
            Decision::Apply(Transition::SetState(LifecycleState::Frozen))
        );
        assert_eq!(
            decide(
                LifecycleOp::Freeze,
                Some(&governed(LifecycleState::Frozen)),
                MANAGER,
                &policy
            ),
            Decision::Reject(CODE_INVALID_CONTRACT_FROZEN)
        );
    }

    #[test]
    fn test_unfreeze_transitions() {
        let policy = AuthorizationPolicy::default();
        assert_eq!(
            decide(
                LifecycleOp::Unfreeze,
                Some(&governed(LifecycleState::Frozen)),
                MANAGER,
                &policy
            ),
            Decision::Apply(Transition::SetState(LifecycleState::Available))
        );
        assert_eq!(
            decide(
                LifecycleOp::Unfreeze,
                Some(&governed(LifecycleState::Available)),
                MANAGER,
                &policy
            ),
            Decision::Reject(CODE_INVALID_CONTRACT_AVAILABLE)
        );
    }

    #[test]
    fn test_grant_manager_independent_of_state() {
        let policy = AuthorizationPolicy::default();
        for state in [LifecycleState::Available, LifecycleState::Frozen] {
            let record = governed(state);
            assert_eq!(
                decide(LifecycleOp::GrantManager(STRANGER), Some(&record), MANAGER, &policy),
                Decision::Apply(Transition::AppendManager(STRANGER))
            );
            assert_eq!(
                decide(LifecycleOp::GrantManager(MANAGER), Some(&record), MANAGER, &policy),
                Decision::Reject(CODE_INVALID_CONTRACT_REPEAT_AUTHORIZATION)
            );
        }
    }

    #[test]
    fn test_query_status() {
        let table = descriptions();
        let outcome = query_status(Some(&governed(LifecycleState::Frozen)), &table);
        assert_eq!(outcome, CallOutcome::with_text(CODE_QUERY_OK, "Frozen"));

        let missing = query_status(None, &table);
        assert_eq!(
            missing,
            CallOutcome::with_text(CODE_INVALID_TABLE_NOT_EXIST, "AddressNonExistent")
        );
    }

    #[test]
    fn test_query_status_uses_configured_text() {
        let mut table = descriptions();
        table[ContractStatus::Available.index()] = "The contract is available.".to_string();
        let outcome = query_status(Some(&governed(LifecycleState::Available)), &table);
        assert_eq!(outcome.payload, OutcomePayload::Text(table[1].clone()));
    }

    #[test]
    fn test_query_managers() {
        let outcome = query_managers(Some(&governed(LifecycleState::Available)));
        assert_eq!(outcome, CallOutcome::with_addresses(CODE_QUERY_OK, vec![MANAGER]));

        let missing = query_managers(None);
        assert_eq!(missing.code, CODE_INVALID_TABLE_NOT_EXIST);
        assert_eq!(missing.payload, OutcomePayload::Addresses(Vec::new()));
    }
}
