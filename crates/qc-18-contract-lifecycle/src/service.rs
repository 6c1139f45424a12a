//! # Lifecycle Service
//!
//! Runs the five lifecycle operations against table storage: read the
//! record once, ask the domain for a decision, apply at most one write.
//!
//! The service never begins or commits a transaction. All writes of a call
//! land in the host's ambient transaction and are discarded with it.

use crate::adapters::record_table::RecordTable;
use crate::config::LifecycleConfig;
use crate::domain::codes::{self, CODE_SUCCESS};
use crate::domain::entities::CallOutcome;
use crate::domain::lifecycle::{self, Decision, LifecycleOp, Transition};
use crate::domain::policy::AuthorizationPolicy;
use crate::domain::value_objects::Address;
use crate::errors::TableError;
use crate::ports::inbound::ContractLifecycleApi;
use crate::ports::outbound::TableStore;

use std::sync::Arc;
use tracing::{debug, info};

/// Lifecycle operations over a [`TableStore`].
pub struct LifecycleService<S: TableStore> {
    store: Arc<S>,
    config: LifecycleConfig,
    policy: AuthorizationPolicy,
}

impl<S: TableStore> LifecycleService<S> {
    /// Creates a service over `store`.
    pub fn new(store: Arc<S>, config: LifecycleConfig) -> Self {
        let policy = AuthorizationPolicy::new(config.zero_caller_policy);
        Self {
            store,
            config,
            policy,
        }
    }

    /// Service configuration.
    pub fn config(&self) -> &LifecycleConfig {
        &self.config
    }

    /// Underlying store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Record accessor bound to the configured table prefix.
    pub fn records(&self) -> RecordTable<'_, S> {
        RecordTable::new(self.store.as_ref(), &self.config.table_prefix)
    }

    fn mutate(
        &self,
        op: LifecycleOp,
        caller: Address,
        contract: Address,
    ) -> Result<CallOutcome, TableError> {
        let records = self.records();
        let record = records.read_record(contract)?;

        match lifecycle::decide(op, record.as_ref(), caller, &self.policy) {
            Decision::Reject(code) => {
                debug!(
                    ?op,
                    caller = %caller,
                    contract = %contract,
                    code,
                    reason = codes::describe(code),
                    "Lifecycle operation rejected"
                );
                Ok(CallOutcome::code(code))
            }
            Decision::Apply(transition) => {
                match transition {
                    Transition::SetState(state) => records.write_state(contract, state)?,
                    Transition::AppendManager(manager) => {
                        // decide() only returns Apply for an existing record.
                        let mut authorities = record
                            .map(|r| r.authorities)
                            .unwrap_or_default();
                        authorities.push(manager);
                        records.write_authorities(contract, &authorities)?;
                    }
                }
                info!(
                    ?op,
                    caller = %caller,
                    contract = %contract,
                    "Lifecycle operation applied"
                );
                Ok(CallOutcome::code(CODE_SUCCESS))
            }
        }
    }
}

impl<S: TableStore> ContractLifecycleApi for LifecycleService<S> {
    fn freeze(&self, caller: Address, contract: Address) -> Result<CallOutcome, TableError> {
        self.mutate(LifecycleOp::Freeze, caller, contract)
    }

    fn unfreeze(&self, caller: Address, contract: Address) -> Result<CallOutcome, TableError> {
        self.mutate(LifecycleOp::Unfreeze, caller, contract)
    }

    fn grant_manager(
        &self,
        caller: Address,
        contract: Address,
        manager: Address,
    ) -> Result<CallOutcome, TableError> {
        self.mutate(LifecycleOp::GrantManager(manager), caller, contract)
    }

    fn list_manager(&self, contract: Address) -> Result<CallOutcome, TableError> {
        let record = self.records().read_record(contract)?;
        Ok(lifecycle::query_managers(record.as_ref()))
    }

    fn get_status(&self, contract: Address) -> Result<CallOutcome, TableError> {
        let record = self.records().read_record(contract)?;
        Ok(lifecycle::query_status(
            record.as_ref(),
            &self.config.status_descriptions,
        ))
    }
}

// =============================================================================
// TESTS
// =============================================================================
