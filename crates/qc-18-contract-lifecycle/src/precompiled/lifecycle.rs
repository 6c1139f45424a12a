//! # Contract Lifecycle Precompile
//!
//! Dispatcher for the lifecycle interface:
//!
//! | Signature | Result |
//! |-----------|--------|
//! | `freeze(address)` | `(int256)` |
//! | `unfreeze(address)` | `(int256)` |
//! | `grantManager(address,address)` | `(int256)` |
//! | `getStatus(address)` | `(int256,string)` |
//! | `listManager(address)` | `(int256,address[])` |
//!
//! Declared failures are returned as ordinary results. Only malformed input
//! and storage failures surface as `Err`.

use super::Precompiled;
use crate::abi::{self, split_selector, AbiValue, ParamType, Selector};
use crate::config::LifecycleConfig;
use crate::domain::entities::{CallContext, CallOutcome, OutcomePayload};
use crate::domain::value_objects::{Address, Bytes};
use crate::errors::PrecompileError;
use crate::ports::inbound::ContractLifecycleApi;
use crate::ports::outbound::TableStore;
use crate::service::LifecycleService;

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Methods exposed by the precompile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleMethod {
    /// `freeze(address)`
    Freeze,
    /// `unfreeze(address)`
    Unfreeze,
    /// `grantManager(address,address)`
    GrantManager,
    /// `listManager(address)`
    ListManager,
    /// `getStatus(address)`
    GetStatus,
}

impl LifecycleMethod {
    /// Every method.
    pub const ALL: [Self; 5] = [
        Self::Freeze,
        Self::Unfreeze,
        Self::GrantManager,
        Self::ListManager,
        Self::GetStatus,
    ];

    /// Function name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Freeze => "freeze",
            Self::Unfreeze => "unfreeze",
            Self::GrantManager => "grantManager",
            Self::ListManager => "listManager",
            Self::GetStatus => "getStatus",
        }
    }

    /// Argument shape.
    #[must_use]
    pub const fn params(self) -> &'static [ParamType] {
        match self {
            Self::GrantManager => &[ParamType::Address, ParamType::Address],
            _ => &[ParamType::Address],
        }
    }

    /// Result shape.
    #[must_use]
    pub const fn returns(self) -> &'static [ParamType] {
        match self {
            Self::Freeze | Self::Unfreeze | Self::GrantManager => &[ParamType::Int256],
            Self::GetStatus => &[ParamType::Int256, ParamType::String],
            Self::ListManager => &[ParamType::Int256, ParamType::AddressArray],
        }
    }

    /// Canonical signature, e.g. `"freeze(address)"`.
    #[must_use]
    pub fn signature(self) -> String {
        abi::signature(self.name(), self.params())
    }

    /// Selector of [`Self::signature`].
    #[must_use]
    pub fn selector(self) -> Selector {
        abi::function_selector(&self.signature())
    }
}

/// The lifecycle precompiled contract.
pub struct ContractLifeCyclePrecompiled<S: TableStore> {
    service: LifecycleService<S>,
    selectors: HashMap<Selector, LifecycleMethod>,
}

impl<S: TableStore> ContractLifeCyclePrecompiled<S> {
    /// Creates the precompile over `store`.
    pub fn new(store: Arc<S>, config: LifecycleConfig) -> Self {
        Self::from_service(LifecycleService::new(store, config))
    }

    /// Wraps an existing service.
    pub fn from_service(service: LifecycleService<S>) -> Self {
        let selectors = LifecycleMethod::ALL
            .iter()
            .map(|method| (method.selector(), *method))
            .collect();
        Self { service, selectors }
    }

    /// The service behind the dispatcher.
    pub fn service(&self) -> &LifecycleService<S> {
        &self.service
    }

    /// Method bound to `selector`.
    #[must_use]
    pub fn method_for(&self, selector: &Selector) -> Option<LifecycleMethod> {
        self.selectors.get(selector).copied()
    }

    fn dispatch(
        &self,
        method: LifecycleMethod,
        caller: Address,
        args: &[AbiValue],
    ) -> Result<CallOutcome, PrecompileError> {
        let outcome = match (method, args) {
            (LifecycleMethod::Freeze, [AbiValue::Address(contract)]) => {
                self.service.freeze(caller, *contract)?
            }
            (LifecycleMethod::Unfreeze, [AbiValue::Address(contract)]) => {
                self.service.unfreeze(caller, *contract)?
            }
            (
                LifecycleMethod::GrantManager,
                [AbiValue::Address(contract), AbiValue::Address(manager)],
            ) => self.service.grant_manager(caller, *contract, *manager)?,
            (LifecycleMethod::ListManager, [AbiValue::Address(contract)]) => {
                self.service.list_manager(*contract)?
            }
            (LifecycleMethod::GetStatus, [AbiValue::Address(contract)]) => {
                self.service.get_status(*contract)?
            }
            _ => return Err(PrecompileError::ArgumentMismatch(method.name())),
        };
        Ok(outcome)
    }
}

/// ABI values of an outcome: the code, then the payload if any.
#[must_use]
pub fn outcome_values(outcome: CallOutcome) -> Vec<AbiValue> {
    let mut values = vec![AbiValue::Int(outcome.code)];
    match outcome.payload {
        OutcomePayload::None => {}
        OutcomePayload::Text(text) => values.push(AbiValue::String(text)),
        OutcomePayload::Addresses(list) => values.push(AbiValue::AddressArray(list)),
    }
    values
}

impl<S: TableStore> Precompiled for ContractLifeCyclePrecompiled<S> {
    #[instrument(
        skip(self, context, input),
        fields(origin = %context.origin, block = context.block.number)
    )]
    fn call(&self, context: &CallContext, input: &[u8]) -> Result<Bytes, PrecompileError> {
        let Some((selector, args)) = split_selector(input) else {
            warn!(len = input.len(), "Call input shorter than selector");
            return Err(PrecompileError::InputTooShort {
                actual: input.len(),
            });
        };

        let Some(method) = self.method_for(&selector) else {
            warn!(selector = %hex::encode(selector), "Unknown selector");
            return Err(PrecompileError::UnknownSelector(selector));
        };

        let values = abi::decode(method.params(), args).map_err(|err| {
            warn!(method = method.name(), error = %err, "Malformed arguments");
            err
        })?;

        let outcome = self.dispatch(method, context.origin, &values)?;
        debug!(method = method.name(), code = outcome.code, "Call completed");

        Ok(abi::encode(&outcome_values(outcome)))
    }

    fn address(&self) -> Address {
        self.service.config().precompile_address
    }

    fn name(&self) -> &'static str {
        "ContractLifeCycle"
    }
}

// =============================================================================
// TESTS
// =============================================================================
