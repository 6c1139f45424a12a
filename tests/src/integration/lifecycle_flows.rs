//! # Lifecycle Integration Flows
//!
//! Drives the lifecycle precompile end to end through its binary call
//! interface: ABI-encoded input in, ABI-encoded output decoded and checked.
//!
//! ## Flows Tested:
//!
//! 1. **Reference scenario**: ungoverned contract, bootstrap manager, freeze/unfreeze, grant, list
//! 2. **Non-existent contracts**: every method reports the missing-table code
//! 3. **Plain accounts**: an account without code is never governed
//! 4. **Host rollback**: writes of an aborted call are discarded by the store
//! 5. **Registry routing**: calls reach the precompile through its fixed address

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use qc_18_contract_lifecycle::adapters::record_table::{ACCOUNT_AUTHORITY, ACCOUNT_CODE_HASH};
    use qc_18_contract_lifecycle::prelude::*;
    use tracing_subscriber::EnvFilter;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    type Lifecycle = ContractLifeCyclePrecompiled<InMemoryTableStore>;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn contract_address() -> Address {
        Address::from_hex("0xa4adafef4c989e17675479565b9abb5821d81f2c").unwrap()
    }

    fn block_context() -> CallContext {
        CallContext::new(
            Address::ZERO,
            BlockContext {
                hash: Hash::ZERO,
                number: 0,
            },
        )
    }

    /// Precompile with one deployed, ungoverned contract.
    fn deployed_fixture() -> (Arc<InMemoryTableStore>, Lifecycle) {
        init_tracing();
        let store = Arc::new(InMemoryTableStore::new());
        let precompile = Lifecycle::new(store.clone(), LifecycleConfig::default());
        precompile
            .service()
            .records()
            .initialize_account(contract_address(), Hash::new([0x12; 32]))
            .unwrap();
        (store, precompile)
    }

    fn call(p: &Lifecycle, ctx: &CallContext, signature: &str, args: &[AbiValue]) -> Bytes {
        let input = encode_call(signature, args);
        p.call(ctx, input.as_slice()).unwrap()
    }

    fn code_of(out: &Bytes) -> i64 {
        decode(&[ParamType::Int256], out.as_slice()).unwrap()[0]
            .as_int()
            .unwrap()
    }

    // =============================================================================
    // INTEGRATION TESTS
    // =============================================================================

    #[test]
    fn test_reference_lifecycle_scenario() {
        let (store, p) = deployed_fixture();
        let ctx = block_context();
        let contract = AbiValue::Address(contract_address());

        // Ungoverned: nobody may freeze.
        let out = call(&p, &ctx, "freeze(address)", &[contract.clone()]);
        assert_eq!(code_of(&out), CODE_INVALID_NO_AUTHORIZED);
        assert_eq!(code_of(&out), -51905);

        // Bootstrap the zero address as manager the way deployment tooling does.
        let table = p.service().records().table_name(contract_address());
        store
            .set_field(&table, ACCOUNT_AUTHORITY, "0000000000000000000000000000000000000000")
            .unwrap();

        let out = call(&p, &ctx, "freeze(address)", &[contract.clone()]);
        assert_eq!(code_of(&out), 1);

        let out = call(&p, &ctx, "freeze(address)", &[contract.clone()]);
        assert_eq!(code_of(&out), -51900);

        let out = call(&p, &ctx, "getStatus(address)", &[contract.clone()]);
        let values = decode(&[ParamType::Int256, ParamType::String], out.as_slice()).unwrap();
        assert_eq!(values[0].as_int(), Some(0));
        assert_eq!(
            values[1].as_str(),
            Some(LifecycleConfig::default().description(ContractStatus::Frozen))
        );
        assert_eq!(values[1].as_str(), Some("Frozen"));

        let out = call(&p, &ctx, "unfreeze(address)", &[contract.clone()]);
        assert_eq!(code_of(&out), 1);

        let out = call(&p, &ctx, "unfreeze(address)", &[contract.clone()]);
        assert_eq!(code_of(&out), -51901);

        let grant = [contract.clone(), AbiValue::Address(contract_address())];
        let out = call(&p, &ctx, "grantManager(address,address)", &grant);
        assert_eq!(code_of(&out), 1);

        let out = call(&p, &ctx, "grantManager(address,address)", &grant);
        assert_eq!(code_of(&out), -51902);

        let out = call(&p, &ctx, "listManager(address)", &[contract]);
        let values =
            decode(&[ParamType::Int256, ParamType::AddressArray], out.as_slice()).unwrap();
        assert_eq!(
            values[1].as_addresses(),
            Some(&[Address::ZERO, contract_address()][..])
        );
    }

    #[test]
    fn test_nonexistent_contract_every_method() {
        let (_store, p) = deployed_fixture();
        let ctx = block_context();
        let ghost = AbiValue::Address(Address::new([0x99; 20]));

        for signature in ["freeze(address)", "unfreeze(address)"] {
            let out = call(&p, &ctx, signature, &[ghost.clone()]);
            assert_eq!(code_of(&out), CODE_INVALID_TABLE_NOT_EXIST, "{signature}");
        }

        let out = call(
            &p,
            &ctx,
            "grantManager(address,address)",
            &[ghost.clone(), AbiValue::Address(Address::ZERO)],
        );
        assert_eq!(code_of(&out), CODE_INVALID_TABLE_NOT_EXIST);

        let out = call(&p, &ctx, "getStatus(address)", &[ghost.clone()]);
        let values = decode(&[ParamType::Int256, ParamType::String], out.as_slice()).unwrap();
        assert_eq!(values[0].as_int(), Some(CODE_INVALID_TABLE_NOT_EXIST));
        assert_ne!(values[1].as_str(), Some("Available"));

        let out = call(&p, &ctx, "listManager(address)", &[ghost]);
        let values =
            decode(&[ParamType::Int256, ParamType::AddressArray], out.as_slice()).unwrap();
        assert_eq!(values[0].as_int(), Some(CODE_INVALID_TABLE_NOT_EXIST));
        assert_eq!(values[1].as_addresses(), Some(&[][..]));
    }

    #[test]
    fn test_plain_account_is_not_governable() {
        let (store, p) = deployed_fixture();
        let ctx = block_context();
        let contract = [AbiValue::Address(contract_address())];

        let table = p.service().records().table_name(contract_address());
        store.set_field(&table, ACCOUNT_CODE_HASH, "").unwrap();
        store
            .set_field(&table, ACCOUNT_AUTHORITY, "0000000000000000000000000000000000000000")
            .unwrap();

        let out = call(&p, &ctx, "freeze(address)", &contract);
        assert_eq!(code_of(&out), CODE_INVALID_CONTRACT_ADDRESS);

        let out = call(&p, &ctx, "getStatus(address)", &contract);
        let values = decode(&[ParamType::Int256, ParamType::String], out.as_slice()).unwrap();
        assert_eq!(values[0].as_int(), Some(CODE_INVALID_CONTRACT_ADDRESS));
        assert_eq!(values[1].as_str(), Some("NotContractAddress"));
    }

    #[test]
    fn test_unauthorized_and_frozen_never_confused() {
        let (_store, p) = deployed_fixture();
        let manager = Address::new([0x11; 20]);
        let stranger = Address::new([0x22; 20]);
        p.service()
            .records()
            .write_authorities(contract_address(), &AuthorityList::from_addresses([manager]))
            .unwrap();

        let contract = [AbiValue::Address(contract_address())];
        let as_manager = block_context().with_origin(manager);
        let as_stranger = block_context().with_origin(stranger);

        assert_eq!(code_of(&call(&p, &as_manager, "freeze(address)", &contract)), 1);
        assert_eq!(
            code_of(&call(&p, &as_stranger, "freeze(address)", &contract)),
            CODE_INVALID_NO_AUTHORIZED
        );
        assert_eq!(
            code_of(&call(&p, &as_manager, "freeze(address)", &contract)),
            CODE_INVALID_CONTRACT_FROZEN
        );
    }

    #[test]
    fn test_host_rollback_discards_writes() {
        let (store, p) = deployed_fixture();
        let ctx = block_context();
        p.service()
            .records()
            .write_authorities(
                contract_address(),
                &AuthorityList::from_addresses([Address::ZERO]),
            )
            .unwrap();
        let contract = [AbiValue::Address(contract_address())];

        let checkpoint = store.snapshot().unwrap();
        assert_eq!(code_of(&call(&p, &ctx, "freeze(address)", &contract)), 1);

        // Enclosing transaction aborts.
        store.restore(checkpoint).unwrap();

        let out = call(&p, &ctx, "getStatus(address)", &contract);
        let values = decode(&[ParamType::Int256, ParamType::String], out.as_slice()).unwrap();
        assert_eq!(values[1].as_str(), Some("Available"));
        assert_eq!(code_of(&call(&p, &ctx, "freeze(address)", &contract)), 1);
    }

    #[test]
    fn test_registry_routes_to_lifecycle() {
        let (_store, p) = deployed_fixture();
        let address = p.address();
        let contracts: Vec<Box<dyn Precompiled>> = vec![Box::new(p)];
        let registry = PrecompiledRegistry::new(contracts);

        assert!(registry.is_precompiled(&address));
        let input = encode_call(
            "getStatus(address)",
            &[AbiValue::Address(contract_address())],
        );
        let out = registry
            .execute(address, &block_context(), input.as_slice())
            .unwrap()
            .unwrap();
        assert_eq!(code_of(&out), CODE_QUERY_OK);

        assert!(registry
            .execute(contract_address(), &block_context(), input.as_slice())
            .is_none());
    }

    #[test]
    fn test_concurrent_readers() {
        let (_store, p) = deployed_fixture();
        let input = encode_call(
            "getStatus(address)",
            &[AbiValue::Address(contract_address())],
        );

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    let out = p.call(&block_context(), input.as_slice()).unwrap();
                    assert_eq!(code_of(&out), CODE_QUERY_OK);
                });
            }
        });
    }
}
