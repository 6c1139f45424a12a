//! # Contract Lifecycle Benchmarks
//!
//! | Path | Target |
//! |------|--------|
//! | ABI decode of call arguments | < 1µs |
//! | Full `getStatus` call | < 10µs |
//! | `listManager` with growing authority lists | linear in list size |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qc_18_contract_lifecycle::prelude::*;
use std::sync::Arc;

fn deployed(managers: usize) -> (ContractLifeCyclePrecompiled<InMemoryTableStore>, Address) {
    let contract = Address::new([0xc0; 20]);
    let precompile = ContractLifeCyclePrecompiled::new(
        Arc::new(InMemoryTableStore::new()),
        LifecycleConfig::default(),
    );
    let records = precompile.service().records();
    records
        .initialize_account(contract, Hash::new([0x12; 32]))
        .expect("fresh store");
    let list = AuthorityList::from_addresses((0..managers).map(|i| {
        let mut bytes = [0u8; 20];
        bytes[12..].copy_from_slice(&(i as u64).to_be_bytes());
        Address::new(bytes)
    }));
    records
        .write_authorities(contract, &list)
        .expect("account exists");
    (precompile, contract)
}

fn bench_abi_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-18-abi");
    let args = encode(&[
        AbiValue::Address(Address::new([1u8; 20])),
        AbiValue::Address(Address::new([2u8; 20])),
    ]);

    group.bench_function("decode_two_addresses", |b| {
        b.iter(|| {
            black_box(decode(&[ParamType::Address, ParamType::Address], args.as_slice()).is_ok())
        })
    });
    group.finish();
}

fn bench_get_status(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-18-dispatch");
    let (precompile, contract) = deployed(1);
    let input = encode_call("getStatus(address)", &[AbiValue::Address(contract)]);
    let context = CallContext::default();

    group.bench_function("get_status_call", |b| {
        b.iter(|| black_box(precompile.call(&context, input.as_slice()).is_ok()))
    });
    group.finish();
}

fn bench_list_manager(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-18-list-manager");
    let context = CallContext::default();

    for size in [1usize, 16, 128] {
        let (precompile, contract) = deployed(size);
        let input = encode_call("listManager(address)", &[AbiValue::Address(contract)]);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("list_manager", size), &size, |b, _| {
            b.iter(|| black_box(precompile.call(&context, input.as_slice()).is_ok()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_abi_decode, bench_get_status, bench_list_manager);
criterion_main!(benches);
