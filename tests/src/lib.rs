//! # Quantum-Chain Contract Lifecycle Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # End-to-end flows through the precompile
//!     └── lifecycle_flows.rs
//!
//! tests/benches/
//! └── lifecycle_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p qc-tests
//! cargo test -p qc-tests integration::
//!
//! # Benchmarks
//! cargo bench -p qc-tests
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
