//! # Integration Tests
//!
//! Cross-module flows through the public call interface.

pub mod lifecycle_flows;
