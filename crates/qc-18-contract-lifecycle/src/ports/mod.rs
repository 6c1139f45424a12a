//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions for the lifecycle precompile.
//!
//! - **Driving Ports (Inbound)**: `ContractLifecycleApi`
//! - **Driven Ports (Outbound)**: `TableStore`
//! - No concrete implementations in this module

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
