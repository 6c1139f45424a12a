//! # Adapters Layer (Outer Hexagon)
//!
//! Adapters connect the lifecycle precompile to table storage.
//!
//! - `record_table` maps contract records onto account table fields
//! - `memory_table` is an in-memory `TableStore` for tests

pub mod memory_table;
pub mod record_table;

pub use memory_table::*;
pub use record_table::*;
