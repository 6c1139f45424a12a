//! # Domain Layer (Inner Hexagon)
//!
//! Pure business logic for contract lifecycle management.
//! NO I/O, NO storage access.
//!
//! - This is the **inner layer** of the hexagonal architecture.
//! - Dependencies point INWARD only (adapters depend on this, not vice versa).

pub mod codes;
pub mod entities;
pub mod lifecycle;
pub mod policy;
pub mod value_objects;

pub use entities::*;
pub use lifecycle::*;
pub use policy::*;
pub use value_objects::*;
