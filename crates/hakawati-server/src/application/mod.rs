//! Application Layer (Use Cases)
//!
//! Orchestrates domain logic with the port implementations.

mod persona_service;

pub use persona_service::*;
