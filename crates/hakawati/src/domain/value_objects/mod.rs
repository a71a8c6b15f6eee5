//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod character_kind;
mod emotion;

pub use character_kind::*;
pub use emotion::*;
