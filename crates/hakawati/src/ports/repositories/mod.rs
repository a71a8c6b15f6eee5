//! Repository Ports

mod character_memory;

pub use character_memory::*;
