//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Character: persona definition driving prompts
//! - MemoryEntry / ChatTurn: per-character conversation memory
//! - ChatReply / GeneratedCharacter: shapes returned to clients

mod character;
mod memory;
mod reply;

pub use character::*;
pub use memory::*;
pub use reply::*;
