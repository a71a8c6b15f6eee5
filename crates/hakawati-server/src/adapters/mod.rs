//! Infrastructure Adapters
//!
//! Implementations of the domain ports:
//! - Gemini model gateway (HTTP)
//! - In-memory character memory
//! - Placeholder image resolver

pub mod gemini;
pub mod images;
pub mod memory;

pub use gemini::GeminiModel;
pub use images::PlaceholderImageResolver;
pub use memory::InMemoryCharacterMemory;
