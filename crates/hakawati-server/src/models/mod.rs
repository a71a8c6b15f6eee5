//! Request/Response DTOs
//!
//! Field names follow the JSON the web client already sends (`apiKey`,
//! `base_story`, `type`).

mod chat;
mod generate;
mod status;
mod train;

pub use chat::*;
pub use generate::*;
pub use status::*;
pub use train::*;
