//! Domain Services
//!
//! Stateless logic shared by the request handlers.

pub mod image;
pub mod prompt;
pub mod reply_parser;

pub use reply_parser::ModelReply;
