//! Service Ports
//!
//! Abstract interfaces for external services.

mod image_resolver;
mod language_model;

pub use image_resolver::*;
pub use language_model::*;
