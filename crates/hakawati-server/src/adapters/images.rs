//! Placeholder image resolver
//!
//! Image generation needs a paid model tier, so scenes are illustrated by a
//! placeholder service that renders the prompt text instead.

use async_trait::async_trait;

use hakawati::domain::image::{placeholder_image_url, PLACEHOLDER_IMAGE_BASE};
use hakawati::ImageResolver;

/// [`ImageResolver`] backed by a text-rendering placeholder service
#[derive(Debug, Clone)]
pub struct PlaceholderImageResolver {
    base_url: String,
}

impl PlaceholderImageResolver {
    pub fn new() -> Self {
        Self {
            base_url: PLACEHOLDER_IMAGE_BASE.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for PlaceholderImageResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageResolver for PlaceholderImageResolver {
    async fn resolve(&self, prompt: &str) -> Option<String> {
        Some(placeholder_image_url(&self.base_url, prompt))
    }
}
