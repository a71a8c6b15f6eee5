//! Image Resolver Port

use async_trait::async_trait;

/// Maps an image description to a URL.
///
/// Resolution never fails loudly: an implementation that cannot produce
/// an image returns `None`.
#[async_trait]
pub trait ImageResolver: Send + Sync {
    async fn resolve(&self, prompt: &str) -> Option<String>;
}
