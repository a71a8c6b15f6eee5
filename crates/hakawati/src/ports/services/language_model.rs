//! Language Model Port
//!
//! Abstract interface for the generative-language provider. The relay
//! only needs "prompt in, text out"; everything provider-specific lives
//! in the implementation.

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Model gateway interface
///
/// # Example
///
/// ```rust,ignore
/// use hakawati::ports::LanguageModel;
///
/// struct GeminiModel { /* ... */ }
///
/// #[async_trait]
/// impl LanguageModel for GeminiModel {
///     async fn generate(&self, prompt: &str, credentials: Option<&str>)
///         -> Result<String, DomainError> {
///         // Call the provider
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Generate text for a prompt.
    ///
    /// `credentials` overrides the implementation's default key for this
    /// call only. Failures are returned as-is; callers do not retry.
    async fn generate(&self, prompt: &str, credentials: Option<&str>)
        -> Result<String, DomainError>;

    /// Get the provider name (e.g., "google")
    fn provider_name(&self) -> &str;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
