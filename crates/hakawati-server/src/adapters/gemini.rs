//! Gemini model gateway
//!
//! Calls the `generateContent` endpoint with a single user turn and returns
//! the concatenated candidate text. One attempt per call.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use hakawati::{DomainError, LanguageModel};

use crate::config::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini implementation of [`LanguageModel`]
#[derive(Clone)]
pub struct GeminiModel {
    client: Client,
    default_api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiModel {
    /// Creates a gateway. `default_api_key` is used when a call brings no key.
    pub fn new(default_api_key: Option<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::ExternalService(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            default_api_key,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        })
    }

    /// Overrides the Gemini model name
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the endpoint prefix (`.../v1beta/models`)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn has_default_key(&self) -> bool {
        self.default_api_key.is_some()
    }

    /// Caller key if present, otherwise the default one
    fn resolve_key<'a>(&'a self, credentials: Option<&'a str>) -> Result<&'a str, DomainError> {
        credentials
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .or(self.default_api_key.as_deref())
            .ok_or(DomainError::MissingCredentials)
    }
}

#[async_trait]
impl LanguageModel for GeminiModel {
    async fn generate(
        &self,
        prompt: &str,
        credentials: Option<&str>,
    ) -> Result<String, DomainError> {
        let api_key = self.resolve_key(credentials)?;
        let url = format!("{}/{}:generateContent", self.base_url, self.model);

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Gemini request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, &body));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Gemini parse error: {e}")))?;

        extract_text(&payload).ok_or_else(|| match block_reason(&payload) {
            Some(reason) => DomainError::ExternalService(format!("Gemini blocked the prompt: {reason}")),
            None => DomainError::ExternalService("Gemini returned no text".to_string()),
        })
    }

    fn provider_name(&self) -> &str {
        "google"
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

// ============================================
// Request Types
// ============================================

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

// ============================================
// Helper Functions
// ============================================

/// Text of the first candidate, parts joined in order
fn extract_text(root: &Value) -> Option<String> {
    let parts = root
        .get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn block_reason(root: &Value) -> Option<&str> {
    root.get("promptFeedback")?.get("blockReason")?.as_str()
}

fn map_http_error(status: StatusCode, body: &str) -> DomainError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or_else(|| body.to_string());

    if status == StatusCode::TOO_MANY_REQUESTS {
        return DomainError::ExternalService(format!("Gemini rate limited: {message}"));
    }

    DomainError::ExternalService(format!("Gemini API error ({}): {}", status.as_u16(), message))
}
