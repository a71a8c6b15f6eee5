//! Server configuration
//!
//! Read from environment variables (a `.env` file is loaded first when present).

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_STATIC_DIR: &str = "public";
pub const DEFAULT_IMAGE_PLACEHOLDER_URL: &str = hakawati::domain::image::PLACEHOLDER_IMAGE_BASE;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Listening port (`PORT`)
    pub port: u16,
    /// Default model credential (`GEMINI_API_KEY`), used when a request has no `apiKey`
    pub gemini_api_key: Option<String>,
    /// Model name (`GEMINI_MODEL`)
    pub gemini_model: String,
    /// Provider endpoint prefix (`GEMINI_BASE_URL`)
    pub gemini_base_url: String,
    /// HTTP timeout for model calls (`GEMINI_TIMEOUT_SECS`)
    pub gemini_timeout: Duration,
    /// Directory served as static assets (`STATIC_DIR`)
    pub static_dir: PathBuf,
    /// Placeholder image service prefix (`IMAGE_PLACEHOLDER_URL`)
    pub image_placeholder_url: String,
    /// Upper bound on remembered characters (`MEMORY_MAX_CHARACTERS`)
    pub memory_max_characters: Option<usize>,
    /// Bearer token required on `/api/*` (`HAKAWATI_API_KEY`)
    pub access_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            gemini_timeout: Duration::from_secs(DEFAULT_GEMINI_TIMEOUT_SECS),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            image_placeholder_url: DEFAULT_IMAGE_PLACEHOLDER_URL.to_string(),
            memory_max_characters: None,
            access_token: None,
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(v) => v
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {:?}", v))?,
            None => defaults.port,
        };

        let gemini_timeout = match get("GEMINI_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(
                v.parse::<u64>()
                    .with_context(|| format!("GEMINI_TIMEOUT_SECS must be seconds, got {:?}", v))?,
            ),
            None => defaults.gemini_timeout,
        };

        let memory_max_characters = match get("MEMORY_MAX_CHARACTERS") {
            Some(v) => {
                let max = v.parse::<usize>().with_context(|| {
                    format!("MEMORY_MAX_CHARACTERS must be a count, got {:?}", v)
                })?;
                anyhow::ensure!(max > 0, "MEMORY_MAX_CHARACTERS must be at least 1");
                Some(max)
            }
            None => None,
        };

        Ok(Self {
            port,
            gemini_api_key: get("GEMINI_API_KEY"),
            gemini_model: get("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            gemini_base_url: get("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
            gemini_timeout,
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            image_placeholder_url: get("IMAGE_PLACEHOLDER_URL")
                .unwrap_or(defaults.image_placeholder_url),
            memory_max_characters,
            access_token: get("HAKAWATI_API_KEY"),
        })
    }
}
