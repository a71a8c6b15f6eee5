use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

mod adapters;
mod application;
mod auth;
mod config;
mod error;
mod models;
mod routes;

#[cfg(test)]
mod test_support;

use adapters::{GeminiModel, InMemoryCharacterMemory, PlaceholderImageResolver};
use application::PersonaService;
use config::Config;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub persona_service: Arc<PersonaService>,
    /// Bearer token required on `/api/*`; `None` disables authentication
    pub access_token: Option<Arc<str>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    tracing::info!("📜 Hakawati initializing...");

    let config = Config::from_env().context("Invalid configuration")?;

    let model = GeminiModel::new(config.gemini_api_key.clone(), config.gemini_timeout)?
        .with_model(&config.gemini_model)
        .with_base_url(&config.gemini_base_url);

    if model.has_default_key() {
        tracing::info!("🤖 Gemini gateway ready ({})", config.gemini_model);
    } else {
        tracing::warn!("⚠️  No GEMINI_API_KEY set - requests must bring their own apiKey");
    }

    let memory = Arc::new(InMemoryCharacterMemory::with_capacity(
        config.memory_max_characters,
    ));
    match config.memory_max_characters {
        Some(max) => tracing::info!("🧠 Character memory bounded to {} characters", max),
        None => tracing::info!("🧠 Character memory unbounded"),
    }

    if config.access_token.is_some() {
        tracing::info!("🔐 API key authentication enabled");
    } else {
        tracing::warn!("⚠️  No HAKAWATI_API_KEY set - authentication disabled, /api/memory not mounted");
    }

    let state = AppState {
        persona_service: Arc::new(PersonaService::new(
            Arc::new(model),
            memory,
            Arc::new(
                PlaceholderImageResolver::new().with_base_url(&config.image_placeholder_url),
            ),
        )),
        access_token: config.access_token.as_deref().map(Arc::from),
    };

    let router = routes::app(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Server running on port {}", config.port);

    axum::serve(listener, router).await?;
    Ok(())
}
