//! Shared fixtures for handler and service tests

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use hakawati::{DomainError, LanguageModel};

use crate::adapters::{InMemoryCharacterMemory, PlaceholderImageResolver};
use crate::application::PersonaService;
use crate::AppState;

enum Script {
    Reply(String),
    Fail,
}

/// [`LanguageModel`] that answers from a script and records every call
pub struct ScriptedModel {
    script: Script,
    calls: Mutex<Vec<(String, Option<String>)>>,
}

impl ScriptedModel {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            script: Script::Reply(text.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            script: Script::Fail,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(p, _)| p.clone()).collect()
    }

    pub fn credentials(&self) -> Vec<Option<String>> {
        self.calls.lock().unwrap().iter().map(|(_, c)| c.clone()).collect()
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    async fn generate(
        &self,
        prompt: &str,
        credentials: Option<&str>,
    ) -> Result<String, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), credentials.map(str::to_string)));

        match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::Fail => Err(DomainError::ExternalService(
                "connection reset by peer".to_string(),
            )),
        }
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }

    fn model_id(&self) -> &str {
        "scripted-model"
    }
}

/// Router wired to a scripted model and a fresh in-memory store
pub fn test_app(
    model: Arc<ScriptedModel>,
    access_token: Option<&str>,
) -> (Router, Arc<InMemoryCharacterMemory>) {
    let memory = Arc::new(InMemoryCharacterMemory::new());
    let state = AppState {
        persona_service: Arc::new(PersonaService::new(
            model,
            memory.clone(),
            Arc::new(PlaceholderImageResolver::new()),
        )),
        access_token: access_token.map(Arc::from),
    };
    let router = crate::routes::app(state, Path::new("does-not-exist"));
    (router, memory)
}

/// Send a request and decode the JSON body (`Value::Null` when empty or not JSON)
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, Request::get(uri).body(Body::empty()).unwrap()).await
}
