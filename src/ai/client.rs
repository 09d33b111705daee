//! HTTP client for the completion endpoint

use super::CompletionBackend;
use crate::models::GeneratorError;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

pub const ENDPOINT_ENV: &str = "EXTFORGE_AI_ENDPOINT";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/ai_completion";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Posts `{"prompt": ...}` and expects the configuration JSON back.
#[derive(Debug, Clone)]
pub struct HttpCompletionClient {
    client: Client,
    endpoint: String,
}

impl HttpCompletionClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, GeneratorError> {
        let client = Client::builder()
            .user_agent(concat!("extforge/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GeneratorError::UpstreamRequest(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Endpoint from `EXTFORGE_AI_ENDPOINT`, or the local default.
    pub fn from_env() -> Result<Self, GeneratorError> {
        let endpoint = std::env::var(ENDPOINT_ENV).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self::new(endpoint)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CompletionBackend for HttpCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<Value, GeneratorError> {
        tracing::debug!(endpoint = %self.endpoint, prompt_len = prompt.len(), "requesting completion");

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(&json!({ "prompt": prompt }))
            .send()
            .await
            .map_err(|e| GeneratorError::UpstreamRequest(e.to_string()))?
            .error_for_status()
            .map_err(|e| GeneratorError::UpstreamRequest(e.to_string()))?;

        response
            .json::<Value>()
            .await
            .map_err(|e| GeneratorError::InvalidAiResponse(format!("response is not JSON: {}", e)))
    }
}
