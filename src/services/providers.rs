// Generation Backend Service
// The language-model capability behind the tutor. One trait, one concrete
// Anthropic implementation; backends are swapped by configuration.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use thiserror::Error;

use crate::models::Message;

const ANTHROPIC_DEFAULT_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },
    #[error("Missing content in response")]
    MissingContent,
    #[error("JSON parse error: {0}")]
    JsonError(String),
    #[error("ANTHROPIC_API_KEY not configured")]
    MissingApiKey,
}

/// The single capability callers depend on: turn a system prompt, a user
/// message and optional history into response text.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(
        &self,
        system: &str,
        user: &str,
        history: &[Message],
        max_tokens: i32,
        temperature: f64,
    ) -> Result<String, GenerationError>;
}

#[derive(Debug, Clone, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: i32,
    temperature: f64,
    system: String,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct AnthropicResponse {
    content: Option<Vec<AnthropicContent>>,
}

#[derive(Deserialize)]
struct AnthropicContent {
    text: Option<String>,
}

/// Messages-API client for Anthropic models.
pub struct AnthropicBackend {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl AnthropicBackend {
    /// Build a backend from `ANTHROPIC_API_KEY` (and optionally
    /// `ANTHROPIC_API_URL`) in the environment.
    pub fn from_env() -> Result<Self, GenerationError> {
        let api_key = env::var("ANTHROPIC_API_KEY").map_err(|_| GenerationError::MissingApiKey)?;
        if api_key.trim().is_empty() {
            return Err(GenerationError::MissingApiKey);
        }
        Ok(Self::new(api_key))
    }

    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(80))
            .build()
            .unwrap_or_default();
        let base_url =
            env::var("ANTHROPIC_API_URL").unwrap_or_else(|_| ANTHROPIC_DEFAULT_URL.to_string());

        Self {
            client,
            base_url,
            model: DEFAULT_MODEL.to_string(),
            api_key,
        }
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }
}

#[async_trait]
impl GenerationBackend for AnthropicBackend {
    async fn generate(
        &self,
        system: &str,
        user: &str,
        history: &[Message],
        max_tokens: i32,
        temperature: f64,
    ) -> Result<String, GenerationError> {
        let mut messages: Vec<ChatMessage> = history
            .iter()
            .map(|m| ChatMessage {
                role: m.role.clone(),
                content: m.content.clone(),
            })
            .collect();
        messages.push(ChatMessage {
            role: "user".to_string(),
            content: user.to_string(),
        });

        let request = AnthropicRequest {
            model: self.model.clone(),
            max_tokens,
            temperature,
            system: system.to_string(),
            messages,
        };

        let response = self
            .client
            .post(&self.base_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let data: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::JsonError(e.to_string()))?;

        data.content
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.text)
            .ok_or(GenerationError::MissingContent)
    }
}

/// Get the configured generation backend. Currently always Anthropic.
pub fn get_backend() -> Result<AnthropicBackend, GenerationError> {
    AnthropicBackend::from_env()
}
