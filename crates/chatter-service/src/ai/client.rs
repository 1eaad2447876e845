//! Chat-completion HTTP client

use async_trait::async_trait;
use chatter_common::OpenAiConfig;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    /// Model replies; part of the wire format though this client never sends one
    Assistant,
}

/// One role-tagged message of a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Errors raised by the classification client
#[derive(Debug, thiserror::Error)]
pub enum AiClientError {
    #[error("Chat completion request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl AiClientError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "AI_TRANSPORT_ERROR",
        }
    }
}

/// Port for the remote chat-completion endpoint
#[async_trait]
pub trait ChatCompletions: Send + Sync {
    /// Send the conversation and return the decoded response body.
    ///
    /// `Ok(None)` means the endpoint answered but the body was not JSON.
    /// `model` and `temperature` fall back to the configured defaults.
    async fn chat_completions(
        &self,
        messages: &[ChatMessage],
        model: Option<&str>,
        temperature: Option<f32>,
    ) -> Result<Option<Value>, AiClientError>;
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: &'a [ChatMessage],
}

/// `ChatCompletions` over HTTPS against an OpenAI-compatible API
#[derive(Clone)]
pub struct OpenAiClient {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiClient {
    /// Create a client using the transport's default timeouts
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ChatCompletions for OpenAiClient {
    #[instrument(skip(self, messages), fields(messages = messages.len()))]
    async fn chat_completions(
        &self,
        messages: &[ChatMessage],
        model: Option<&str>,
        temperature: Option<f32>,
    ) -> Result<Option<Value>, AiClientError> {
        let request = ChatCompletionRequest {
            model: model.unwrap_or(&self.config.model),
            temperature: temperature.unwrap_or(self.config.temperature),
            messages,
        };
        let url = self.endpoint();

        info!(
            url = %url,
            model = request.model,
            messages = messages.len(),
            "Sending chat completion request"
        );
        if let Ok(body) = serde_json::to_string(&request) {
            debug!(body = %body, "Chat completion request body");
        }

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        info!(
            status = status.as_u16(),
            bytes = body.len(),
            "Received chat completion response"
        );

        // Non-2xx bodies are decoded like any other; they simply lack a verdict
        match serde_json::from_str::<Value>(&body) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(error = %e, status = status.as_u16(), "Chat completion body is not JSON");
                Ok(None)
            }
        }
    }
}
