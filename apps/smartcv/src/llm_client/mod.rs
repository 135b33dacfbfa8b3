//! Chat-completions client: the single point of entry for all model calls.
//!
//! Speaks the OpenAI-compatible `/chat/completions` protocol, which covers
//! both supported providers (OpenAI directly, OpenRouter via its base URL
//! plus optional attribution headers). Retries transport-level failures;
//! one call per user-triggered generation, no caller-visible retry.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{Config, Provider};

/// Sampling temperature for every generation call.
const TEMPERATURE: f32 = 0.5;
const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("Model returned empty content")]
    EmptyContent,

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The one blocking operation in the system. Abstracted behind a trait so
/// the generation pipeline can be exercised against a canned reply.
#[async_trait]
pub trait ChatCompleter: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

/// OpenAI-compatible chat client with retry on 429 and 5xx responses.
#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    extra_headers: Vec<(&'static str, String)>,
}

impl ChatClient {
    pub fn new(config: &Config) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| LlmError::ClientBuild(e.to_string()))?;

        let mut extra_headers = Vec::new();
        if config.provider == Provider::OpenRouter {
            if let Some(referer) = &config.http_referer {
                extra_headers.push(("HTTP-Referer", referer.clone()));
            }
            if let Some(title) = &config.x_title {
                extra_headers.push(("X-Title", title.clone()));
            }
        }

        Ok(ChatClient {
            client,
            base_url: config.provider.base_url().to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            extra_headers,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends a single user message and returns the reply text.
    /// Retries on 429 and 5xx with exponential backoff.
    async fn call(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
        };

        let url = format!("{}/chat/completions", self.base_url);
        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let mut request = self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .header("content-type", "application/json");
            for (name, value) in &self.extra_headers {
                request = request.header(*name, value);
            }

            let response = match request.json(&request_body).send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let chat_response: ChatResponse = response.json().await?;
            let text = chat_response
                .choices
                .into_iter()
                .next()
                .and_then(|c| c.message.content)
                .filter(|t| !t.is_empty())
                .ok_or(LlmError::EmptyContent)?;

            debug!("LLM call succeeded: {} reply chars", text.len());
            return Ok(text);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl ChatCompleter for ChatClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.call(prompt).await
    }
}
