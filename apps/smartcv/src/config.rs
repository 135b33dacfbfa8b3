use anyhow::{Context, Result};

/// Which chat-completions provider to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Provider {
    #[default]
    OpenAi,
    OpenRouter,
}

impl Provider {
    pub fn base_url(&self) -> &'static str {
        match self {
            Provider::OpenAi => "https://api.openai.com/v1",
            Provider::OpenRouter => "https://openrouter.ai/api/v1",
        }
    }

    fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "openrouter" => Provider::OpenRouter,
            _ => Provider::OpenAi,
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub provider: Provider,
    pub api_key: String,
    pub model: String,
    /// Optional OpenRouter attribution headers; ignored for other providers.
    pub http_referer: Option<String>,
    pub x_title: Option<String>,
    /// Words the model is told not to use, comma-separated in the env var.
    pub excluded_terms: Vec<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let provider = Provider::from_name(
            &std::env::var("SMARTCV_PROVIDER").unwrap_or_else(|_| "openai".to_string()),
        );

        Ok(Config {
            provider,
            api_key: require_env("SMARTCV_API_KEY")?,
            model: std::env::var("SMARTCV_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            http_referer: optional_env("SMARTCV_HTTP_REFERER"),
            x_title: optional_env("SMARTCV_X_TITLE"),
            excluded_terms: std::env::var("SMARTCV_EXCLUDED_TERMS")
                .map(|raw| split_terms(&raw))
                .unwrap_or_default(),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Splits a comma-separated term list, dropping empty fragments.
pub fn split_terms(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}
