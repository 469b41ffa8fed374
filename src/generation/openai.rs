//! OpenAI chat-completions description generator.
//!
//! Direct integration via `reqwest`. The synchronous [`DescriptionGenerator`]
//! entry point spins up a runtime and delegates to the async path.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::generation::DescriptionGenerator;
use crate::presenter::PromptPayload;
use crate::utilities::errors::GenerationError;

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default response token cap.
pub const DEFAULT_MAX_TOKENS: u32 = 200;

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const SYSTEM_PROMPT: &str =
    "You are a creative assistant helping generate character descriptions.";

/// Description generator backed by the OpenAI chat completions API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiGenerator {
    /// Model identifier.
    pub model: String,
    /// API key; falls back to `OPENAI_API_KEY` at call time when unset.
    pub api_key: Option<String>,
    /// Base URL override for proxies and compatible endpoints.
    pub base_url: Option<String>,
    /// Maximum tokens in the generated description.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
    /// Request timeout in seconds.
    pub timeout: Option<f64>,
}

impl Default for OpenAiGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}

impl OpenAiGenerator {
    /// Create a generator for the given model with default parameters.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            api_key: None,
            base_url: None,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout: None,
        }
    }

    /// Set an explicit API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    fn resolve_api_key(&self) -> Result<String, GenerationError> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .ok_or_else(|| GenerationError::Unavailable {
                message: "OpenAI API key not set; set OPENAI_API_KEY or pass api_key".to_string(),
            })
    }

    fn endpoint(&self) -> String {
        let base = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        format!("{}/chat/completions", base.trim_end_matches('/'))
    }

    /// Build the chat-completions request body for a payload.
    pub fn build_request_body(&self, payload: &PromptPayload) -> Value {
        json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": payload.to_prompt()},
            ],
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
        })
    }
}

#[async_trait]
impl DescriptionGenerator for OpenAiGenerator {
    fn generate(&self, payload: &PromptPayload) -> Result<String, GenerationError> {
        log::debug!("OpenAiGenerator.generate: model={}", self.model);

        // Use a tokio runtime for the sync entry point.
        let rt = tokio::runtime::Runtime::new().map_err(|err| GenerationError::Unavailable {
            message: format!("failed to start runtime: {err}"),
        })?;
        rt.block_on(self.agenerate(payload))
    }

    async fn agenerate(&self, payload: &PromptPayload) -> Result<String, GenerationError> {
        let api_key = self.resolve_api_key()?;
        let body = self.build_request_body(payload);

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(std::time::Duration::from_secs_f64(timeout));
        }
        let client = builder.build().map_err(|err| GenerationError::Unavailable {
            message: format!("failed to build HTTP client: {err}"),
        })?;

        let response = client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| GenerationError::Unavailable {
                message: format!("request failed: {err}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GenerationError::Unavailable {
                message: format!("OpenAI API error {status}: {detail}"),
            });
        }

        let value: Value = response
            .json()
            .await
            .map_err(|err| GenerationError::Unavailable {
                message: format!("malformed response: {err}"),
            })?;

        let content = value["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(GenerationError::EmptyResponse)?;

        Ok(content)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
