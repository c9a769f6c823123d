use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::providers::{read_json, LlmProvider};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_MODEL: &str = "claude-3-5-haiku-latest";
const API_VERSION: &str = "2023-06-01";

pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    timeout: Duration,
}

impl AnthropicProvider {
    /// Create a new Anthropic provider from configuration
    pub fn new(config: &ProviderConfig, timeout: Duration) -> Result<Self, ProviderError> {
        // Try config first, then fall back to environment variable
        let api_key = config.api_key_or_env("ANTHROPIC_API_KEY").ok_or_else(|| {
            ProviderError::MissingApiKey(
                "ANTHROPIC_API_KEY not found in config or environment".to_string(),
            )
        })?;

        Ok(AnthropicProvider {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: config.model_or(DEFAULT_MODEL).to_string(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            timeout,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        AnthropicProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: 0.7,
            max_tokens: 4000,
            timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait]
impl LlmProvider for AnthropicProvider {
    fn provider_name(&self) -> &str {
        "anthropic"
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&json!({
                "model": self.model,
                "max_tokens": self.max_tokens,
                "temperature": self.temperature,
                "messages": [
                    {
                        "role": "user",
                        "content": prompt
                    }
                ]
            }))
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(e, self.timeout))?;

        let response_body = read_json(response).await?;
        debug!("{:?}", response_body);

        response_body["content"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                ProviderError::MalformedResponse(
                    "Failed to extract content from Anthropic response".to_string(),
                )
            })
    }
}
