use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::providers::{chat_completion_content, read_json, LlmProvider};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api";
pub(crate) const DEFAULT_MODEL: &str = "deepseek/deepseek-chat-v3-0324";

/// OpenRouter chat completions (free community models by default)
pub struct OpenRouterProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    timeout: Duration,
}

impl OpenRouterProvider {
    /// Create a new OpenRouter provider from configuration
    pub fn new(config: &ProviderConfig, timeout: Duration) -> Result<Self, ProviderError> {
        // Try config first, then fall back to environment variable
        let api_key = config.api_key_or_env("OPENROUTER_API_KEY").ok_or_else(|| {
            ProviderError::MissingApiKey(
                "OPENROUTER_API_KEY not found in config or environment".to_string(),
            )
        })?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(OpenRouterProvider {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url,
            model: config.model_or(DEFAULT_MODEL).to_string(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            timeout,
        })
    }

    /// Create a provider with just an API key, as stored in user settings
    pub fn with_api_key(api_key: String, timeout: Duration) -> Result<Self, ProviderError> {
        let config = ProviderConfig {
            api_key: Some(api_key),
            ..Default::default()
        };
        Self::new(&config, timeout)
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        OpenRouterProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: 0.7,
            max_tokens: 2000,
            timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait]
impl LlmProvider for OpenRouterProvider {
    fn provider_name(&self) -> &str {
        "openrouter"
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        debug!("POST {} (model {})", url, self.model);

        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": self.model,
                "messages": [
                    {"role": "user", "content": prompt}
                ],
                "temperature": self.temperature,
                "max_tokens": self.max_tokens
            }))
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(e, self.timeout))?;

        let response_body = read_json(response).await?;
        debug!("{:?}", response_body);
        chat_completion_content(&response_body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_generate() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer fake_api_key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "choices": [{
                        "message": {
                            "content": "Twitter: Coffee time!\nFacebook: Brew something great."
                        }
                    }]
                }"#,
            )
            .create_async()
            .await;

        let provider = OpenRouterProvider::with_base_url(
            "fake_api_key".to_string(),
            server.url(),
            DEFAULT_MODEL.to_string(),
        );

        let result = provider.generate("Write about coffee").await.unwrap();
        assert!(result.contains("Twitter: Coffee time!"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_api_error_is_not_content() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": {"message": "No auth credentials found"}}"#)
            .create_async()
            .await;

        let provider = OpenRouterProvider::with_base_url(
            "bad_key".to_string(),
            server.url(),
            DEFAULT_MODEL.to_string(),
        );

        let result = provider.generate("anything").await;
        match result {
            Err(ProviderError::Status { status, body }) => {
                assert_eq!(status, 401);
                assert!(body.contains("No auth credentials"));
            }
            other => panic!("expected status error, got {:?}", other),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_malformed_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"unexpected": true}"#)
            .create_async()
            .await;

        let provider = OpenRouterProvider::with_base_url(
            "fake_api_key".to_string(),
            server.url(),
            DEFAULT_MODEL.to_string(),
        );

        let result = provider.generate("anything").await;
        assert!(matches!(result, Err(ProviderError::MalformedResponse(_))));
    }

    #[test]
    fn test_missing_api_key() {
        let config = ProviderConfig {
            api_key: None,
            ..Default::default()
        };
        if std::env::var("OPENROUTER_API_KEY").is_err() {
            let result = OpenRouterProvider::new(&config, Duration::from_secs(5));
            assert!(matches!(result, Err(ProviderError::MissingApiKey(_))));
        }
    }

    #[test]
    fn test_default_model_used_when_unset() {
        let provider =
            OpenRouterProvider::with_api_key("key".to_string(), Duration::from_secs(5)).unwrap();
        assert_eq!(provider.model, DEFAULT_MODEL);
        assert_eq!(provider.base_url, DEFAULT_BASE_URL);
        assert_eq!(provider.provider_name(), "openrouter");
    }
}
