mod anthropic;
mod factory;
mod fallback;
mod open_ai;
mod open_router;
pub mod prompt;

pub use anthropic::AnthropicProvider;
pub use factory::ProviderFactory;
pub use fallback::FallbackProvider;
pub use open_ai::OpenAIProvider;
pub use open_router::OpenRouterProvider;

use crate::error::ProviderError;
use async_trait::async_trait;
use reqwest::Response;
use serde_json::Value;

/// Unified trait for all remote text-generation providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "openrouter", "anthropic")
    fn provider_name(&self) -> &str;

    /// Send a single user prompt and return the generated text.
    ///
    /// A failed call is always an `Err`; an `Ok` body is returned verbatim even
    /// if it happens to contain the word "Error".
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Turn a non-success response into [`ProviderError::Status`], otherwise
/// decode the JSON body.
pub(crate) async fn read_json(response: Response) -> Result<Value, ProviderError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::Status {
            status: status.as_u16(),
            body,
        });
    }
    response
        .json::<Value>()
        .await
        .map_err(|e| ProviderError::MalformedResponse(e.to_string()))
}

/// Content of the first choice in an OpenAI-style chat completion body.
pub(crate) fn chat_completion_content(body: &Value) -> Result<String, ProviderError> {
    body["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| {
            ProviderError::MalformedResponse(
                "Failed to extract content from chat completion".to_string(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_completion_content() {
        let body = json!({"choices": [{"message": {"content": "Error: this is just text"}}]});
        assert_eq!(
            chat_completion_content(&body).unwrap(),
            "Error: this is just text"
        );
    }

    #[test]
    fn test_chat_completion_content_missing() {
        let body = json!({"choices": []});
        let err = chat_completion_content(&body).unwrap_err();
        assert!(matches!(err, ProviderError::MalformedResponse(_)));
    }
}
