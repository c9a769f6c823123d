use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while talking to a remote text-generation provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Transport-level failure (connection refused, TLS, body decoding, ...)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status code
    #[error("Provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not have the expected shape
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// No API key in configuration or environment
    #[error("API key not found: {0}")]
    MissingApiKey(String),

    /// The request did not complete within the configured timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The provider is present in configuration but switched off
    #[error("Provider '{0}' is not enabled in configuration")]
    Disabled(String),

    /// No provider implementation matches the requested name
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// Every provider in a fallback chain failed
    #[error("All providers failed:\n{}", .0.join("\n"))]
    AllFailed(Vec<String>),
}

impl ProviderError {
    /// Classify a reqwest error, keeping timeouts distinguishable.
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout(timeout)
        } else {
            ProviderError::Http(err)
        }
    }
}

/// Errors that can occur during content generation and persistence
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Remote text generation failed
    #[error("Generation failed: {0}")]
    Provider(#[from] ProviderError),

    /// Database operation failed
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// Failed to encode or decode a stored JSON column
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// The request or a stored record contained an invalid value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No stored post has the given id
    #[error("Post {0} not found")]
    NotFound(i64),
}
