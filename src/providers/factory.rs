use crate::config::{AppConfig, ProviderConfig};
use crate::error::ProviderError;
use crate::providers::{AnthropicProvider, LlmProvider, OpenAIProvider, OpenRouterProvider};
use std::time::Duration;

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration
    pub fn create(
        provider_name: &str,
        config: &ProviderConfig,
        timeout: Duration,
    ) -> Result<Box<dyn LlmProvider>, ProviderError> {
        // Validate that provider is enabled
        if !config.enabled {
            return Err(ProviderError::Disabled(provider_name.to_string()));
        }

        match provider_name {
            "openrouter" => Ok(Box::new(OpenRouterProvider::new(config, timeout)?)),
            "openai" => Ok(Box::new(OpenAIProvider::new(config, timeout)?)),
            "anthropic" => Ok(Box::new(AnthropicProvider::new(config, timeout)?)),
            _ => Err(ProviderError::UnknownProvider(provider_name.to_string())),
        }
    }

    /// Get the default provider from configuration
    pub fn get_default_provider(
        config: &AppConfig,
        timeout: Duration,
    ) -> Result<Box<dyn LlmProvider>, ProviderError> {
        let provider_name = &config.default_provider;
        let provider_config = config
            .providers
            .get(provider_name)
            .ok_or_else(|| ProviderError::UnknownProvider(provider_name.clone()))?;

        Self::create(provider_name, provider_config, timeout)
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["openrouter", "openai", "anthropic"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn create_test_provider_config() -> ProviderConfig {
        ProviderConfig {
            enabled: true,
            model: "test-model".to_string(),
            api_key: Some("test-key".to_string()),
            ..Default::default()
        }
    }

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn test_create_openrouter_provider() {
        let config = create_test_provider_config();
        let provider = ProviderFactory::create("openrouter", &config, TIMEOUT).unwrap();
        assert_eq!(provider.provider_name(), "openrouter");
    }

    #[test]
    fn test_create_openai_provider() {
        let config = create_test_provider_config();
        let provider = ProviderFactory::create("openai", &config, TIMEOUT).unwrap();
        assert_eq!(provider.provider_name(), "openai");
    }

    #[test]
    fn test_create_anthropic_provider() {
        let config = create_test_provider_config();
        let provider = ProviderFactory::create("anthropic", &config, TIMEOUT).unwrap();
        assert_eq!(provider.provider_name(), "anthropic");
    }

    #[test]
    fn test_create_unknown_provider() {
        let config = create_test_provider_config();
        let result = ProviderFactory::create("unknown", &config, TIMEOUT);
        match result {
            Err(e) => assert!(e.to_string().contains("Unknown provider")),
            Ok(_) => panic!("expected an error"),
        }
    }

    #[test]
    fn test_create_disabled_provider() {
        let mut config = create_test_provider_config();
        config.enabled = false;

        let result = ProviderFactory::create("openrouter", &config, TIMEOUT);
        match result {
            Err(e) => assert!(e.to_string().contains("not enabled in configuration")),
            Ok(_) => panic!("expected an error"),
        }
    }

    #[test]
    fn test_get_default_provider() {
        let mut providers = HashMap::new();
        providers.insert("openai".to_string(), create_test_provider_config());

        let app_config = AppConfig {
            default_provider: "openai".to_string(),
            providers,
            ..Default::default()
        };

        let provider = ProviderFactory::get_default_provider(&app_config, TIMEOUT).unwrap();
        assert_eq!(provider.provider_name(), "openai");
    }

    #[test]
    fn test_get_default_provider_not_found() {
        let app_config = AppConfig {
            default_provider: "openai".to_string(),
            providers: HashMap::new(),
            ..Default::default()
        };

        let result = ProviderFactory::get_default_provider(&app_config, TIMEOUT);
        assert!(matches!(result, Err(ProviderError::UnknownProvider(_))));
    }

    #[test]
    fn test_available_providers() {
        let providers = ProviderFactory::available_providers();
        assert_eq!(providers.len(), 3);
        assert!(providers.contains(&"openrouter"));
        assert!(providers.contains(&"openai"));
        assert!(providers.contains(&"anthropic"));
    }
}
