use std::time::Duration;

use log::debug;

use crate::config::AppConfig;
use crate::error::GeneratorError;
use crate::model::{ContentRequest, ContentType, Platform, Tone};
use crate::pipelines::{self, ContentPackage, ContentToolkit};
use crate::providers::{FallbackProvider, LlmProvider, ProviderFactory};

/// Remote backend used when generating with a language model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    OpenRouter,
    OpenAI,
    Anthropic,
}

impl Backend {
    /// Convert to provider name string used by the factory
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::OpenRouter => "openrouter",
            Backend::OpenAI => "openai",
            Backend::Anthropic => "anthropic",
        }
    }
}

/// Builder for configuring and running one content generation request
#[derive(Default)]
pub struct ContentGeneratorBuilder {
    topic: Option<String>,
    content_type: ContentType,
    platforms: Vec<Platform>,
    tone: Tone,
    cta: Option<String>,
    seed: Option<u64>,
    use_llm: bool,
    backend: Option<Backend>,
    api_key: Option<String>,
    model: Option<String>,
    timeout: Option<Duration>,
    custom_provider: Option<Box<dyn LlmProvider>>,
    config: Option<AppConfig>,
}

impl ContentGeneratorBuilder {
    /// Set the subject the posts are about
    ///
    /// # Example
    /// ```
    /// use social_content_generator::ContentGenerator;
    ///
    /// let builder = ContentGenerator::builder().topic("cold brew coffee");
    /// ```
    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    /// Add one target platform. Platforms keep the order they were added in.
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platforms.push(platform);
        self
    }

    /// Replace the target platforms
    pub fn platforms(mut self, platforms: impl IntoIterator<Item = Platform>) -> Self {
        self.platforms = platforms.into_iter().collect();
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Call to action appended to every post
    pub fn cta(mut self, cta: impl Into<String>) -> Self {
        self.cta = Some(cta.into());
        self
    }

    /// Seed the random choices so the same request gives the same output
    ///
    /// # Example
    /// ```
    /// use social_content_generator::{ContentGenerator, Platform};
    ///
    /// let builder = ContentGenerator::builder()
    ///     .topic("cold brew coffee")
    ///     .platform(Platform::Twitter)
    ///     .seed(42);
    /// ```
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generate with the configured default provider instead of templates
    pub fn llm(mut self) -> Self {
        self.use_llm = true;
        self
    }

    /// Generate with a specific remote backend
    ///
    /// # Example
    /// ```
    /// use social_content_generator::{Backend, ContentGenerator};
    ///
    /// let builder = ContentGenerator::builder()
    ///     .topic("cold brew coffee")
    ///     .provider(Backend::Anthropic);
    /// ```
    pub fn provider(mut self, backend: Backend) -> Self {
        self.backend = Some(backend);
        self.use_llm = true;
        self
    }

    /// Set the API key for the remote backend
    ///
    /// Overrides configuration files and environment variables.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self.use_llm = true;
        self
    }

    /// Set the model name for the remote backend
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self.use_llm = true;
        self
    }

    /// Set a timeout for remote requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Use an already constructed provider, bypassing configuration
    pub fn with_provider(mut self, provider: Box<dyn LlmProvider>) -> Self {
        self.custom_provider = Some(provider);
        self.use_llm = true;
        self
    }

    /// Use this configuration instead of loading `config.toml` and the environment
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build and run the generation request
    ///
    /// Without any provider settings the rule-based templates are used and no
    /// network access happens.
    ///
    /// # Errors
    /// Returns `GeneratorError` if:
    /// - No topic was specified, or it is blank
    /// - The remote provider cannot be created or a remote call fails
    /// - Configuration cannot be loaded
    ///
    /// # Example
    /// ```
    /// # use social_content_generator::{ContentGenerator, Platform, Tone};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let package = ContentGenerator::builder()
    ///     .topic("cold brew coffee")
    ///     .platform(Platform::Twitter)
    ///     .tone(Tone::Casual)
    ///     .seed(7)
    ///     .build()
    ///     .await?;
    /// assert_eq!(package.posts.len(), 1);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<ContentPackage, GeneratorError> {
        let topic = self.topic.ok_or_else(|| {
            GeneratorError::BuilderError("No topic specified. Use .topic()".to_string())
        })?;
        if topic.trim().is_empty() {
            return Err(GeneratorError::InvalidInput(
                "Topic cannot be empty".to_string(),
            ));
        }

        let request = ContentRequest {
            topic,
            content_type: self.content_type,
            platforms: self.platforms,
            tone: self.tone,
            cta: self.cta,
        };
        let mut rng = crate::rng_from(self.seed);
        let toolkit = ContentToolkit::new();

        if !self.use_llm {
            debug!("Generating '{}' from templates", request.topic);
            return Ok(pipelines::template::process(&toolkit, &request, &mut rng));
        }

        let provider: Box<dyn LlmProvider> = match self.custom_provider {
            Some(provider) => provider,
            None => {
                let config = match self.config {
                    Some(config) => config,
                    None => AppConfig::load()?,
                };
                let timeout = request_timeout(self.timeout, &config);
                let overridden =
                    self.backend.is_some() || self.api_key.is_some() || self.model.is_some();

                if overridden {
                    let name = self
                        .backend
                        .map(|b| b.as_str().to_string())
                        .unwrap_or_else(|| config.default_provider.clone());
                    let mut provider_config = config.provider(&name);
                    if let Some(key) = self.api_key {
                        provider_config.api_key = Some(key);
                    }
                    if let Some(model) = self.model {
                        provider_config.model = model;
                    }
                    ProviderFactory::create(&name, &provider_config, timeout)?
                } else {
                    Box::new(FallbackProvider::with_timeout(&config, timeout)?)
                }
            }
        };

        let package =
            pipelines::llm::process(&toolkit, &request, provider.as_ref(), &mut rng).await?;
        Ok(package)
    }
}

/// The builder's timeout if one was set, else the configured one
fn request_timeout(requested: Option<Duration>, config: &AppConfig) -> Duration {
    requested.unwrap_or_else(|| config.timeout())
}

/// Main entry point for the builder API
pub struct ContentGenerator;

impl ContentGenerator {
    /// Creates a new builder for a generation request
    ///
    /// # Example
    /// ```
    /// use social_content_generator::ContentGenerator;
    ///
    /// let builder = ContentGenerator::builder();
    /// ```
    pub fn builder() -> ContentGeneratorBuilder {
        ContentGeneratorBuilder::default()
    }
}
