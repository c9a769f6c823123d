//! Draft social media posts, hashtags and image ideas for a topic.
//!
//! Content comes either from built-in templates (no network, reproducible
//! under a seed) or from a remote language model. Posts and user preferences
//! can be kept in a SQLite database.
//!
//! ```
//! use social_content_generator::{generate_from_templates, ContentRequest, ContentType, Platform, Tone};
//!
//! let request = ContentRequest {
//!     topic: "cold brew coffee".to_string(),
//!     content_type: ContentType::Promotional,
//!     platforms: vec![Platform::Twitter],
//!     tone: Tone::Professional,
//!     cta: None,
//! };
//! let package = generate_from_templates(&request, Some(3));
//! assert!(package.posts[0].text.chars().count() <= 280);
//! ```

pub mod builder;
pub mod composers;
pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipelines;
pub mod providers;
pub mod storage;

use rand::rngs::StdRng;
use rand::SeedableRng;

pub use builder::{Backend, ContentGenerator, ContentGeneratorBuilder};
pub use config::AppConfig;
pub use error::{GeneratorError, ProviderError};
pub use model::{
    platform_limit, ComposedPost, ContentRequest, ContentType, GenerationRequest, ImageIdea,
    Platform, StructuredSummary, Tone, UsageStats, UserSettings,
};
pub use pipelines::{ContentPackage, ContentToolkit};
pub use providers::LlmProvider;
pub use storage::{PostRepository, SqlitePostRepository};

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Generate a full package from templates.
pub fn generate_from_templates(request: &ContentRequest, seed: Option<u64>) -> ContentPackage {
    let toolkit = ContentToolkit::new();
    pipelines::template::process(&toolkit, request, &mut rng_from(seed))
}

/// Generate a full package with a remote provider.
pub async fn generate_with_provider(
    request: &ContentRequest,
    provider: &dyn LlmProvider,
    seed: Option<u64>,
) -> Result<ContentPackage, GeneratorError> {
    let toolkit = ContentToolkit::new();
    let package = pipelines::llm::process(&toolkit, request, provider, &mut rng_from(seed)).await?;
    Ok(package)
}
