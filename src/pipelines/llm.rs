//! Generation backed by a remote text model.

use log::{debug, info};
use rand::Rng;

use super::{ContentPackage, ContentToolkit};
use crate::composers::{
    parse_ideas, truncate_to_limit, DEFAULT_HASHTAG_COUNT, DEFAULT_MAX_IDEAS, MAX_HASHTAGS,
};
use crate::error::ProviderError;
use crate::model::{ComposedPost, ContentRequest, Platform};
use crate::providers::prompt::{
    build_hashtags_prompt, build_image_ideas_prompt, build_package_prompt, build_posts_prompt,
};
use crate::providers::LlmProvider;

pub async fn process<R: Rng + ?Sized>(
    toolkit: &ContentToolkit,
    request: &ContentRequest,
    provider: &dyn LlmProvider,
    rng: &mut R,
) -> Result<ContentPackage, ProviderError> {
    info!(
        "Generating content for '{}' with {}",
        request.topic,
        provider.provider_name()
    );

    let mut posts = Vec::with_capacity(request.platforms.len());
    if !request.platforms.is_empty() {
        let reply = provider.generate(&build_posts_prompt(request)).await?;
        for req in request.per_platform() {
            let text = platform_text(&reply, req.platform);
            posts.push(ComposedPost::new(
                text,
                req.platform,
                req.content_type,
                req.tone,
            ));
        }
    }

    let sample = ContentPackage::sample_text(&posts, &request.topic).to_string();
    let hashtags = toolkit.hashtags.suggest(rng, &sample, DEFAULT_HASHTAG_COUNT);
    for post in &mut posts {
        post.hashtags = hashtags.clone();
    }

    let ideas_reply = provider
        .generate(&build_image_ideas_prompt(request))
        .await?;
    let image_ideas = parse_ideas(&ideas_reply);
    debug!("Parsed {} image ideas", image_ideas.len());
    let image_concepts = toolkit.images.compose_concepts(&sample, DEFAULT_MAX_IDEAS);

    let package_reply = provider.generate(&build_package_prompt(request)).await?;
    let summary = toolkit.parser.parse(&package_reply);

    let hashtags_reply = provider.generate(&build_hashtags_prompt(request)).await?;
    let enhanced_hashtags = toolkit.hashtags.extract(&hashtags_reply, MAX_HASHTAGS);

    Ok(ContentPackage {
        posts,
        hashtags,
        enhanced_hashtags,
        image_ideas,
        image_concepts,
        summary,
    })
}

/// Find the post for `platform` in a multi-platform reply.
///
/// Takes the rest of the line after the first mention of the platform name,
/// minus label punctuation. When the platform isn't mentioned the whole reply
/// is used. Either way the text is cut to the platform limit.
pub fn platform_text(reply: &str, platform: Platform) -> String {
    let name = platform.as_str();
    let text = match reply.find(name) {
        Some(start) => {
            let rest = &reply[start + name.len()..];
            let line = rest.split('\n').next().unwrap_or_default();
            line.trim_start_matches(|c: char| {
                c.is_whitespace() || matches!(c, ':' | '-' | '*' | '–' | '—')
            })
            .trim()
        }
        None => reply.trim(),
    };
    truncate_to_limit(text, platform.limit())
}
