//! Rule-based generation: no network, randomness only from the caller's RNG.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use super::{ContentPackage, ContentToolkit};
use crate::composers::{title_case, DEFAULT_HASHTAG_COUNT, DEFAULT_MAX_IDEAS};
use crate::model::{ComposedPost, ContentRequest};

const SLOGANS: &[&str] = &["Unleash the Possibilities!", "Your Next Big Move!", "Level Up Today!"];

const PACKAGE_HASHTAGS: &[&str] = &[
    "#Inspire",
    "#Growth",
    "#Now",
    "#SocialTips",
    "#Engage",
    "#Trendy",
    "#Viral",
    "#Success",
    "#Create",
    "#Share",
];

pub fn process<R: Rng + ?Sized>(
    toolkit: &ContentToolkit,
    request: &ContentRequest,
    rng: &mut R,
) -> ContentPackage {
    let mut posts: Vec<ComposedPost> = request
        .per_platform()
        .map(|req| {
            let text = toolkit.text.compose_request(&mut *rng, &req);
            debug!("Composed {} post ({} chars)", req.platform, text.chars().count());
            ComposedPost::new(text, req.platform, req.content_type, req.tone)
        })
        .collect();

    let sample = ContentPackage::sample_text(&posts, &request.topic).to_string();
    let hashtags = toolkit.hashtags.suggest(rng, &sample, DEFAULT_HASHTAG_COUNT);
    for post in &mut posts {
        post.hashtags = hashtags.clone();
    }

    let keywords = toolkit.keywords.extract(&sample, usize::MAX);
    let enhanced_hashtags = toolkit.hashtags.enhanced(rng, &keywords);

    let image_ideas = toolkit
        .images
        .compose(&request.topic, request.tone, DEFAULT_MAX_IDEAS);
    let image_concepts = toolkit.images.compose_concepts(&sample, DEFAULT_MAX_IDEAS);

    let package_text = render_package(request, rng);
    let summary = toolkit.parser.parse(&package_text);

    ContentPackage {
        posts,
        hashtags,
        enhanced_hashtags,
        image_ideas,
        image_concepts,
        summary,
    }
}

/// Numbered caption/idea/hashtags/visual block in the same layout a remote
/// model is asked to produce.
pub fn render_package<R: Rng + ?Sized>(request: &ContentRequest, rng: &mut R) -> String {
    let slogan = SLOGANS.choose(rng).copied().unwrap_or_default();
    let caption = format!("{} - {}", title_case(&request.topic), slogan);
    let idea = format!(
        "Share insights about {} in a {} way. Encourage your audience to engage and take action.",
        request.topic, request.tone
    );
    let hashtags = PACKAGE_HASHTAGS
        .choose_multiple(rng, DEFAULT_HASHTAG_COUNT)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    let visual = format!(
        "A vibrant, eye-catching graphic featuring {} and a call-to-action button.",
        request.topic
    );

    format!(
        "1. Caption: {}\n2. Post Idea: {}\n3. Suggested Hashtags: {}\n4. Visual/Design Suggestion: {}",
        caption, idea, hashtags, visual
    )
}
