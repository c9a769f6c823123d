pub mod llm;
pub mod template;

use crate::composers::{HashtagSuggester, ImageIdeaComposer, KeywordExtractor, TemplateTextComposer};
use crate::model::{ComposedPost, ImageIdea, StructuredSummary};
use crate::parsers::StructuredResultParser;

/// Everything generated for one request.
#[derive(Debug, Clone, Default)]
pub struct ContentPackage {
    /// One post per requested platform, in request order
    pub posts: Vec<ComposedPost>,
    /// Hashtags attached to every post
    pub hashtags: Vec<String>,
    /// Longer hashtag list shown alongside the posts
    pub enhanced_hashtags: Vec<String>,
    pub image_ideas: Vec<ImageIdea>,
    /// Short style/element concepts keyed to the words of the first post
    pub image_concepts: Vec<String>,
    pub summary: StructuredSummary,
}

impl ContentPackage {
    /// Text the hashtags and keywords are derived from: the first post, or the
    /// topic when no platform was requested.
    pub(crate) fn sample_text<'a>(posts: &'a [ComposedPost], topic: &'a str) -> &'a str {
        posts.first().map(|p| p.text.as_str()).unwrap_or(topic)
    }
}

/// The stateless composers, built once and shared by every request.
#[derive(Default)]
pub struct ContentToolkit {
    pub text: TemplateTextComposer,
    pub keywords: KeywordExtractor,
    pub hashtags: HashtagSuggester,
    pub images: ImageIdeaComposer,
    pub parser: StructuredResultParser,
}

impl ContentToolkit {
    pub fn new() -> Self {
        Self::default()
    }
}
