//! Rule-based building blocks: template posts, keywords, hashtags and image ideas.

pub mod hashtags;
pub mod image_ideas;
pub mod keywords;
pub mod text;

pub use hashtags::{HashtagSuggester, DEFAULT_HASHTAG_COUNT, MAX_HASHTAGS};
pub use image_ideas::{parse_ideas, split_title_description, ImageIdeaComposer, DEFAULT_MAX_IDEAS};
pub use keywords::{KeywordExtractor, DEFAULT_MAX_KEYWORDS};
pub use text::{apply_tone, title_case, truncate_to_limit, TemplateTextComposer};
