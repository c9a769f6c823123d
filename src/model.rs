use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;

/// Length limit applied to platforms we don't know about.
pub const DEFAULT_PLATFORM_LIMIT: usize = 2000;

/// Target social media platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Platform {
    Twitter,
    Facebook,
    Instagram,
    LinkedIn,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Twitter,
        Platform::Facebook,
        Platform::Instagram,
        Platform::LinkedIn,
    ];

    /// Maximum number of characters accepted for a post
    pub fn limit(self) -> usize {
        match self {
            Platform::Twitter => 280,
            Platform::Facebook => 2000,
            Platform::Instagram => 2200,
            Platform::LinkedIn => 3000,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Twitter => "Twitter",
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::LinkedIn => "LinkedIn",
        }
    }
}

/// Character limit for a platform given by name.
///
/// Unknown names get [`DEFAULT_PLATFORM_LIMIT`].
pub fn platform_limit(name: &str) -> usize {
    name.parse::<Platform>()
        .map(Platform::limit)
        .unwrap_or(DEFAULT_PLATFORM_LIMIT)
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GeneratorError::InvalidInput(format!("unknown platform '{}'", s)))
    }
}

/// Category of post to write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Promotional,
    #[default]
    Informative,
    Question,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [
        ContentType::Promotional,
        ContentType::Informative,
        ContentType::Question,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Promotional => "promotional",
            ContentType::Informative => "informative",
            ContentType::Question => "question",
        }
    }

    /// Parse a content type, falling back to `informative` for anything unrecognized.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GeneratorError::InvalidInput(format!("unknown content type '{}'", s)))
    }
}

/// Tone of voice for generated text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Humorous,
    Empathetic,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Professional, Tone::Casual, Tone::Humorous, Tone::Empathetic];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Humorous => "humorous",
            Tone::Empathetic => "empathetic",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GeneratorError::InvalidInput(format!("unknown tone '{}'", s)))
    }
}

/// A request for one post on one platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub topic: String,
    pub content_type: ContentType,
    pub platform: Platform,
    pub tone: Tone,
    pub cta: Option<String>,
}

/// A request covering every platform the user picked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRequest {
    pub topic: String,
    pub content_type: ContentType,
    pub platforms: Vec<Platform>,
    pub tone: Tone,
    pub cta: Option<String>,
}

impl ContentRequest {
    /// Split into one [`GenerationRequest`] per platform, in the order given.
    pub fn per_platform(&self) -> impl Iterator<Item = GenerationRequest> + '_ {
        self.platforms.iter().map(move |&platform| GenerationRequest {
            topic: self.topic.clone(),
            content_type: self.content_type,
            platform,
            tone: self.tone,
            cta: self.cta.clone(),
        })
    }

    /// The call to action, if one was given and isn't blank.
    pub fn cta_text(&self) -> Option<&str> {
        self.cta.as_deref().filter(|c| !c.trim().is_empty())
    }
}

/// A finished post ready to be shown or stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposedPost {
    /// Assigned by the repository once saved
    pub id: Option<i64>,
    pub text: String,
    pub platform: Platform,
    pub hashtags: Vec<String>,
    pub content_type: ContentType,
    pub tone: Tone,
    pub created_at: DateTime<Utc>,
}

impl ComposedPost {
    pub fn new(
        text: impl Into<String>,
        platform: Platform,
        content_type: ContentType,
        tone: Tone,
    ) -> Self {
        ComposedPost {
            id: None,
            text: text.into(),
            platform,
            hashtags: Vec::new(),
            content_type,
            tone,
            created_at: Utc::now(),
        }
    }

    pub fn with_hashtags(mut self, hashtags: Vec<String>) -> Self {
        self.hashtags = hashtags;
        self
    }
}

/// A companion image concept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageIdea {
    pub title: String,
    pub description: Option<String>,
}

impl fmt::Display for ImageIdea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "{}: {}", self.title, desc),
            None => f.write_str(&self.title),
        }
    }
}

/// Four-field breakdown of a generated content package.
/// Fields are empty strings when the source text didn't contain them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StructuredSummary {
    pub caption: String,
    pub post_idea: String,
    pub hashtags: String,
    pub visual_suggestion: String,
}

/// Stored user preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub default_tone: Tone,
    pub default_platforms: Vec<Platform>,
    pub api_key: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        UserSettings {
            default_tone: Tone::Professional,
            default_platforms: vec![Platform::Facebook, Platform::Twitter],
            api_key: String::new(),
        }
    }
}

/// Post counts broken down by platform and tone
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UsageStats {
    pub total: usize,
    pub by_platform: BTreeMap<Platform, usize>,
    pub by_tone: BTreeMap<Tone, usize>,
}

impl UsageStats {
    pub fn from_posts(posts: &[ComposedPost]) -> Self {
        let mut stats = UsageStats {
            total: posts.len(),
            ..Default::default()
        };
        for post in posts {
            *stats.by_platform.entry(post.platform).or_default() += 1;
            *stats.by_tone.entry(post.tone).or_default() += 1;
        }
        stats
    }
}
