use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;

use crate::composers::text::title_case;

pub const DEFAULT_HASHTAG_COUNT: usize = 5;
/// Hashtags taken from each matching category
const PER_CATEGORY: usize = 3;
/// Hashtags drawn from the trending pool per suggestion
const TRENDING_DRAWS: usize = 2;
/// Cap on enhanced and extracted hashtag lists
pub const MAX_HASHTAGS: usize = 10;

const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "business",
        &["#business", "#entrepreneur", "#startup", "#success", "#growth"],
    ),
    (
        "technology",
        &["#tech", "#innovation", "#digital", "#AI", "#future"],
    ),
    (
        "marketing",
        &["#marketing", "#socialmedia", "#branding", "#content", "#strategy"],
    ),
    (
        "health",
        &["#health", "#wellness", "#fitness", "#lifestyle", "#selfcare"],
    ),
    (
        "education",
        &["#education", "#learning", "#knowledge", "#skills", "#development"],
    ),
];

const TRENDING: &[&str] = &["#trending", "#viral", "#popular", "#2025", "#new"];

const FALLBACK: &[&str] = &["#content", "#social", "#post", "#share", "#engage"];

const CURATED: &[&str] = &[
    "#Viral",
    "#TrendingNow",
    "#MustSee",
    "#Inspiration",
    "#SocialMedia",
    "#GrowthHacks",
    "#BrandAwareness",
    "#Engage",
    "#ContentStrategy",
    "#ExplorePage",
];

/// Insertion-ordered set of hashtags.
#[derive(Debug, Default)]
struct OrderedTags {
    seen: HashSet<String>,
    tags: Vec<String>,
}

impl OrderedTags {
    fn insert(&mut self, tag: &str) {
        if self.seen.insert(tag.to_string()) {
            self.tags.push(tag.to_string());
        }
    }

    fn len(&self) -> usize {
        self.tags.len()
    }

    fn into_vec(self) -> Vec<String> {
        self.tags
    }
}

/// Suggests hashtags from category matches and fixed pools.
///
/// Output order is deterministic for a given random source: matching
/// categories in table order, then the trending draws, then fallback padding.
pub struct HashtagSuggester {
    categories: Vec<(String, Vec<String>)>,
    trending: Vec<String>,
    fallback: Vec<String>,
    curated: Vec<String>,
    hashtag: Regex,
}

impl Default for HashtagSuggester {
    fn default() -> Self {
        Self::new()
    }
}

fn owned(pool: &[&str]) -> Vec<String> {
    pool.iter().map(|t| t.to_string()).collect()
}

impl HashtagSuggester {
    pub fn new() -> Self {
        HashtagSuggester {
            categories: CATEGORIES
                .iter()
                .map(|(name, tags)| (name.to_string(), owned(tags)))
                .collect(),
            trending: owned(TRENDING),
            fallback: owned(FALLBACK),
            curated: owned(CURATED),
            hashtag: Regex::new(r"#\w+").expect("hashtag pattern is valid"),
        }
    }

    /// Suggest `count` hashtags for `text`.
    ///
    /// Returns exactly `count` tags unless the pools run dry, in which case
    /// everything available is returned. Padding makes a single pass over the
    /// fallback pool, so it always terminates.
    pub fn suggest<R: Rng + ?Sized>(&self, rng: &mut R, text: &str, count: usize) -> Vec<String> {
        let text_lower = text.to_lowercase();
        let mut suggested = OrderedTags::default();

        for (category, tags) in &self.categories {
            if text_lower.contains(category.as_str()) {
                for tag in tags.iter().take(PER_CATEGORY) {
                    suggested.insert(tag);
                }
            }
        }

        let draws = TRENDING_DRAWS.min(self.trending.len());
        for tag in self.trending.choose_multiple(rng, draws) {
            suggested.insert(tag);
        }

        let mut hashtags = suggested.into_vec();
        hashtags.truncate(count);

        for tag in &self.fallback {
            if hashtags.len() >= count {
                break;
            }
            if !hashtags.contains(tag) {
                hashtags.push(tag.clone());
            }
        }

        hashtags
    }

    /// Keyword hashtags followed by curated ones, deduplicated and capped at
    /// [`MAX_HASHTAGS`].
    pub fn enhanced<R: Rng + ?Sized>(&self, rng: &mut R, keywords: &[String]) -> Vec<String> {
        let mut tags = OrderedTags::default();
        for keyword in keywords.iter().take(DEFAULT_HASHTAG_COUNT) {
            tags.insert(&keyword_hashtag(keyword));
        }
        let draws = DEFAULT_HASHTAG_COUNT.min(self.curated.len());
        for tag in self.curated.choose_multiple(rng, draws) {
            tags.insert(tag);
        }

        let mut hashtags = tags.into_vec();
        hashtags.truncate(MAX_HASHTAGS);
        hashtags
    }

    /// Pull `#tags` out of free-form text, deduplicated in order of
    /// appearance and capped at `max`.
    pub fn extract(&self, raw: &str, max: usize) -> Vec<String> {
        let mut tags = OrderedTags::default();
        for found in self.hashtag.find_iter(raw) {
            if tags.len() >= max {
                break;
            }
            tags.insert(found.as_str());
        }
        tags.into_vec()
    }

    /// Every hashtag `suggest` can ever return, deduplicated.
    pub fn reachable(&self) -> Vec<String> {
        let mut tags = OrderedTags::default();
        self.categories
            .iter()
            .flat_map(|(_, pool)| pool.iter().take(PER_CATEGORY))
            .chain(&self.trending)
            .chain(&self.fallback)
            .for_each(|tag| tags.insert(tag));
        tags.into_vec()
    }
}

/// "machine learning" -> "#MachineLearning", "brew_time" -> "#Brew_Time"
fn keyword_hashtag(keyword: &str) -> String {
    let titled: String = title_case(keyword).split_whitespace().collect();
    format!("#{}", titled)
}
