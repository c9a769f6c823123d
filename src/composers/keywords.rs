use std::collections::HashSet;

use regex::Regex;

/// Articles, prepositions, conjunctions and common pronouns.
///
/// Anything of three characters or fewer is dropped by length already; the
/// short ones stay listed so the set reads as a complete list.
const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "this", "that", "from", "about", "your", "you", "our", "their", "it's", "its",
];

pub const DEFAULT_MAX_KEYWORDS: usize = 5;

/// Pulls candidate keywords out of free text.
pub struct KeywordExtractor {
    word: Regex,
    stopwords: HashSet<&'static str>,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    pub fn new() -> Self {
        KeywordExtractor {
            word: Regex::new(r"\w+").expect("keyword pattern is valid"),
            stopwords: STOPWORDS.iter().copied().collect(),
        }
    }

    /// Extract up to `max_count` lowercase keywords in first-occurrence order.
    ///
    /// Tokens of three characters or fewer and stopwords are skipped. Repeated
    /// words are reported every time they occur.
    pub fn extract(&self, text: &str, max_count: usize) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.word
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|word| word.chars().count() > 3 && !self.stopwords.contains(word))
            .take(max_count)
            .map(str::to_string)
            .collect()
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word.to_lowercase().as_str())
    }
}
