use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{ContentType, GenerationRequest, Platform, Tone};

const TOPIC_PLACEHOLDER: &str = "{topic}";
const HUMOR_SUFFIX: &str = " 😄";
const ELLIPSIS: &str = "...";

const PROMOTIONAL: &[&str] = &[
    "🚀 Exciting news! {topic} is here to revolutionize your experience. Don't miss out on this amazing opportunity!",
    "✨ Discover the power of {topic}! Join thousands of satisfied customers who have already transformed their lives.",
    "🎯 Ready to take your {topic} to the next level? Our solution is exactly what you've been looking for!",
];

const INFORMATIVE: &[&str] = &[
    "Did you know that {topic} can significantly impact your daily routine? Here are some key insights to consider.",
    "Understanding {topic} is crucial in today's world. Let's explore the facts and benefits together.",
    "📊 Research shows that {topic} plays a vital role in modern business. Here's what you need to know.",
];

const QUESTION: &[&str] = &[
    "What's your experience with {topic}? We'd love to hear your thoughts and stories!",
    "How has {topic} changed your perspective? Share your insights in the comments below!",
    "🤔 What would you do if {topic} wasn't available? Let's discuss the alternatives!",
];

/// Fills a topic into a category template and fits it to a platform.
pub struct TemplateTextComposer {
    templates: HashMap<ContentType, Vec<String>>,
}

impl Default for TemplateTextComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateTextComposer {
    pub fn new() -> Self {
        let pool = |templates: &[&str]| templates.iter().map(|t| t.to_string()).collect();
        let templates = HashMap::from([
            (ContentType::Promotional, pool(PROMOTIONAL)),
            (ContentType::Informative, pool(INFORMATIVE)),
            (ContentType::Question, pool(QUESTION)),
        ]);
        TemplateTextComposer { templates }
    }

    /// Use custom template pools. Content types missing from the map use the
    /// `informative` pool, or the built-in one when that is missing as well.
    pub fn with_templates(templates: HashMap<ContentType, Vec<String>>) -> Self {
        TemplateTextComposer { templates }
    }

    fn pool(&self, content_type: ContentType) -> &[String] {
        self.templates
            .get(&content_type)
            .filter(|pool| !pool.is_empty())
            .or_else(|| {
                self.templates
                    .get(&ContentType::Informative)
                    .filter(|pool| !pool.is_empty())
            })
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Compose a post for one platform.
    ///
    /// The template is picked at random from the pool for `content_type`. The
    /// result never exceeds the platform's character limit.
    pub fn compose<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        topic: &str,
        content_type: ContentType,
        platform: Platform,
        tone: Tone,
        cta: Option<&str>,
    ) -> String {
        let template = match self.pool(content_type).choose(rng) {
            Some(template) => template.as_str(),
            None => INFORMATIVE[0],
        };

        let mut text = template.replace(TOPIC_PLACEHOLDER, topic);
        text = apply_tone(&text, tone);

        if let Some(cta) = cta.filter(|c| !c.is_empty()) {
            text.push(' ');
            text.push_str(cta);
        }

        truncate_to_limit(&text, platform.limit())
    }

    pub fn compose_request<R: Rng + ?Sized>(&self, rng: &mut R, request: &GenerationRequest) -> String {
        self.compose(
            rng,
            &request.topic,
            request.content_type,
            request.platform,
            request.tone,
            request.cta.as_deref(),
        )
    }
}

/// Tone post-processing: humorous gets a trailing emoji, professional loses
/// its exclamation marks.
pub fn apply_tone(text: &str, tone: Tone) -> String {
    match tone {
        Tone::Humorous => format!("{}{}", text, HUMOR_SUFFIX),
        Tone::Professional => text.replace('!', "."),
        Tone::Casual | Tone::Empathetic => text.to_string(),
    }
}

/// Cut `text` to at most `limit` characters, marking the cut with "...".
pub fn truncate_to_limit(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    if limit < ELLIPSIS.len() {
        return text.chars().take(limit).collect();
    }
    let mut truncated: String = text.chars().take(limit - ELLIPSIS.len()).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Uppercase every letter that follows a non-letter, lowercase the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_professional_coffee_on_twitter() {
        let composer = TemplateTextComposer::new();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let text = composer.compose(
                &mut rng,
                "coffee",
                ContentType::Promotional,
                Platform::Twitter,
                Tone::Professional,
                None,
            );
            assert!(text.chars().count() <= 280);
            assert!(!text.contains('!'));
            assert!(text.contains("coffee"));
        }
    }

    #[test]
    fn test_humorous_suffix() {
        let composer = TemplateTextComposer::new();
        let mut rng = StdRng::seed_from_u64(7);
        let text = composer.compose(
            &mut rng,
            "yoga",
            ContentType::Question,
            Platform::Facebook,
            Tone::Humorous,
            None,
        );
        assert!(text.ends_with(HUMOR_SUFFIX));
    }

    #[test]
    fn test_cta_appended_after_tone() {
        let composer = TemplateTextComposer::new();
        let mut rng = StdRng::seed_from_u64(1);
        let text = composer.compose(
            &mut rng,
            "yoga",
            ContentType::Question,
            Platform::Facebook,
            Tone::Professional,
            Some("Sign Up!"),
        );
        // The CTA is added after tone processing, so its "!" survives
        assert!(text.ends_with(" Sign Up!"));
    }

    #[test]
    fn test_empty_cta_is_not_appended() {
        let composer = TemplateTextComposer::new();
        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);
        let with_empty = composer.compose(
            &mut a,
            "tea",
            ContentType::Informative,
            Platform::LinkedIn,
            Tone::Casual,
            Some(""),
        );
        let without = composer.compose(
            &mut b,
            "tea",
            ContentType::Informative,
            Platform::LinkedIn,
            Tone::Casual,
            None,
        );
        assert_eq!(with_empty, without);
    }

    #[test]
    fn test_long_topic_is_truncated_to_limit() {
        let composer = TemplateTextComposer::new();
        let topic = "very long topic ".repeat(250);
        for platform in Platform::ALL {
            let mut rng = StdRng::seed_from_u64(11);
            let text = composer.compose(
                &mut rng,
                &topic,
                ContentType::Promotional,
                platform,
                Tone::Casual,
                Some("Learn More"),
            );
            assert_eq!(text.chars().count(), platform.limit());
            assert!(text.ends_with("..."));
        }
    }

    #[test]
    fn test_unknown_pool_falls_back_to_informative() {
        let composer = TemplateTextComposer::with_templates(HashMap::from([(
            ContentType::Informative,
            vec!["All about {topic}.".to_string()],
        )]));
        let mut rng = StdRng::seed_from_u64(0);
        let text = composer.compose(
            &mut rng,
            "bees",
            ContentType::Question,
            Platform::Twitter,
            Tone::Casual,
            None,
        );
        assert_eq!(text, "All about bees.");
    }

    #[test]
    fn test_topic_inserted_literally() {
        let composer = TemplateTextComposer::with_templates(HashMap::from([(
            ContentType::Informative,
            vec!["<{topic}>".to_string()],
        )]));
        let mut rng = StdRng::seed_from_u64(0);
        let text = composer.compose(
            &mut rng,
            "{topic} & <b>",
            ContentType::Informative,
            Platform::Twitter,
            Tone::Casual,
            None,
        );
        assert_eq!(text, "<{topic} & <b>>");
    }

    #[test]
    fn test_professional_tone_is_idempotent() {
        let once = apply_tone("Wow! Great! Really!", Tone::Professional);
        let twice = apply_tone(&once, Tone::Professional);
        assert_eq!(once, "Wow. Great. Really.");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_other_tones_leave_text_alone() {
        assert_eq!(apply_tone("Hi!", Tone::Casual), "Hi!");
        assert_eq!(apply_tone("Hi!", Tone::Empathetic), "Hi!");
    }

    #[test]
    fn test_truncate_counts_characters() {
        let text = "🚀".repeat(10);
        let truncated = truncate_to_limit(&text, 5);
        assert_eq!(truncated, "🚀🚀...");
        assert_eq!(truncate_to_limit("short", 280), "short");
        assert_eq!(truncate_to_limit("exactly", 7), "exactly");
    }

    #[test]
    fn test_truncate_tiny_limit_never_exceeds() {
        assert_eq!(truncate_to_limit("abcdef", 2), "ab");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("remote WORK"), "Remote Work");
        assert_eq!(title_case("ai-driven tools"), "Ai-Driven Tools");
        assert_eq!(title_case("brew_time"), "Brew_Time");
        assert_eq!(title_case("covid19cases"), "Covid19Cases");
    }
}
