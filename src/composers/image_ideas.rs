use crate::composers::keywords::KeywordExtractor;
use crate::composers::text::title_case;
use crate::model::{ImageIdea, Tone};

pub const DEFAULT_MAX_IDEAS: usize = 5;
/// Styles and elements used for the cross product
const STYLE_LIMIT: usize = 3;
const ELEMENT_LIMIT: usize = 2;
/// Keywords mentioned in a concept line
const CONCEPT_KEYWORDS: usize = 2;
/// Free-text lines shorter than this are headings or noise
const MIN_IDEA_WORDS: usize = 3;

const STYLES: &[&str] = &[
    "professional photography",
    "minimalist design",
    "vibrant colors",
    "modern illustration",
    "infographic style",
];

const ELEMENTS: &[&str] = &[
    "people working together",
    "technology devices",
    "abstract concepts",
    "nature elements",
    "geometric shapes",
];

/// Title/description separators, in priority order
const SEPARATORS: &[&str] = &[": ", " - ", " – ", " — ", ". "];

/// Builds companion image concepts for a post.
pub struct ImageIdeaComposer {
    styles: Vec<String>,
    elements: Vec<String>,
    keywords: KeywordExtractor,
}

impl Default for ImageIdeaComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageIdeaComposer {
    pub fn new() -> Self {
        ImageIdeaComposer {
            styles: STYLES.iter().map(|s| s.to_string()).collect(),
            elements: ELEMENTS.iter().map(|e| e.to_string()).collect(),
            keywords: KeywordExtractor::new(),
        }
    }

    fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.styles.iter().take(STYLE_LIMIT).flat_map(move |style| {
            self.elements
                .iter()
                .take(ELEMENT_LIMIT)
                .map(move |element| (style.as_str(), element.as_str()))
        })
    }

    /// Template ideas for a topic: each style paired with each element, cut off
    /// at `max_ideas`.
    pub fn compose(&self, topic: &str, tone: Tone, max_ideas: usize) -> Vec<ImageIdea> {
        self.pairs()
            .take(max_ideas)
            .map(|(style, element)| ImageIdea {
                title: title_case(style),
                description: Some(format!(
                    "Shows {} around {}, presented as {} with a {} feel.",
                    element, topic, style, tone
                )),
            })
            .collect()
    }

    /// One-line concepts ("Style featuring element related to k1, k2") built
    /// from the keywords of an already written post.
    pub fn compose_concepts(&self, text: &str, max_ideas: usize) -> Vec<String> {
        let keywords = self.keywords.extract(text, CONCEPT_KEYWORDS);
        self.pairs()
            .take(max_ideas)
            .map(|(style, element)| {
                if keywords.is_empty() {
                    format!("{} featuring {}", title_case(style), element)
                } else {
                    format!(
                        "{} featuring {} related to {}",
                        title_case(style),
                        element,
                        keywords.join(", ")
                    )
                }
            })
            .collect()
    }
}

/// Parse ideas out of free-form text, one idea per line.
///
/// Lines with fewer than three words or no letters are skipped. Leading list
/// numbering and bullets are stripped, then the line is split into title and
/// description on the first separator from [`SEPARATORS`] that occurs in it.
pub fn parse_ideas(raw: &str) -> Vec<ImageIdea> {
    raw.lines()
        .map(|line| line.trim_matches(|c: char| c.is_whitespace() || c == '.' || c == '-'))
        .filter(|line| !line.is_empty())
        .map(strip_list_marker)
        .filter(|line| is_idea_line(line))
        .map(split_title_description)
        .collect()
}

fn strip_list_marker(line: &str) -> &str {
    line.trim_start_matches(|c: char| {
        c.is_ascii_digit() || c.is_whitespace() || matches!(c, '.' | '-' | ')' | '*' | '•')
    })
    .trim()
}

fn is_idea_line(line: &str) -> bool {
    line.split_whitespace().count() >= MIN_IDEA_WORDS && line.chars().any(char::is_alphabetic)
}

/// Split a single line into an idea. Without a separator the whole line is
/// the title.
pub fn split_title_description(line: &str) -> ImageIdea {
    for sep in SEPARATORS {
        if let Some((title, description)) = line.split_once(sep) {
            let description = description.trim();
            return ImageIdea {
                title: title.trim().to_string(),
                description: (!description.is_empty()).then(|| description.to_string()),
            };
        }
    }
    ImageIdea {
        title: line.trim().to_string(),
        description: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_cross_product() {
        let composer = ImageIdeaComposer::new();
        let ideas = composer.compose("coffee", Tone::Casual, 10);
        // 3 styles x 2 elements
        assert_eq!(ideas.len(), 6);
        assert_eq!(ideas[0].title, "Professional Photography");
        assert_eq!(ideas[1].title, "Professional Photography");
        assert_eq!(ideas[2].title, "Minimalist Design");
        assert_eq!(ideas[5].title, "Vibrant Colors");
        for idea in &ideas {
            let desc = idea.description.as_deref().unwrap();
            assert!(desc.contains("coffee"));
            assert!(desc.contains("casual"));
        }
        assert!(ideas[1]
            .description
            .as_deref()
            .unwrap()
            .contains("technology devices"));
    }

    #[test]
    fn test_compose_stops_at_max() {
        let composer = ImageIdeaComposer::new();
        assert_eq!(composer.compose("tea", Tone::Professional, DEFAULT_MAX_IDEAS).len(), 5);
        assert!(composer.compose("tea", Tone::Professional, 0).is_empty());
    }

    #[test]
    fn test_concepts_with_keywords() {
        let composer = ImageIdeaComposer::new();
        let concepts = composer.compose_concepts("Discover the power of coffee today", 5);
        assert_eq!(concepts.len(), 5);
        assert_eq!(
            concepts[0],
            "Professional Photography featuring people working together related to discover, power"
        );
    }

    #[test]
    fn test_concepts_keep_repeated_keywords() {
        let composer = ImageIdeaComposer::new();
        let concepts = composer.compose_concepts("Coffee coffee morning", 1);
        assert_eq!(
            concepts,
            vec!["Professional Photography featuring people working together related to coffee, coffee"]
        );
    }

    #[test]
    fn test_concepts_without_keywords() {
        let composer = ImageIdeaComposer::new();
        let concepts = composer.compose_concepts("a b c", 2);
        assert_eq!(
            concepts,
            vec![
                "Professional Photography featuring people working together",
                "Professional Photography featuring technology devices",
            ]
        );
    }

    #[test]
    fn test_parse_numbered_list() {
        let raw = "Here are some ideas:\n\n1. Morning Ritual: A steaming mug on a windowsill. Soft light.\n2. Bean Macro - Close-up of roasted beans\n3) Barista at work — hands pouring latte art\n";
        let ideas = parse_ideas(raw);
        assert_eq!(ideas.len(), 4);
        // A trailing colon is not a separator, so the intro line survives whole
        assert_eq!(ideas[0].title, "Here are some ideas:");
        assert_eq!(ideas[0].description, None);
        assert_eq!(ideas[1].title, "Morning Ritual");
        assert_eq!(
            ideas[1].description.as_deref(),
            Some("A steaming mug on a windowsill. Soft light")
        );
        assert_eq!(ideas[2].title, "Bean Macro");
        assert_eq!(
            ideas[2].description.as_deref(),
            Some("Close-up of roasted beans")
        );
        assert_eq!(ideas[3].title, "Barista at work");
        assert_eq!(
            ideas[3].description.as_deref(),
            Some("hands pouring latte art")
        );
    }

    #[test]
    fn test_parse_skips_short_and_letterless_lines() {
        let raw = "Ideas\n---\n1. 2. 3.\n12 34 56\n- Cozy reading nook scene";
        let ideas = parse_ideas(raw);
        assert_eq!(ideas.len(), 1);
        assert_eq!(ideas[0].title, "Cozy reading nook scene");
    }

    #[test]
    fn test_no_separator_gives_title_only() {
        let idea = split_title_description("  A quiet forest path at dawn  ");
        assert_eq!(idea.title, "A quiet forest path at dawn");
        assert_eq!(idea.description, None);
    }

    #[test]
    fn test_separator_priority() {
        // ": " wins over " - " even though " - " comes first in the line
        let idea = split_title_description("Calm - quiet scene: soft focus");
        assert_eq!(idea.title, "Calm - quiet scene");
        assert_eq!(idea.description.as_deref(), Some("soft focus"));

        let idea = split_title_description("Sunrise. Golden light over hills");
        assert_eq!(idea.title, "Sunrise");
        assert_eq!(idea.description.as_deref(), Some("Golden light over hills"));
    }

    #[test]
    fn test_empty_description_is_absent() {
        let idea = split_title_description("Title with colon: ");
        assert_eq!(idea.title, "Title with colon");
        assert_eq!(idea.description, None);
    }

    #[test]
    fn test_bullets_stripped() {
        let ideas = parse_ideas("* Neon city street: rain reflections\n• Picnic table flat-lay shot");
        assert_eq!(ideas[0].title, "Neon city street");
        assert_eq!(ideas[1].title, "Picnic table flat-lay shot");
    }
}
