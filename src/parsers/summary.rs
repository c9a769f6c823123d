use regex::Regex;

use crate::model::StructuredSummary;

const CAPTION: &str = "Caption";
const POST_IDEA: &str = "Post Idea";
const HASHTAGS: &str = "Hashtags";
const VISUAL: &str = "Visual/Design Suggestion";

/// Extracts the four labeled fields of a content package from one blob of
/// text.
///
/// Each label is searched independently over the whole text, so a label
/// that also occurs inside another field's line can be picked up from the
/// wrong place. A missing label yields an empty field.
pub struct StructuredResultParser {
    list_marker: Regex,
    caption: Regex,
    post_idea: Regex,
    hashtags: Regex,
    visual: Regex,
}

impl Default for StructuredResultParser {
    fn default() -> Self {
        Self::new()
    }
}

fn label_pattern(label: &str) -> Regex {
    // `[:\s]*` may cross a line break, so "Caption:\nfoo" captures "foo"
    Regex::new(&format!(r"(?i){}[:\s]*([^\n]*)", regex::escape(label)))
        .expect("label pattern is valid")
}

impl StructuredResultParser {
    pub fn new() -> Self {
        StructuredResultParser {
            list_marker: Regex::new(r"\n?\d+\.\s*").expect("list marker pattern is valid"),
            caption: label_pattern(CAPTION),
            post_idea: label_pattern(POST_IDEA),
            hashtags: label_pattern(HASHTAGS),
            visual: label_pattern(VISUAL),
        }
    }

    pub fn parse(&self, raw: &str) -> StructuredSummary {
        let text = self.list_marker.replace_all(raw, "\n");
        StructuredSummary {
            caption: capture(&self.caption, &text),
            post_idea: capture(&self.post_idea, &text),
            hashtags: capture(&self.hashtags, &text),
            visual_suggestion: capture(&self.visual, &text),
        }
    }
}

fn capture(pattern: &Regex, text: &str) -> String {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}
