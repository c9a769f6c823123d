//! Prompts sent to the remote provider in LLM mode.

use crate::model::{ContentRequest, Platform};

fn platform_list(platforms: &[Platform]) -> String {
    platforms
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Ask for one post per requested platform.
pub fn build_posts_prompt(request: &ContentRequest) -> String {
    format!(
        "Generate a {} social media post about '{}' for the following platforms: {}. \
         Use a {} tone. Call to action: {}. Return a post for each platform, \
         one per line, starting with the platform name.",
        request.content_type,
        request.topic,
        platform_list(&request.platforms),
        request.tone,
        request.cta_text().unwrap_or("None"),
    )
}

/// Ask for 3-5 "Title: Description" image ideas.
pub fn build_image_ideas_prompt(request: &ContentRequest) -> String {
    format!(
        "Given the topic '{}', content type '{}', and tone '{}', \
         generate 3-5 creative, visually descriptive image or photo ideas that would be perfect to accompany a social media post. \
         Each idea should have a short, catchy title and a detailed, vivid, and actionable description (at least 2 sentences). \
         Format as a numbered list, with each item as 'Title: Description'.",
        request.topic, request.content_type, request.tone,
    )
}

/// Ask for 7-10 hashtags tailored to the platforms.
pub fn build_hashtags_prompt(request: &ContentRequest) -> String {
    format!(
        "Generate a list of 7-10 highly relevant, trending, and platform-optimized hashtags for a social media post about '{}'. \
         The hashtags should maximize reach, engagement, and discoverability, mixing broad, niche, and branded tags. \
         Avoid banned or overused hashtags. Tailor them for these platforms: {}. \
         Return only the hashtags, each starting with #, separated by spaces or newlines.",
        request.topic,
        platform_list(&request.platforms),
    )
}

/// Ask for the four-part package read back by
/// [`StructuredResultParser`](crate::parsers::StructuredResultParser).
pub fn build_package_prompt(request: &ContentRequest) -> String {
    format!(
        "Generate a creative social media package for the topic '{}'.\n\
         Format the response as follows:\n\
         1. Caption (short, catchy, max 20 words)\n\
         2. Post Idea (detailed, creative, 2-3 sentences)\n\
         3. Suggested Hashtags (5, comma separated)\n\
         4. Visual/Design Suggestion (describe an image or design to accompany the post)\n\
         Content type: {}, Tone: {}, Call to action: {}.",
        request.topic,
        request.content_type,
        request.tone,
        request.cta_text().unwrap_or("None"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentType, Tone};

    fn request() -> ContentRequest {
        ContentRequest {
            topic: "cold brew".to_string(),
            content_type: ContentType::Promotional,
            platforms: vec![Platform::Twitter, Platform::LinkedIn],
            tone: Tone::Humorous,
            cta: None,
        }
    }

    #[test]
    fn test_posts_prompt() {
        let prompt = build_posts_prompt(&request());
        assert!(prompt.contains("promotional social media post about 'cold brew'"));
        assert!(prompt.contains("platforms: Twitter, LinkedIn."));
        assert!(prompt.contains("humorous tone"));
        assert!(prompt.contains("Call to action: None."));
    }

    #[test]
    fn test_posts_prompt_with_cta() {
        let mut req = request();
        req.cta = Some("Shop Now".to_string());
        assert!(build_posts_prompt(&req).contains("Call to action: Shop Now."));
    }

    #[test]
    fn test_image_ideas_prompt() {
        let prompt = build_image_ideas_prompt(&request());
        assert!(prompt.contains("'cold brew'"));
        assert!(prompt.contains("'Title: Description'"));
    }

    #[test]
    fn test_hashtags_prompt() {
        let prompt = build_hashtags_prompt(&request());
        assert!(prompt.contains("7-10"));
        assert!(prompt.contains("these platforms: Twitter, LinkedIn."));
    }

    #[test]
    fn test_package_prompt_lists_every_label() {
        let prompt = build_package_prompt(&request());
        for label in ["Caption", "Post Idea", "Suggested Hashtags", "Visual/Design Suggestion"] {
            assert!(prompt.contains(label), "missing {}", label);
        }
        assert!(prompt.ends_with("Call to action: None."));
    }
}
