//! SEO suggestions and the blog outline helper.

/// Suggest search-friendly phrasings for a topic.
///
/// These are fixed patterns, not model output; the sidebar renders them as
/// starting points for the keyword field.
#[must_use]
pub fn suggest_keywords(topic: &str) -> Vec<String> {
    vec![
        format!("Best {topic} tips"),
        format!("How to improve {topic}"),
        format!("Why {topic} matters"),
    ]
}

/// Render a markdown outline for the requested blog.
///
/// Sections are keyed to the first two keywords when present; fewer keywords
/// simply produce fewer sections.
#[must_use]
pub fn build_outline(topic: &str, keywords: &[String]) -> String {
    let mut outline = format!("- **Introduction:** Overview of {topic}\n- **Main Sections:**\n");
    for (index, keyword) in keywords.iter().take(2).enumerate() {
        let section = match index {
            0 => format!("Explanation of {keyword}"),
            _ => format!("Key points related to {keyword}"),
        };
        outline.push_str(&format!("    - Section {}: {section}\n", index + 1));
    }
    outline.push_str("- **Conclusion:** Wrapping up the blog and summarizing key points.\n");
    outline
}
