//! Prompt construction for the three generation calls.
//!
//! Every builder here is a pure function of its inputs: identical inputs
//! produce identical prompts.

use crate::core::models::{GenerationRequest, Language};

/// Extra tokens requested beyond the word budget so the model does not cut
/// off mid-thought before truncation runs.
pub const GENERATION_MARGIN_TOKENS: u32 = 150;

/// Temperature for the main blog generation call.
pub const GENERATION_TEMPERATURE: f32 = 0.7;

/// Token cap for the summary call.
pub const SUMMARY_MAX_TOKENS: u32 = 100;

/// Temperature for the summary call.
pub const SUMMARY_TEMPERATURE: f32 = 0.5;

/// Token cap for the closing-paragraph call.
pub const CONCLUSION_MAX_TOKENS: u32 = 80;

/// Max length accepted for a single keyword after trimming.
pub const MAX_KEYWORD_LEN: usize = 80;

/// Build the main blog-generation prompt.
///
/// No validation happens here: an empty topic produces a degenerate but
/// well-formed prompt, matching the permissive behavior of the form.
#[must_use]
pub fn build_blog_prompt(request: &GenerationRequest) -> String {
    let keywords = request.seo_keywords.join(", ");
    format!(
        "Write a well-structured blog about \"{topic}\" in {language}.\n\
         \n\
         - The blog must be written entirely in {language}.\n\
         - The blog should be approximately {words} words.\n\
         - Emphasize the following SEO keywords: {keywords}.\n\
         - Use proper headings, bullet points, and paragraphs.\n\
         - Ensure a natural conclusion that wraps up the topic properly.\n\
         - The final paragraph should summarize the blog and leave the reader with key takeaways.\n\
         - Do not stop mid-sentence. Ensure the response ends at a logical point.\n",
        topic = request.topic,
        language = request.language,
        words = request.target_word_count,
    )
}

/// Build the prompt for the 2-3 sentence summary call.
#[must_use]
pub fn build_summary_prompt(blog_content: &str, language: Language) -> String {
    format!("Summarize the following blog in {language} in 2-3 sentences:\n\n{blog_content}")
}

/// Build the prompt for a topic-aware closing paragraph.
///
/// Used when the truncated blog lacks a conclusion marker; replaces the
/// legacy behavior of appending a fixed, topic-unrelated paragraph.
#[must_use]
pub fn build_conclusion_prompt(topic: &str, language: Language) -> String {
    format!(
        "Write a short closing paragraph of about two sentences, in {language}, \
         that wraps up a blog about \"{topic}\". Start it with \"In conclusion\"."
    )
}

/// Split a comma-separated keyword field into clean keywords.
///
/// Trims whitespace, strips control characters, drops empties, and caps each
/// keyword's length. Order is preserved.
#[must_use]
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| {
            part.chars()
                .filter(|c| !c.is_control())
                .collect::<String>()
                .trim()
                .chars()
                .take(MAX_KEYWORD_LEN)
                .collect::<String>()
        })
        .filter(|keyword| !keyword.is_empty())
        .collect()
}
