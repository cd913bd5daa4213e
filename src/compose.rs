//! Length truncation and the conclusion-marker check.
//!
//! `truncate_to_target` reproduces the legacy segment heuristic exactly: the
//! generated text is split on ". " and the first `target / 10` segments are
//! kept. For targets below 10 this yields a single stray period; the HTTP
//! surface never requests fewer than 50 words, so that boundary is only
//! reachable by calling the function directly.

/// Markers whose presence means the text already ends with a conclusion.
pub const CONCLUSION_MARKERS: [&str; 2] = ["In conclusion", "To summarize"];

/// Keep the first `target_word_count / 10` sentence-like segments.
///
/// Segments are delimited by ". "; the kept segments are re-joined with ". "
/// and a trailing period is appended. Texts with fewer segments than the
/// budget are kept whole.
#[must_use]
pub fn truncate_to_target(text: &str, target_word_count: u32) -> String {
    let keep = (target_word_count / 10) as usize;
    let segments: Vec<&str> = text.split(". ").take(keep).collect();
    format!("{}.", segments.join(". "))
}

/// Whether the text already carries a conclusion marker.
#[must_use]
pub fn has_conclusion_marker(text: &str) -> bool {
    CONCLUSION_MARKERS.iter().any(|marker| text.contains(marker))
}

/// Whether the text still needs a generated closing paragraph.
#[must_use]
pub fn needs_conclusion(text: &str) -> bool {
    !has_conclusion_marker(text)
}

/// Append a generated closing paragraph after a blank line.
#[must_use]
pub fn append_conclusion(text: &str, conclusion: &str) -> String {
    format!("{text}\n\n{conclusion}")
}

/// Splice a generated conclusion into the truncated text.
///
/// The append is guarded: text that already carries a conclusion marker is
/// returned unchanged even when a conclusion was supplied.
#[must_use]
pub fn apply_conclusion_policy(text: String, conclusion: Option<&str>) -> String {
    match conclusion {
        Some(conclusion) if needs_conclusion(&text) => append_conclusion(&text, conclusion.trim()),
        _ => text,
    }
}
