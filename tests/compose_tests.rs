use blogsmith::compose::{
    CONCLUSION_MARKERS, append_conclusion, apply_conclusion_policy, has_conclusion_marker,
    needs_conclusion, truncate_to_target,
};

fn sample_text(sentences: usize) -> String {
    (0..sentences)
        .map(|i| format!("Sentence number {i}"))
        .collect::<Vec<_>>()
        .join(". ")
}

#[test]
fn test_truncate_below_ten_words_yields_stray_period() {
    // Documented boundary: fewer than 10 words keeps zero segments.
    let text = sample_text(5);
    for target in 0..=9 {
        assert_eq!(truncate_to_target(&text, target), ".");
    }
}

#[test]
fn test_truncate_keeps_one_segment_per_ten_words() {
    let text = sample_text(20);
    let truncated = truncate_to_target(&text, 100);
    let kept: Vec<&str> = truncated.trim_end_matches('.').split(". ").collect();
    assert_eq!(kept.len(), 10);
}

#[test]
fn test_truncate_target_not_multiple_of_ten_floors() {
    let text = sample_text(20);
    // 95 / 10 floors to 9 segments.
    let truncated = truncate_to_target(&text, 95);
    let kept: Vec<&str> = truncated.trim_end_matches('.').split(". ").collect();
    assert_eq!(kept.len(), 9);
}

#[test]
fn test_truncate_keeps_whole_text_when_short() {
    let text = sample_text(3);
    let truncated = truncate_to_target(&text, 100);
    assert_eq!(truncated, format!("{text}."));
}

#[test]
fn test_truncate_always_ends_with_period() {
    for target in [0, 50, 100, 1000] {
        assert!(truncate_to_target(&sample_text(12), target).ends_with('.'));
    }
}

#[test]
fn test_conclusion_marker_detection() {
    assert!(has_conclusion_marker("Blah. In conclusion, we are done."));
    assert!(has_conclusion_marker("Blah. To summarize: points were made."));
    assert!(!has_conclusion_marker("Blah blah, nothing conclusive."));
}

#[test]
fn test_conclusion_marker_is_case_sensitive() {
    // Lowercase variants do not count as markers.
    assert!(!has_conclusion_marker("in conclusion, lowercase"));
    assert_eq!(CONCLUSION_MARKERS, ["In conclusion", "To summarize"]);
}

#[test]
fn test_append_conclusion_separates_with_blank_line() {
    let combined = append_conclusion("Body text.", "In conclusion, done.");
    assert_eq!(combined, "Body text.\n\nIn conclusion, done.");
}

#[test]
fn test_needs_conclusion_inverts_marker_check() {
    assert!(needs_conclusion("Body text with no wrap-up."));
    assert!(!needs_conclusion("Body. In conclusion, done."));
}

#[test]
fn test_conclusion_policy_appends_when_marker_missing() {
    let text = "The blog body ends abruptly.".to_string();
    let result = apply_conclusion_policy(text, Some(" In conclusion, wrapped up. "));
    assert_eq!(
        result,
        "The blog body ends abruptly.\n\nIn conclusion, wrapped up."
    );
}

#[test]
fn test_conclusion_policy_never_appends_over_existing_marker() {
    // Text that already concludes stays unchanged even if a conclusion
    // was generated anyway.
    let text = "Body. In conclusion, the topic is covered.".to_string();
    let result = apply_conclusion_policy(text.clone(), Some("In conclusion, extra."));
    assert_eq!(result, text);

    let text = "Body. To summarize: all points made.".to_string();
    let result = apply_conclusion_policy(text.clone(), Some("In conclusion, extra."));
    assert_eq!(result, text);
}

#[test]
fn test_conclusion_policy_without_conclusion_is_identity() {
    let text = "Body with no marker.".to_string();
    assert_eq!(apply_conclusion_policy(text.clone(), None), text);
}
