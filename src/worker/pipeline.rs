//! The content request handler: one sequential pass per submission.
//!
//! generate -> truncate -> conclusion policy -> summarize -> synthesize.
//! Each stage blocks until complete; there is no batching, retry, or
//! background work, and nothing survives the request.

use tracing::{info, warn};

use crate::ai::LlmClient;
use crate::compose;
use crate::core::models::{GenerationRequest, GenerationResult};
use crate::errors::BlogError;
use crate::prompt;
use crate::tts::TtsClient;

/// Run the full pipeline for one submission.
///
/// An unsupported language for audio is non-fatal: the text and summary still
/// succeed and `audio_path` stays `None`. Every other failure is terminal.
///
/// # Errors
///
/// Returns `GenerationFailure` when any of the model calls fail and
/// `HttpError`/`IoError` when audio synthesis fails for a supported language.
pub async fn process_request(
    llm: &LlmClient,
    tts: &TtsClient,
    request: &GenerationRequest,
) -> Result<GenerationResult, BlogError> {
    info!(
        topic = %request.topic,
        words = request.target_word_count,
        language = %request.language,
        "Processing generation request"
    );

    let blog_prompt = prompt::build_blog_prompt(request);
    let max_tokens = request.target_word_count + prompt::GENERATION_MARGIN_TOKENS;
    let full_text = llm
        .generate(&blog_prompt, max_tokens, prompt::GENERATION_TEMPERATURE)
        .await?;

    let truncated_text = compose::truncate_to_target(&full_text, request.target_word_count);

    // Conclusion policy: ask the model for a topic-aware closing paragraph
    // instead of injecting fixed text. Skipped when a marker already exists.
    let conclusion = if compose::needs_conclusion(&truncated_text) {
        let conclusion_prompt = prompt::build_conclusion_prompt(&request.topic, request.language);
        Some(
            llm.generate(
                &conclusion_prompt,
                prompt::CONCLUSION_MAX_TOKENS,
                prompt::GENERATION_TEMPERATURE,
            )
            .await?,
        )
    } else {
        None
    };
    let truncated_text = compose::apply_conclusion_policy(truncated_text, conclusion.as_deref());

    let summary_prompt = prompt::build_summary_prompt(&truncated_text, request.language);
    let summary = llm
        .generate(
            &summary_prompt,
            prompt::SUMMARY_MAX_TOKENS,
            prompt::SUMMARY_TEMPERATURE,
        )
        .await?;

    let audio_path = match tts
        .synthesize(&truncated_text, request.language.as_str())
        .await
    {
        Ok(path) => Some(path),
        Err(BlogError::UnsupportedLanguageForAudio(language)) => {
            warn!(%language, "Skipping audio for unsupported language");
            None
        }
        Err(other) => return Err(other),
    };

    Ok(GenerationResult {
        full_text,
        truncated_text,
        summary: Some(summary),
        audio_path,
    })
}

/// Validate a submission against the form's constraints.
///
/// The prompt builder itself stays permissive; this is the explicit boundary
/// check the API applies before running the pipeline.
///
/// # Errors
///
/// Returns `InvalidInput` for an empty topic or a word count outside
/// 50..=1000 in steps of 50.
pub fn validate_request(request: &GenerationRequest) -> Result<(), BlogError> {
    if request.topic.trim().is_empty() {
        return Err(BlogError::InvalidInput("topic must not be empty".to_string()));
    }
    if !(50..=1000).contains(&request.target_word_count) {
        return Err(BlogError::InvalidInput(format!(
            "word count must be between 50 and 1000, got {}",
            request.target_word_count
        )));
    }
    if request.target_word_count % 50 != 0 {
        return Err(BlogError::InvalidInput(format!(
            "word count must be a multiple of 50, got {}",
            request.target_word_count
        )));
    }
    Ok(())
}
