//! Request handlers for the JSON API.

use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::ai::LlmClient;
use crate::core::models::{GenerationRequest, Language};
use crate::errors::BlogError;
use crate::prompt;
use crate::seo;
use crate::tts::client::AUDIO_FILE_PREFIX;
use crate::tts::TtsClient;
use crate::worker;

use super::page;

/// Shared handler state: the two external-capability clients.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub tts: TtsClient,
}

/// One form submission as posted by the page.
#[derive(Debug, Deserialize)]
pub struct GenerateParams {
    pub topic: String,
    pub word_count: u32,
    /// Comma-separated, as typed into the keyword field.
    #[serde(default)]
    pub seo_keywords: String,
    pub language: Language,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub full_text: String,
    pub truncated_text: String,
    pub summary: Option<String>,
    pub audio_url: Option<String>,
    pub audio_notice: Option<String>,
}

/// Error wrapper so `BlogError` maps onto HTTP responses.
pub struct ApiError(BlogError);

impl From<BlogError> for ApiError {
    fn from(error: BlogError) -> Self {
        ApiError(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            BlogError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            BlogError::GenerationFailure(_) | BlogError::HttpError(_) => StatusCode::BAD_GATEWAY,
            BlogError::UnsupportedLanguageForAudio(_) | BlogError::IoError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        error!(status = %status, "Request failed: {}", self.0);

        // Model failures get the canonical user-facing message; the detail
        // stays in the logs.
        let message = match &self.0 {
            BlogError::GenerationFailure(_) => worker::CANONICAL_FAILURE_MESSAGE.to_string(),
            other => other.to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Serve the single-page form.
pub async fn index() -> Html<&'static str> {
    Html(page::PAGE)
}

/// Run the full pipeline for one submission.
pub async fn generate(
    State(state): State<AppState>,
    Json(params): Json<GenerateParams>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let request = GenerationRequest {
        topic: params.topic,
        target_word_count: params.word_count,
        seo_keywords: prompt::parse_keywords(&params.seo_keywords),
        language: params.language,
    };

    worker::pipeline::validate_request(&request)?;

    let result = worker::process_request(&state.llm, &state.tts, &request).await?;

    let audio_url = result.audio_path.as_ref().and_then(|path| {
        path.file_name()
            .and_then(|name| name.to_str())
            .map(|name| format!("/api/audio/{name}"))
    });
    let audio_notice = if audio_url.is_none() {
        Some(
            BlogError::UnsupportedLanguageForAudio(request.language.to_string()).to_string(),
        )
    } else {
        None
    };

    info!(
        truncated_len = result.truncated_text.len(),
        has_audio = audio_url.is_some(),
        "Generation complete"
    );

    Ok(Json(GenerateResponse {
        full_text: result.full_text,
        truncated_text: result.truncated_text,
        summary: result.summary,
        audio_url,
        audio_notice,
    }))
}

/// Serve a synthesized audio file from the temp directory.
///
/// Only file names the synthesizer itself produces are accepted, which keeps
/// the handler from reading arbitrary paths.
pub async fn audio(Path(file): Path<String>) -> Result<Response, ApiError> {
    let id = parse_audio_file_name(&file).ok_or_else(|| {
        BlogError::InvalidInput(format!("not a synthesized audio file: {file}"))
    })?;

    let path = std::env::temp_dir().join(format!("{AUDIO_FILE_PREFIX}{id}.mp3"));
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(_) => {
            return Ok((
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "audio file not found" })),
            )
                .into_response());
        }
    };

    Ok(([(header::CONTENT_TYPE, "audio/mpeg")], bytes).into_response())
}

#[derive(Debug, Deserialize)]
pub struct TopicParams {
    #[serde(default)]
    pub topic: String,
}

/// Fixed SEO keyword suggestions for the sidebar.
pub async fn seo_suggest(Query(params): Query<TopicParams>) -> Json<Vec<String>> {
    Json(seo::suggest_keywords(&params.topic))
}

#[derive(Debug, Deserialize)]
pub struct OutlineParams {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub seo_keywords: String,
}

/// Markdown outline preview for the requested blog.
pub async fn outline(Query(params): Query<OutlineParams>) -> Json<serde_json::Value> {
    let keywords = prompt::parse_keywords(&params.seo_keywords);
    Json(json!({ "outline": seo::build_outline(&params.topic, &keywords) }))
}

/// Extract the UUID from a `blogsmith-<uuid>.mp3` file name.
fn parse_audio_file_name(file: &str) -> Option<Uuid> {
    let stem = file.strip_prefix(AUDIO_FILE_PREFIX)?.strip_suffix(".mp3")?;
    Uuid::parse_str(stem).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_file_name_round_trip() {
        let id = Uuid::new_v4();
        let name = format!("{AUDIO_FILE_PREFIX}{id}.mp3");
        assert_eq!(parse_audio_file_name(&name), Some(id));
    }

    #[test]
    fn audio_file_name_rejects_traversal() {
        assert_eq!(parse_audio_file_name("../etc/passwd"), None);
        assert_eq!(parse_audio_file_name("blogsmith-notauuid.mp3"), None);
        assert_eq!(parse_audio_file_name("blogsmith-.mp3"), None);
    }

    #[test]
    fn generate_params_deserialize_from_form_payload() {
        let payload = json!({
            "topic": "Renewable Energy",
            "word_count": 300,
            "seo_keywords": "solar, wind",
            "language": "English"
        });
        let params: GenerateParams = serde_json::from_value(payload).unwrap();
        assert_eq!(params.word_count, 300);
        assert_eq!(params.language, Language::English);
    }
}
