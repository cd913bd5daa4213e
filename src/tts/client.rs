//! Speech synthesis over HTTP.
//!
//! The endpoint takes (text, locale code) query parameters and answers MP3
//! bytes. Long texts are split at sentence boundaries into chunks the
//! endpoint accepts; MP3 frames concatenate cleanly, so the chunks are
//! appended into one file.

use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use crate::core::config::AppConfig;
use crate::errors::BlogError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Upper bound the synthesis endpoint accepts per request.
const CHUNK_MAX_CHARS: usize = 180;

/// Prefix for the per-request temp files the synthesizer writes.
pub const AUDIO_FILE_PREFIX: &str = "blogsmith-";

/// Map a language name to its speech-synthesis locale code.
///
/// Only the four form languages are supported; anything else yields `None`
/// and the caller reports the unsupported-language condition.
#[must_use]
pub fn locale_code(language: &str) -> Option<&'static str> {
    match language {
        "English" => Some("en"),
        "Spanish" => Some("es"),
        "French" => Some("fr"),
        "German" => Some("de"),
        _ => None,
    }
}

/// Client for the speech-synthesis endpoint.
#[derive(Debug, Clone)]
pub struct TtsClient {
    client: Client,
    base_url: String,
}

impl TtsClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, BlogError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| BlogError::HttpError(format!("Failed to build TTS HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.tts_url.clone(),
        })
    }

    /// Synthesize speech for `text` in the named language.
    ///
    /// Writes the MP3 to a fresh temp file and returns its path. Ownership of
    /// the file transfers to the caller; nothing cleans it up automatically.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedLanguageForAudio` when the language has no locale
    /// code, `HttpError` when the endpoint fails, and `IoError` when the temp
    /// file cannot be written.
    pub async fn synthesize(&self, text: &str, language: &str) -> Result<PathBuf, BlogError> {
        let locale = locale_code(language)
            .ok_or_else(|| BlogError::UnsupportedLanguageForAudio(language.to_string()))?;

        let chunks = split_into_chunks(text, CHUNK_MAX_CHARS);
        info!(locale, chunks = chunks.len(), "Synthesizing audio");

        let mut audio_bytes: Vec<u8> = Vec::new();
        for chunk in &chunks {
            let url = build_chunk_url(&self.base_url, chunk, locale);
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| BlogError::HttpError(format!("TTS request failed: {e}")))?;

            let status = response.status();
            if !status.is_success() {
                return Err(BlogError::HttpError(format!(
                    "TTS endpoint error (status {status})"
                )));
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| BlogError::HttpError(format!("Failed to read TTS response: {e}")))?;
            audio_bytes.extend_from_slice(&bytes);
        }

        let path = std::env::temp_dir().join(format!("{AUDIO_FILE_PREFIX}{}.mp3", Uuid::new_v4()));
        tokio::fs::write(&path, &audio_bytes).await?;
        info!(path = %path.display(), bytes = audio_bytes.len(), "Audio file written");

        Ok(path)
    }
}

/// Build the query URL for one chunk.
pub(crate) fn build_chunk_url(base_url: &str, chunk: &str, locale: &str) -> String {
    format!(
        "{base_url}?ie=UTF-8&q={}&tl={locale}&client=tw-ob",
        urlencoding::encode(chunk)
    )
}

fn is_sentence_break(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?' | ';' | ':' | '\n')
}

fn push_trimmed(units: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        units.push(trimmed.to_string());
    }
    current.clear();
}

/// Split text into sentence-like units at terminating punctuation.
pub(crate) fn split_sentence_units(text: &str) -> Vec<String> {
    let mut units = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        current.push(ch);
        if is_sentence_break(ch) {
            push_trimmed(&mut units, &mut current);
        }
    }
    push_trimmed(&mut units, &mut current);

    units
}

/// Pack sentence units into chunks of at most `max_chars` characters each.
///
/// A single unit longer than the limit is hard-split on character count so no
/// chunk ever exceeds the endpoint's bound.
pub(crate) fn split_into_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    for unit in split_sentence_units(text) {
        let unit_chars = unit.chars().count();

        if unit_chars > max_chars {
            if !current.is_empty() {
                chunks.push(current.clone());
                current.clear();
                current_chars = 0;
            }
            let mut piece = String::new();
            let mut piece_chars = 0usize;
            for ch in unit.chars() {
                piece.push(ch);
                piece_chars += 1;
                if piece_chars >= max_chars {
                    chunks.push(piece.clone());
                    piece.clear();
                    piece_chars = 0;
                }
            }
            if !piece.is_empty() {
                chunks.push(piece);
            }
            continue;
        }

        let sep_chars = usize::from(!current.is_empty());
        if current_chars + sep_chars + unit_chars > max_chars {
            chunks.push(current.clone());
            current.clear();
            current_chars = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_chars += 1;
        }
        current.push_str(&unit);
        current_chars += unit_chars;
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    if chunks.is_empty() {
        vec![text.trim().to_string()]
    } else {
        chunks
    }
}
