//! Client for the locally-hosted text-generation model.
//!
//! Talks to an OpenAI-compatible chat-completions endpoint, the interface
//! local inference servers (llama.cpp, Ollama) expose. Single blocking call
//! per generation, no retry: a failure is terminal for the request.

use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info};

use crate::core::config::AppConfig;
use crate::errors::BlogError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Client for the local inference server.
#[derive(Debug, Clone)]
pub struct LlmClient {
    client: Client,
    base_url: String,
    model: String,
}

impl LlmClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, BlogError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| BlogError::HttpError(format!("Failed to build inference HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.inference_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    /// Request free-form text from the model.
    ///
    /// Returns up to `max_tokens` of text with no guarantee of exact length
    /// or of ending on a sentence boundary.
    ///
    /// # Errors
    ///
    /// Returns `GenerationFailure` if the server is unreachable, answers
    /// non-2xx, or the response carries no text.
    pub async fn generate(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, BlogError> {
        info!(
            model = %self.model,
            max_tokens,
            temperature,
            "Requesting completion from local model"
        );
        debug!(prompt_len = prompt.len(), "Prompt prepared");

        let request_body = build_request_body(&self.model, prompt, max_tokens, temperature);
        let url = format!("{}/v1/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| BlogError::GenerationFailure(format!("Inference request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(BlogError::GenerationFailure(format!(
                "Inference server error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            BlogError::GenerationFailure(format!("Failed to parse inference response: {e}"))
        })?;

        extract_message_content(&response_json).ok_or_else(|| {
            BlogError::GenerationFailure("No text in inference response".to_string())
        })
    }
}

/// Build the chat-completions request payload.
///
/// Temperature is clamped to [0, 1], the range the handler contract allows.
pub(crate) fn build_request_body(
    model: &str,
    prompt: &str,
    max_tokens: u32,
    temperature: f32,
) -> Value {
    json!({
        "model": model,
        "messages": [
            { "role": "user", "content": prompt }
        ],
        "max_tokens": max_tokens,
        "temperature": temperature.clamp(0.0, 1.0),
        "stream": false
    })
}

/// Pull the generated text out of a chat-completions response.
///
/// Falls back to the Ollama-native `message.content` shape so either endpoint
/// style works.
pub(crate) fn extract_message_content(response: &Value) -> Option<String> {
    response
        .get("choices")
        .and_then(|choices| choices.as_array())
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .map(std::string::ToString::to_string)
        .or_else(|| {
            response
                .get("message")
                .and_then(|message| message.get("content"))
                .and_then(|content| content.as_str())
                .map(std::string::ToString::to_string)
        })
}
