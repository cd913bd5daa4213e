use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The four languages the form offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    English,
    Spanish,
    French,
    German,
}

impl Language {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user submission. Created per request, immutable, discarded after use.
/// Built field-by-field from the API payload, so it carries no serde derives
/// of its own.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub topic: String,
    pub target_word_count: u32,
    pub seo_keywords: Vec<String>,
    pub language: Language,
}

/// Output of the pipeline, built incrementally and owned by a single
/// request/response cycle. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct GenerationResult {
    pub full_text: String,
    pub truncated_text: String,
    pub summary: Option<String>,
    pub audio_path: Option<PathBuf>,
}
