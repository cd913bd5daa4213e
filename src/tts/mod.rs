//! Speech synthesis for the generated blog

pub mod client;

// Re-export main types for convenience
pub use client::{TtsClient, locale_code};
