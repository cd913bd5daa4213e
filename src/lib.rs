/// Blogsmith - a small web service that turns a topic, word budget, SEO
/// keywords, and language into a blog post using a locally-hosted
/// text-generation model, then summarizes it and synthesizes audio.
///
/// # Architecture
///
/// The system is a single sequential pipeline per submission:
/// 1. An axum server serves the form page and a JSON API
/// 2. The worker pipeline builds a prompt, calls the local inference server,
///    truncates the result, applies the conclusion policy, summarizes, and
///    synthesizes speech
///
/// The system uses:
/// - axum and tower-http for the HTTP surface
/// - reqwest for the inference and speech-synthesis calls
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use blogsmith::ai::LlmClient;
/// use blogsmith::core::config::AppConfig;
/// use blogsmith::core::models::{GenerationRequest, Language};
/// use blogsmith::tts::TtsClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     blogsmith::setup_logging();
///
///     let config = AppConfig::from_env();
///     let llm = LlmClient::new(&config)?;
///     let tts = TtsClient::new(&config)?;
///
///     let request = GenerationRequest {
///         topic: "Renewable Energy".into(),
///         target_word_count: 300,
///         seo_keywords: vec!["solar".into(), "wind".into()],
///         language: Language::English,
///     };
///
///     let result = blogsmith::worker::process_request(&llm, &tts, &request).await?;
///     println!("Blog: {}", result.truncated_text);
///     if let Some(summary) = result.summary {
///         println!("Summary: {summary}");
///     }
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod compose;
pub mod core;
pub mod errors;
pub mod prompt;
pub mod seo;
pub mod tts;
pub mod worker;

/// Configure structured logging for the server process.
///
/// Sets up tracing-subscriber with an env-filter layer so verbosity can be
/// tuned with `RUST_LOG`, falling back to a sensible default. Call once at
/// process start.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "blogsmith=info,tower_http=warn".into());
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
