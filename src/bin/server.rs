use blogsmith::ai::LlmClient;
use blogsmith::api;
use blogsmith::api::handler::AppState;
use blogsmith::core::config::AppConfig;
use blogsmith::tts::TtsClient;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    blogsmith::setup_logging();

    let config = AppConfig::from_env();
    info!(
        inference_url = %config.inference_url,
        model = %config.model,
        "Starting Blogsmith"
    );

    let state = AppState {
        llm: LlmClient::new(&config)?,
        tts: TtsClient::new(&config)?,
    };
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Server listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
