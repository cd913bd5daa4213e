//! HTTP surface: the form page and the JSON API

pub mod handler;
pub mod page;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handler::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::index))
        .route("/api/generate", post(handler::generate))
        .route("/api/audio/:file", get(handler::audio))
        .route("/api/seo/suggest", get(handler::seo_suggest))
        .route("/api/outline", get(handler::outline))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
