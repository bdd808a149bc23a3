use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{FileLoader, SentimentScorer};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    analyze_file_handler, analyze_handler, health_handler, index_handler, panic_response,
};
use crate::presentation::state::AppState;

/// Builds the application. The body limit comes from the state so the
/// upload ceiling and multipart rejection stay in sync.
pub fn create_router<F, S>(state: AppState<F, S>) -> Router
where
    F: FileLoader + 'static,
    S: SentimentScorer + 'static,
{
    let upload_limit = state.max_upload_bytes;

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .merge(analysis_routes::<F, S>())
        .layer(DefaultBodyLimit::max(upload_limit))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn analysis_routes<F, S>() -> Router<AppState<F, S>>
where
    F: FileLoader + 'static,
    S: SentimentScorer + 'static,
{
    Router::new()
        .route("/analyze", post(analyze_handler::<F, S>))
        .route("/analyze-file", post(analyze_file_handler::<F, S>))
}
