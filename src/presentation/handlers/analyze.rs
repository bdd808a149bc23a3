use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::application::ports::{FileLoader, SentimentScorer};
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

use super::error::{analysis_error_response, error_response};
use super::sentiment_response::SentimentResponse;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[tracing::instrument(skip(state, payload))]
pub async fn analyze_handler<F, S>(
    State(state): State<AppState<F, S>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    S: SentimentScorer + 'static,
{
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Invalid analyze request body");
            return error_response(
                StatusCode::BAD_REQUEST,
                "Request body must be JSON with a 'text' field",
            );
        }
    };

    let text = request.text.unwrap_or_default();
    tracing::debug!(text = %sanitize_for_log(&text), "Analyzing text");

    match state.analysis_service.analyze_text(&text) {
        Ok(result) => {
            tracing::info!(label = %result.label, polarity = result.polarity, "Text analyzed");
            (StatusCode::OK, Json(SentimentResponse::from(&result))).into_response()
        }
        Err(e) => analysis_error_response(&e),
    }
}
