use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::{FileLoader, SentimentScorer};
use crate::domain::SafeFilename;
use crate::presentation::state::AppState;

use super::error::{analysis_error_response, error_response, multipart_error_response};
use super::sentiment_response::FileSentimentResponse;

pub const FILE_FIELD: &str = "file";

#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_file_handler<F, S>(
    State(state): State<AppState<F, S>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    S: SentimentScorer + 'static,
{
    let mut upload = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some(FILE_FIELD) {
                    continue;
                }
                let filename = field.file_name().unwrap_or_default().to_string();
                match field.bytes().await {
                    Ok(data) => {
                        upload = Some((filename, data));
                        break;
                    }
                    Err(e) => return multipart_error_response(e),
                }
            }
            Ok(None) => break,
            Err(e) => return multipart_error_response(e),
        }
    }

    let Some((filename, data)) = upload else {
        tracing::warn!("Analyze-file request with no file field");
        return error_response(StatusCode::BAD_REQUEST, "No file provided");
    };

    tracing::debug!(
        filename = %SafeFilename::new(&filename),
        bytes = data.len(),
        "File upload received"
    );

    match state.analysis_service.analyze_file(&filename, &data).await {
        Ok(analysis) => {
            (StatusCode::OK, Json(FileSentimentResponse::from(analysis))).into_response()
        }
        Err(e) => analysis_error_response(&e),
    }
}
