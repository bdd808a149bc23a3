use crate::application::ports::FileLoaderError;
use crate::domain::{DocumentFormat, Extraction};

/// Runs a parser on the blocking pool. A panic inside the parser is reported
/// as a malformed document of `format`.
pub async fn run_blocking<F>(
    format: DocumentFormat,
    task: F,
) -> Result<Extraction, FileLoaderError>
where
    F: FnOnce() -> Result<Extraction, FileLoaderError> + Send + 'static,
{
    match tokio::task::spawn_blocking(task).await {
        Ok(result) => result,
        Err(e) if e.is_panic() => {
            tracing::warn!(format = %format, "Parser panicked during extraction");
            Err(FileLoaderError::malformed(format, "parser panicked"))
        }
        Err(e) => Err(FileLoaderError::Internal(format!("task join error: {e}"))),
    }
}
