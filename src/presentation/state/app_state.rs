use std::sync::Arc;

use crate::application::ports::{FileLoader, SentimentScorer};
use crate::application::services::AnalysisService;

pub struct AppState<F, S>
where
    F: FileLoader,
    S: SentimentScorer,
{
    pub analysis_service: Arc<AnalysisService<F, S>>,
    pub max_upload_bytes: usize,
}

impl<F, S> Clone for AppState<F, S>
where
    F: FileLoader,
    S: SentimentScorer,
{
    fn clone(&self) -> Self {
        Self {
            analysis_service: Arc::clone(&self.analysis_service),
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}
