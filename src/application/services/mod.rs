mod analysis_service;
mod sentiment_classifier;
mod text_preview;

pub use analysis_service::{AnalysisError, AnalysisService, FileAnalysis, INTERNAL_ERROR_MESSAGE};
pub use sentiment_classifier::SentimentClassifier;
pub use text_preview::{DEFAULT_PREVIEW_CHARS, TRUNCATION_MARKER, text_preview};
