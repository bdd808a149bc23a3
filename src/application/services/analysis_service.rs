use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{ErrorKind, FileLoader, FileLoaderError, SentimentScorer};
use crate::domain::{Document, DocumentFormat, SafeFilename, SentimentResult};

use super::sentiment_classifier::SentimentClassifier;
use super::text_preview::text_preview;

pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred while processing the request";

/// Sentiment of an uploaded file together with what was read from it.
#[derive(Debug, Clone, PartialEq)]
pub struct FileAnalysis {
    pub sentiment: SentimentResult,
    pub extracted_text: String,
    pub filename: SafeFilename,
}

pub struct AnalysisService<F: ?Sized, S: ?Sized>
where
    F: FileLoader,
    S: SentimentScorer,
{
    file_loader: Arc<F>,
    classifier: SentimentClassifier<S>,
    extraction_timeout: Duration,
    preview_chars: usize,
}

impl<F: ?Sized, S: ?Sized> AnalysisService<F, S>
where
    F: FileLoader,
    S: SentimentScorer,
{
    pub fn new(
        file_loader: Arc<F>,
        scorer: Arc<S>,
        extraction_timeout: Duration,
        preview_chars: usize,
    ) -> Self {
        Self {
            file_loader,
            classifier: SentimentClassifier::new(scorer),
            extraction_timeout,
            preview_chars,
        }
    }

    pub fn analyze_text(&self, text: &str) -> Result<SentimentResult, AnalysisError> {
        self.classifier.classify(text).ok_or(AnalysisError::EmptyText)
    }

    #[tracing::instrument(skip(self, raw_filename, data), fields(bytes = data.len()))]
    pub async fn analyze_file(
        &self,
        raw_filename: &str,
        data: &[u8],
    ) -> Result<FileAnalysis, AnalysisError> {
        if raw_filename.trim().is_empty() {
            return Err(AnalysisError::MissingFilename);
        }

        // Sanitizing may strip a non-ASCII stem down to the extension, so
        // dispatch on the name as uploaded.
        let filename = SafeFilename::new(raw_filename);
        let format = DocumentFormat::from_filename(raw_filename.trim()).ok_or_else(|| {
            AnalysisError::UnsupportedExtension {
                filename: filename.to_string(),
                allowed: DocumentFormat::allowed_extensions(),
            }
        })?;

        let document = Document::new(filename.clone(), format, data.len() as u64);

        tracing::debug!(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
            format = %format,
            size_bytes = document.size_bytes,
            "Extracting text from upload"
        );

        let extraction = tokio::time::timeout(
            self.extraction_timeout,
            self.file_loader.extract_text(data, &document),
        )
        .await
        .map_err(|_| AnalysisError::Timeout(self.extraction_timeout))??;

        let text = extraction
            .into_text()
            .filter(|t| !t.trim().is_empty())
            .ok_or(AnalysisError::NoTextExtracted)?;

        let sentiment = self
            .classifier
            .classify(&text)
            .ok_or(AnalysisError::CouldNotAnalyze)?;

        tracing::info!(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
            chars = text.chars().count(),
            label = %sentiment.label,
            "File analyzed"
        );

        Ok(FileAnalysis {
            sentiment,
            extracted_text: text_preview(&text, self.preview_chars),
            filename,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("No text provided")]
    EmptyText,
    #[error("No file selected")]
    MissingFilename,
    #[error("Unsupported file type for '{filename}'. Allowed types: {allowed}")]
    UnsupportedExtension { filename: String, allowed: String },
    #[error(transparent)]
    Extraction(#[from] FileLoaderError),
    #[error("No text could be extracted from the file")]
    NoTextExtracted,
    #[error("Could not analyze the extracted text")]
    CouldNotAnalyze,
    #[error("extraction timed out after {0:?}")]
    Timeout(Duration),
}

impl AnalysisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Extraction(e) => e.kind(),
            Self::Timeout(_) => ErrorKind::Internal,
            _ => ErrorKind::UserCorrectable,
        }
    }

    /// Message safe to hand back to the client.
    pub fn public_message(&self) -> String {
        match self {
            Self::Timeout(_) => "The file took too long to process".to_string(),
            e if e.kind() == ErrorKind::Internal => INTERNAL_ERROR_MESSAGE.to_string(),
            e => e.to_string(),
        }
    }
}
