use async_trait::async_trait;

use crate::domain::{Document, DocumentFormat, Extraction};

#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<Extraction, FileLoaderError>;
}

/// Whether an error can be fixed by the caller sending different input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UserCorrectable,
    Internal,
}

/// Extraction failures.
///
/// The `Display` text is what callers see; `reason` fields are for logs only.
#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("Unable to process {format} file; ensure it is not corrupted")]
    Malformed {
        format: DocumentFormat,
        reason: String,
    },
    #[error("OCR engine is not available; text cannot be extracted from images")]
    OcrUnavailable,
    #[error("Image is too large to process ({pixels} pixels exceeds the limit of {limit})")]
    ImageTooLarge { pixels: u64, limit: u64 },
    #[error("adapter cannot handle {0} documents")]
    UnsupportedFormat(DocumentFormat),
    #[error("extraction failed: {0}")]
    Internal(String),
}

impl FileLoaderError {
    pub fn malformed(format: DocumentFormat, reason: impl Into<String>) -> Self {
        Self::Malformed {
            format,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Malformed { .. } | Self::OcrUnavailable | Self::ImageTooLarge { .. } => {
                ErrorKind::UserCorrectable
            }
            Self::UnsupportedFormat(_) | Self::Internal(_) => ErrorKind::Internal,
        }
    }
}
