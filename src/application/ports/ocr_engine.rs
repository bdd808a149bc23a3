use image::DynamicImage;

/// Optical character recognition over an already decoded bitmap.
///
/// Calls block; run them off the async executor.
pub trait OcrEngine: Send + Sync {
    /// Probes whether the engine can be used in this environment.
    fn is_available(&self) -> bool;

    fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError>;
}

#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("ocr engine not found: {0}")]
    NotFound(String),
    #[error("ocr input preparation failed: {0}")]
    InputFailed(String),
    #[error("ocr process failed: {0}")]
    ProcessFailed(String),
}
