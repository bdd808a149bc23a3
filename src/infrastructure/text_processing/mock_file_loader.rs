use std::sync::Mutex;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat, Extraction};

/// Returns a canned outcome and records the formats it was asked for.
pub struct MockFileLoader {
    outcome: fn() -> Result<Extraction, FileLoaderError>,
    calls: Mutex<Vec<DocumentFormat>>,
}

impl MockFileLoader {
    pub fn new(outcome: fn() -> Result<Extraction, FileLoaderError>) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<DocumentFormat> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl FileLoader for MockFileLoader {
    async fn extract_text(
        &self,
        _data: &[u8],
        document: &Document,
    ) -> Result<Extraction, FileLoaderError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(document.format);
        }
        (self.outcome)()
    }
}

/// Echoes the payload back as trimmed UTF-8 text.
pub struct EchoFileLoader;

#[async_trait::async_trait]
impl FileLoader for EchoFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        _document: &Document,
    ) -> Result<Extraction, FileLoaderError> {
        Ok(Extraction::from_raw(&String::from_utf8_lossy(data)))
    }
}
