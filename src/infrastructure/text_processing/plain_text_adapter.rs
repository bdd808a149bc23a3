use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat, Extraction};

pub struct PlainTextAdapter;

impl PlainTextAdapter {
    /// Never fails: invalid UTF-8 sequences become U+FFFD. The result is
    /// trimmed before the emptiness check.
    pub fn extract(data: &[u8]) -> Extraction {
        let text = String::from_utf8_lossy(data);
        Extraction::from_raw(&text)
    }
}

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<Extraction, FileLoaderError> {
        if document.format != DocumentFormat::PlainText {
            return Err(FileLoaderError::UnsupportedFormat(document.format));
        }

        Ok(Self::extract(data))
    }
}
