use std::io::Write;
use std::path::Path;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat, Extraction};

use super::blocking::run_blocking;

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Joins the text of every page that has any, in page order, with `\n`.
    pub fn extract(data: &[u8]) -> Result<Extraction, FileLoaderError> {
        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            FileLoaderError::Internal(format!("failed to create temp file: {e}"))
        })?;

        temp_file.write_all(data).map_err(|e| {
            FileLoaderError::Internal(format!("failed to write temp file: {e}"))
        })?;

        let pages = Self::extract_pages(temp_file.path())?;
        tracing::info!(pages_with_text = pages.len(), "PDF text extraction complete");

        Ok(Extraction::from_raw(&pages.join("\n")))
    }

    fn extract_pages(path: &Path) -> Result<Vec<String>, FileLoaderError> {
        let mut doc = PdfDocument::open(path).map_err(|e| {
            FileLoaderError::malformed(DocumentFormat::Pdf, format!("failed to parse PDF: {e}"))
        })?;

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::malformed(
                DocumentFormat::Pdf,
                format!("failed to read page count: {e}"),
            )
        })?;

        let page_results = (0..page_count).map(|page_index| doc.extract_text(page_index));
        Self::collect_pages(page_results)
    }

    /// Keeps the trimmed, non-empty pages in order. A page that fails to
    /// decode is skipped, but a document where every page fails is malformed.
    pub fn collect_pages<E>(
        page_results: impl IntoIterator<Item = Result<String, E>>,
    ) -> Result<Vec<String>, FileLoaderError>
    where
        E: std::fmt::Display,
    {
        let mut pages = Vec::new();
        let mut page_count = 0usize;
        let mut failed_pages = 0usize;
        let mut last_error = None;

        for (page_index, result) in page_results.into_iter().enumerate() {
            page_count += 1;
            match result {
                Ok(text) => {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        pages.push(trimmed.to_string());
                    }
                }
                Err(e) => {
                    tracing::debug!(page_index, error = %e, "Failed to extract page text");
                    failed_pages += 1;
                    last_error = Some(e.to_string());
                }
            }
        }

        if page_count > 0 && failed_pages == page_count {
            let detail = last_error.unwrap_or_default();
            return Err(FileLoaderError::malformed(
                DocumentFormat::Pdf,
                format!("no page could be decoded: {detail}"),
            ));
        }

        Ok(pages)
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<Extraction, FileLoaderError> {
        if document.format != DocumentFormat::Pdf {
            return Err(FileLoaderError::UnsupportedFormat(document.format));
        }

        let data_owned = data.to_vec();
        run_blocking(DocumentFormat::Pdf, move || Self::extract(&data_owned)).await
    }
}
