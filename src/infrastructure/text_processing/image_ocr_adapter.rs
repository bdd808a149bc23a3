use std::io::Cursor;
use std::sync::Arc;

use async_trait::async_trait;
use image::{DynamicImage, ImageReader, Limits};

use crate::application::ports::{FileLoader, FileLoaderError, OcrEngine, OcrError};
use crate::domain::{Document, DocumentFormat, Extraction};

use super::blocking::run_blocking;

/// Decompression-bomb ceiling, roughly 179 megapixels.
pub const DEFAULT_MAX_IMAGE_PIXELS: u64 = 178_956_970;

#[derive(Clone)]
pub struct ImageOcrAdapter {
    ocr: Arc<dyn OcrEngine>,
    max_pixels: u64,
}

impl ImageOcrAdapter {
    pub fn new(ocr: Arc<dyn OcrEngine>, max_pixels: u64) -> Self {
        Self { ocr, max_pixels }
    }

    /// The pixel ceiling is checked from the header alone, before the OCR
    /// probe and before any pixel data is decoded.
    pub fn extract(&self, data: &[u8]) -> Result<Extraction, FileLoaderError> {
        let (width, height) = reader(data)?.into_dimensions().map_err(|e| {
            FileLoaderError::malformed(DocumentFormat::Image, format!("unreadable header: {e}"))
        })?;

        let pixels = u64::from(width) * u64::from(height);
        if pixels > self.max_pixels {
            tracing::warn!(
                width,
                height,
                pixels,
                limit = self.max_pixels,
                "Image exceeds pixel ceiling"
            );
            return Err(FileLoaderError::ImageTooLarge {
                pixels,
                limit: self.max_pixels,
            });
        }

        if !self.ocr.is_available() {
            tracing::warn!("OCR engine unavailable");
            return Err(FileLoaderError::OcrUnavailable);
        }

        let image = decode(data, width, height)?;
        let text = self.ocr.recognize(&image).map_err(|e| match e {
            OcrError::NotFound(_) => FileLoaderError::OcrUnavailable,
            other => FileLoaderError::malformed(DocumentFormat::Image, other.to_string()),
        })?;

        tracing::info!(width, height, chars = text.trim().chars().count(), "OCR complete");

        Ok(Extraction::from_raw(&text))
    }
}

fn reader(data: &[u8]) -> Result<ImageReader<Cursor<&[u8]>>, FileLoaderError> {
    ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| {
            FileLoaderError::malformed(DocumentFormat::Image, format!("unreadable image: {e}"))
        })
}

fn decode(data: &[u8], width: u32, height: u32) -> Result<DynamicImage, FileLoaderError> {
    let mut limits = Limits::default();
    limits.max_image_width = Some(width);
    limits.max_image_height = Some(height);
    limits.max_alloc = None;

    let mut image_reader = reader(data)?;
    image_reader.limits(limits);
    image_reader.decode().map_err(|e| {
        FileLoaderError::malformed(DocumentFormat::Image, format!("image decode failed: {e}"))
    })
}

#[async_trait]
impl FileLoader for ImageOcrAdapter {
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
        if document.format != DocumentFormat::Image {
            return Err(FileLoaderError::UnsupportedFormat(document.format));
        }

        let adapter = self.clone();
        let data_owned = data.to_vec();
        run_blocking(DocumentFormat::Image, move || adapter.extract(&data_owned)).await
    }
}
