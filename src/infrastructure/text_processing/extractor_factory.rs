use std::sync::Arc;

use crate::application::ports::{FileLoader, OcrEngine};
use crate::domain::DocumentFormat;
use crate::infrastructure::ocr::TesseractOcrEngine;
use crate::presentation::config::ExtractionSettings;

use super::composite_file_loader::CompositeFileLoader;
use super::docx_adapter::DocxAdapter;
use super::image_ocr_adapter::ImageOcrAdapter;
use super::pdf_adapter::PdfAdapter;
use super::plain_text_adapter::PlainTextAdapter;
use super::pptx_adapter::PptxAdapter;

pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Registers one adapter per format, with tesseract behind image OCR.
    pub fn create(settings: &ExtractionSettings) -> CompositeFileLoader {
        let ocr = Arc::new(TesseractOcrEngine::new(
            settings.ocr_command.clone(),
            settings.ocr_language.clone(),
        ));

        if ocr.is_available() {
            tracing::info!(command = %settings.ocr_command, "OCR engine available");
        } else {
            tracing::warn!(
                command = %settings.ocr_command,
                "OCR engine not found; image uploads will be rejected"
            );
        }

        Self::with_ocr(ocr, settings.max_image_pixels)
    }

    pub fn with_ocr(ocr: Arc<dyn OcrEngine>, max_image_pixels: u64) -> CompositeFileLoader {
        let plain_text: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
        let pdf: Arc<dyn FileLoader> = Arc::new(PdfAdapter::new());
        let docx: Arc<dyn FileLoader> = Arc::new(DocxAdapter::new());
        let pptx: Arc<dyn FileLoader> = Arc::new(PptxAdapter::new());
        let image: Arc<dyn FileLoader> = Arc::new(ImageOcrAdapter::new(ocr, max_image_pixels));

        CompositeFileLoader::new(vec![
            (DocumentFormat::PlainText, plain_text),
            (DocumentFormat::Pdf, pdf),
            (DocumentFormat::Docx, docx),
            (DocumentFormat::Pptx, pptx),
            (DocumentFormat::Image, image),
        ])
    }
}
