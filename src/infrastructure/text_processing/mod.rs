mod blocking;
mod composite_file_loader;
mod docx_adapter;
mod extractor_factory;
mod image_ocr_adapter;
mod mock_file_loader;
mod ooxml;
mod pdf_adapter;
mod plain_text_adapter;
mod pptx_adapter;

pub use blocking::run_blocking;
pub use composite_file_loader::CompositeFileLoader;
pub use docx_adapter::DocxAdapter;
pub use extractor_factory::ExtractorFactory;
pub use image_ocr_adapter::{DEFAULT_MAX_IMAGE_PIXELS, ImageOcrAdapter};
pub use mock_file_loader::{EchoFileLoader, MockFileLoader};
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
pub use pptx_adapter::PptxAdapter;
