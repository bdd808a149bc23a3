pub mod observability;
pub mod ocr;
pub mod sentiment;
pub mod text_processing;
