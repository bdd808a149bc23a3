mod file_loader;
mod ocr_engine;
mod sentiment_scorer;

pub use file_loader::{ErrorKind, FileLoader, FileLoaderError};
pub use ocr_engine::{OcrEngine, OcrError};
pub use sentiment_scorer::SentimentScorer;
