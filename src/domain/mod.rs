mod document;
mod extraction;
mod safe_filename;
mod sentiment;

pub use document::{Document, DocumentFormat, DocumentId, IMAGE_EXTENSIONS};
pub use extraction::Extraction;
pub use safe_filename::SafeFilename;
pub use sentiment::{
    NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD, SentimentLabel, SentimentResult, SentimentScore,
    round3,
};
