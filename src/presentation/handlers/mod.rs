mod analyze;
mod analyze_file;
mod error;
mod health;
mod index;
mod sentiment_response;

pub use analyze::{AnalyzeRequest, analyze_handler};
pub use analyze_file::{FILE_FIELD, analyze_file_handler};
pub use error::{ErrorResponse, panic_response, status_for};
pub use health::health_handler;
pub use index::index_handler;
pub use sentiment_response::{FileSentimentResponse, SentimentResponse};
