use serde::Serialize;

use crate::application::services::FileAnalysis;
use crate::domain::SentimentResult;

#[derive(Debug, Serialize)]
pub struct SentimentResponse {
    pub sentiment: String,
    pub polarity: f64,
    pub subjectivity: f64,
    pub emoji: String,
}

impl From<&SentimentResult> for SentimentResponse {
    fn from(result: &SentimentResult) -> Self {
        Self {
            sentiment: result.label.as_str().to_string(),
            polarity: result.polarity,
            subjectivity: result.subjectivity,
            emoji: result.mood().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FileSentimentResponse {
    #[serde(flatten)]
    pub sentiment: SentimentResponse,
    pub extracted_text: String,
    pub filename: String,
}

impl From<FileAnalysis> for FileSentimentResponse {
    fn from(analysis: FileAnalysis) -> Self {
        Self {
            sentiment: SentimentResponse::from(&analysis.sentiment),
            extracted_text: analysis.extracted_text,
            filename: analysis.filename.to_string(),
        }
    }
}
