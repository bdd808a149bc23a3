use crate::domain::SentimentScore;

/// Scores free text for polarity in [-1, 1] and subjectivity in [0, 1].
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> SentimentScore;
}
