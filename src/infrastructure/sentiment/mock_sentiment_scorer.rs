use crate::application::ports::SentimentScorer;
use crate::domain::SentimentScore;

/// Returns the same score for any input.
pub struct MockSentimentScorer {
    score: SentimentScore,
}

impl MockSentimentScorer {
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            score: SentimentScore::new(polarity, subjectivity),
        }
    }
}

impl SentimentScorer for MockSentimentScorer {
    fn score(&self, _text: &str) -> SentimentScore {
        self.score
    }
}
