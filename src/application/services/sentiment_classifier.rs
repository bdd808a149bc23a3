use std::sync::Arc;

use crate::application::ports::SentimentScorer;
use crate::domain::SentimentResult;

pub struct SentimentClassifier<S: ?Sized>
where
    S: SentimentScorer,
{
    scorer: Arc<S>,
}

impl<S: ?Sized> SentimentClassifier<S>
where
    S: SentimentScorer,
{
    pub fn new(scorer: Arc<S>) -> Self {
        Self { scorer }
    }

    /// Returns `None` for empty or whitespace-only text.
    pub fn classify(&self, text: &str) -> Option<SentimentResult> {
        if text.trim().is_empty() {
            return None;
        }

        let score = self.scorer.score(text);
        let result = SentimentResult::from_score(score);

        tracing::debug!(
            label = %result.label,
            polarity = result.polarity,
            subjectivity = result.subjectivity,
            "Text classified"
        );

        Some(result)
    }
}

impl<S: ?Sized> Clone for SentimentClassifier<S>
where
    S: SentimentScorer,
{
    fn clone(&self) -> Self {
        Self {
            scorer: Arc::clone(&self.scorer),
        }
    }
}
