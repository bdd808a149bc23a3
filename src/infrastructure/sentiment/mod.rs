mod lexicon;
mod lexicon_scorer;
mod mock_sentiment_scorer;

pub use lexicon_scorer::LexiconSentimentScorer;
pub use mock_sentiment_scorer::MockSentimentScorer;
