use std::collections::{HashMap, HashSet};

use unicode_segmentation::UnicodeSegmentation;

use crate::application::ports::SentimentScorer;
use crate::domain::SentimentScore;

use super::lexicon::{
    EXCLAMATION_BOOST, INTENSIFIERS, MAX_EXCLAMATIONS, NEGATION_FACTOR, NEGATORS, WORDS,
};

/// Averages lexicon scores over every recognised word.
///
/// Intensifiers and negators preceding a scored word modify it; a clause
/// break (`.`, `,`, `;`, `:`, `?`) discards pending modifiers. Each `!`
/// directly after a scored word (up to three) strengthens it slightly.
pub struct LexiconSentimentScorer {
    words: HashMap<&'static str, (f64, f64)>,
    intensifiers: HashMap<&'static str, f64>,
    negators: HashSet<&'static str>,
}

#[derive(Debug, Clone, Copy)]
struct Assessment {
    polarity: f64,
    subjectivity: f64,
}

impl LexiconSentimentScorer {
    pub fn new() -> Self {
        Self {
            words: WORDS.iter().map(|&(w, p, s)| (w, (p, s))).collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
            negators: NEGATORS.iter().copied().collect(),
        }
    }

    fn is_negator(&self, token: &str) -> bool {
        self.negators.contains(token)
            || token == "cannot"
            || token.ends_with("n't")
            || token.ends_with("n\u{2019}t")
    }

    fn assessments(&self, text: &str) -> Vec<Assessment> {
        let mut assessments: Vec<Assessment> = Vec::new();
        let mut intensity = 1.0;
        let mut negated = false;
        let mut exclamations = 0;
        let mut last_scored: Option<usize> = None;

        for segment in text.split_word_bounds() {
            let token = segment.trim().to_lowercase();
            if token.is_empty() {
                continue;
            }

            match token.as_str() {
                "!" => {
                    if let Some(index) = last_scored.filter(|_| exclamations < MAX_EXCLAMATIONS) {
                        let a = &mut assessments[index];
                        if a.polarity != 0.0 {
                            a.polarity = (a.polarity + EXCLAMATION_BOOST * a.polarity.signum())
                                .clamp(-1.0, 1.0);
                        }
                        exclamations += 1;
                    }
                    intensity = 1.0;
                    negated = false;
                    continue;
                }
                "." | "," | ";" | ":" | "?" => {
                    intensity = 1.0;
                    negated = false;
                    last_scored = None;
                    continue;
                }
                _ => {}
            }

            if self.is_negator(&token) {
                negated = true;
                continue;
            }

            if let Some(factor) = self.intensifiers.get(token.as_str()) {
                intensity *= factor;
                continue;
            }

            if let Some(&(polarity, subjectivity)) = self.words.get(token.as_str()) {
                let mut polarity = polarity * intensity;
                if negated {
                    polarity *= NEGATION_FACTOR;
                }

                assessments.push(Assessment {
                    polarity: polarity.clamp(-1.0, 1.0),
                    subjectivity: (subjectivity * intensity).clamp(0.0, 1.0),
                });
                last_scored = Some(assessments.len() - 1);
                exclamations = 0;
                intensity = 1.0;
                negated = false;
            }
        }

        assessments
    }
}

impl Default for LexiconSentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for LexiconSentimentScorer {
    fn score(&self, text: &str) -> SentimentScore {
        let assessments = self.assessments(text);
        if assessments.is_empty() {
            return SentimentScore::neutral();
        }

        let count = assessments.len() as f64;
        let polarity = assessments.iter().map(|a| a.polarity).sum::<f64>() / count;
        let subjectivity = assessments.iter().map(|a| a.subjectivity).sum::<f64>() / count;

        SentimentScore::new(polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0))
    }
}
