use std::fmt;

pub const POSITIVE_THRESHOLD: f64 = 0.1;
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Raw output of a sentiment scorer, before labelling and rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScore {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl SentimentScore {
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity,
            subjectivity,
        }
    }

    pub fn neutral() -> Self {
        Self::new(0.0, 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Open on both sides: exactly 0.1 and -0.1 stay neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            Self::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }

    pub fn mood(&self) -> &'static str {
        match self {
            Self::Positive => "😊",
            Self::Negative => "😞",
            Self::Neutral => "😐",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    pub polarity: f64,
    pub subjectivity: f64,
}

impl SentimentResult {
    /// Labels on the unrounded polarity, then clamps and rounds both scores
    /// to three decimals.
    pub fn from_score(score: SentimentScore) -> Self {
        let polarity = score.polarity.clamp(-1.0, 1.0);
        let subjectivity = score.subjectivity.clamp(0.0, 1.0);
        let label = SentimentLabel::from_polarity(polarity);

        Self {
            label,
            polarity: round3(polarity),
            subjectivity: round3(subjectivity),
        }
    }

    pub fn mood(&self) -> &'static str {
        self.label.mood()
    }
}

/// Rounds to three decimals. Exact ties round half away from zero, so
/// `0.0625` becomes `0.063` where banker's rounding would give `0.062`.
pub fn round3(value: f64) -> f64 {
    let rounded = (value * 1000.0).round() / 1000.0;
    // normalizes -0.0
    if rounded == 0.0 { 0.0 } else { rounded }
}
