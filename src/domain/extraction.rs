/// Successful outcome of text extraction.
///
/// `NoText` is a valid result for a well-formed document that simply holds no
/// selectable text, and is kept apart from extraction failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Text(String),
    NoText,
}

impl Extraction {
    /// Trims `raw` and maps an empty remainder to `NoText`.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Self::NoText
        } else {
            Self::Text(trimmed.to_string())
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::NoText => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::NoText => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoText)
    }
}
