use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("static regex is valid"));

const WINDOWS_DEVICE_NAMES: &[&str] = &[
    "CON", "AUX", "COM1", "COM2", "COM3", "COM4", "LPT1", "LPT2", "LPT3", "PRN", "NUL",
];

/// A client-supplied file name reduced to a flat, ASCII-only form that is
/// safe to log, echo back, or use as a path component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeFilename(String);

impl SafeFilename {
    pub fn new(raw: &str) -> Self {
        let ascii: String = raw.nfkd().filter(char::is_ascii).collect();
        let flattened = ascii.replace(['/', '\\'], " ");
        let joined = flattened.split_whitespace().collect::<Vec<_>>().join("_");
        let cleaned = UNSAFE_CHARS.replace_all(&joined, "");
        let mut name = cleaned.trim_matches(|c| c == '.' || c == '_').to_string();

        let stem = name.split('.').next().unwrap_or_default().to_ascii_uppercase();
        if !name.is_empty() && WINDOWS_DEVICE_NAMES.contains(&stem.as_str()) {
            name.insert(0, '_');
        }

        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SafeFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
