use std::fmt;
use std::path::Path;

use uuid::Uuid;

use super::safe_filename::SafeFilename;

pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "tiff", "tif", "webp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

/// Closed set of formats the extractor knows how to read.
///
/// The format is always derived from the file name, never from the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    PlainText,
    Pdf,
    Docx,
    Pptx,
    Image,
}

impl DocumentFormat {
    pub const ALL: [DocumentFormat; 5] = [
        Self::PlainText,
        Self::Pdf,
        Self::Docx,
        Self::Pptx,
        Self::Image,
    ];

    pub fn from_extension(extension: &str) -> Option<Self> {
        let lowered = extension.to_ascii_lowercase();
        match lowered.as_str() {
            "txt" => Some(Self::PlainText),
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "pptx" => Some(Self::Pptx),
            ext if IMAGE_EXTENSIONS.contains(&ext) => Some(Self::Image),
            _ => None,
        }
    }

    pub fn from_filename(filename: &str) -> Option<Self> {
        Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Upper-case name used in user-facing messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlainText => "TXT",
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
            Self::Pptx => "PPTX",
            Self::Image => "IMAGE",
        }
    }

    /// Comma separated list of every accepted extension.
    pub fn allowed_extensions() -> String {
        let mut extensions = vec!["txt", "pdf", "docx", "pptx"];
        extensions.extend_from_slice(IMAGE_EXTENSIONS);
        extensions.join(", ")
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub filename: SafeFilename,
    pub format: DocumentFormat,
    pub size_bytes: u64,
}

impl Document {
    pub fn new(filename: SafeFilename, format: DocumentFormat, size_bytes: u64) -> Self {
        Self {
            id: DocumentId::new(),
            filename,
            format,
            size_bytes,
        }
    }
}
