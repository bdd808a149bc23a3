use std::io::{Cursor, Read};

use quick_xml::NsReader;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use zip::ZipArchive;

use crate::application::ports::FileLoaderError;
use crate::domain::DocumentFormat;

/// Upper bound on a single decompressed XML part.
const MAX_PART_BYTES: u64 = 64 * 1024 * 1024;

/// Office Open XML package (the zip container behind DOCX and PPTX).
pub(super) struct OoxmlPackage<'a> {
    archive: ZipArchive<Cursor<&'a [u8]>>,
    format: DocumentFormat,
}

impl<'a> OoxmlPackage<'a> {
    pub(super) fn open(data: &'a [u8], format: DocumentFormat) -> Result<Self, FileLoaderError> {
        let archive = ZipArchive::new(Cursor::new(data)).map_err(|e| {
            FileLoaderError::malformed(format, format!("not a valid zip package: {e}"))
        })?;

        Ok(Self { archive, format })
    }

    pub(super) fn read_part(&mut self, name: &str) -> Result<String, FileLoaderError> {
        let format = self.format;
        let part = self.archive.by_name(name).map_err(|e| {
            FileLoaderError::malformed(format, format!("missing part {name}: {e}"))
        })?;

        let mut xml = String::new();
        part.take(MAX_PART_BYTES + 1)
            .read_to_string(&mut xml)
            .map_err(|e| {
                FileLoaderError::malformed(format, format!("unreadable part {name}: {e}"))
            })?;

        if xml.len() as u64 > MAX_PART_BYTES {
            return Err(FileLoaderError::malformed(
                format,
                format!("part {name} exceeds {MAX_PART_BYTES} bytes"),
            ));
        }

        Ok(xml)
    }

    pub(super) fn xml_error(&self, part: &str, error: quick_xml::Error) -> FileLoaderError {
        FileLoaderError::malformed(self.format, format!("invalid XML in {part}: {error}"))
    }
}

/// XML vocabularies read from OOXML parts. Producers pick their own
/// prefixes, so elements are matched by namespace URI and local name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Vocabulary {
    WordProcessing,
    Presentation,
    Drawing,
    Relationships,
}

impl Vocabulary {
    const ALL: [Self; 4] = [
        Self::WordProcessing,
        Self::Presentation,
        Self::Drawing,
        Self::Relationships,
    ];

    /// Transitional URI first, then strict.
    fn uris(self) -> [&'static [u8]; 2] {
        match self {
            Self::WordProcessing => [
                b"http://schemas.openxmlformats.org/wordprocessingml/2006/main",
                b"http://purl.oclc.org/ooxml/wordprocessingml/main",
            ],
            Self::Presentation => [
                b"http://schemas.openxmlformats.org/presentationml/2006/main",
                b"http://purl.oclc.org/ooxml/presentationml/main",
            ],
            Self::Drawing => [
                b"http://schemas.openxmlformats.org/drawingml/2006/main",
                b"http://purl.oclc.org/ooxml/drawingml/main",
            ],
            Self::Relationships => [
                b"http://schemas.openxmlformats.org/officeDocument/2006/relationships",
                b"http://purl.oclc.org/ooxml/officeDocument/relationships",
            ],
        }
    }

    pub(super) fn of(namespace: &ResolveResult<'_>) -> Option<Self> {
        let ResolveResult::Bound(Namespace(uri)) = namespace else {
            return None;
        };
        Self::ALL
            .into_iter()
            .find(|vocabulary| vocabulary.uris().iter().any(|known| *known == *uri))
    }
}

/// Next event together with the vocabulary its element name resolves to.
pub(super) fn read_event<'i>(
    reader: &mut NsReader<&'i [u8]>,
) -> quick_xml::Result<(Option<Vocabulary>, Event<'i>)> {
    let (namespace, event) = reader.read_resolved_event()?;
    Ok((Vocabulary::of(&namespace), event))
}
