use async_trait::async_trait;
use quick_xml::NsReader;
use quick_xml::events::Event;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat, Extraction};

use super::blocking::run_blocking;
use super::ooxml::{OoxmlPackage, Vocabulary, read_event};

const DOCUMENT_PART: &str = "word/document.xml";

#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Paragraph texts of the main document part, in document order,
    /// separated by `\n`.
    pub fn extract(data: &[u8]) -> Result<Extraction, FileLoaderError> {
        let mut package = OoxmlPackage::open(data, DocumentFormat::Docx)?;
        let xml = package.read_part(DOCUMENT_PART)?;

        let paragraphs =
            paragraph_texts(&xml).map_err(|e| package.xml_error(DOCUMENT_PART, e))?;

        tracing::debug!(paragraphs = paragraphs.len(), "DOCX paragraphs read");

        Ok(Extraction::from_raw(&paragraphs.join("\n")))
    }
}

/// Paragraphs are emitted when they close, so a paragraph nested in a text
/// box comes out before the paragraph that anchors it.
fn paragraph_texts(xml: &str) -> quick_xml::Result<Vec<String>> {
    let mut reader = NsReader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut open: Vec<String> = Vec::new();
    let mut in_text = false;

    loop {
        let (vocabulary, event) = read_event(&mut reader)?;
        let word = vocabulary == Some(Vocabulary::WordProcessing);

        match event {
            Event::Start(e) if word => match e.local_name().as_ref() {
                b"p" => open.push(String::new()),
                b"t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) if word => match e.local_name().as_ref() {
                b"p" => paragraphs.push(String::new()),
                b"tab" => push_char(&mut open, '\t'),
                b"br" | b"cr" => push_char(&mut open, '\n'),
                _ => {}
            },
            Event::Text(t) if in_text => {
                let text = t.unescape()?;
                if let Some(current) = open.last_mut() {
                    current.push_str(&text);
                }
            }
            Event::End(e) if word => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => {
                    if let Some(paragraph) = open.pop() {
                        paragraphs.push(paragraph);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn push_char(open: &mut [String], ch: char) {
    if let Some(current) = open.last_mut() {
        current.push(ch);
    }
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<Extraction, FileLoaderError> {
        if document.format != DocumentFormat::Docx {
            return Err(FileLoaderError::UnsupportedFormat(document.format));
        }

        let data_owned = data.to_vec();
        run_blocking(DocumentFormat::Docx, move || Self::extract(&data_owned)).await
    }
}
