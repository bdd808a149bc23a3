use std::collections::HashMap;

use async_trait::async_trait;
use quick_xml::events::{BytesStart, Event};
use quick_xml::{NsReader, Reader};

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat, Extraction};

use super::blocking::run_blocking;
use super::ooxml::{OoxmlPackage, Vocabulary, read_event};

const PRESENTATION_PART: &str = "ppt/presentation.xml";
const PRESENTATION_RELS_PART: &str = "ppt/_rels/presentation.xml.rels";

#[derive(Default)]
pub struct PptxAdapter;

impl PptxAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Walks slides in presentation order and shapes in stored order,
    /// appending each text-bearing shape followed by `\n`.
    pub fn extract(data: &[u8]) -> Result<Extraction, FileLoaderError> {
        let mut package = OoxmlPackage::open(data, DocumentFormat::Pptx)?;

        let presentation = package.read_part(PRESENTATION_PART)?;
        let slide_ids = slide_relationship_ids(&presentation)
            .map_err(|e| package.xml_error(PRESENTATION_PART, e))?;

        let rels = package.read_part(PRESENTATION_RELS_PART)?;
        let targets =
            relationship_targets(&rels).map_err(|e| package.xml_error(PRESENTATION_RELS_PART, e))?;

        let mut text = String::new();

        for rel_id in &slide_ids {
            let target = targets.get(rel_id).ok_or_else(|| {
                FileLoaderError::malformed(
                    DocumentFormat::Pptx,
                    format!("slide relationship {rel_id} has no target"),
                )
            })?;
            let part_name = resolve_part_name(target);
            let slide = package.read_part(&part_name)?;

            for shape in shape_texts(&slide).map_err(|e| package.xml_error(&part_name, e))? {
                text.push_str(&shape);
                text.push('\n');
            }
        }

        tracing::debug!(slides = slide_ids.len(), "PPTX slides read");

        Ok(Extraction::from_raw(&text))
    }
}

fn slide_relationship_ids(xml: &str) -> quick_xml::Result<Vec<String>> {
    let mut reader = NsReader::from_str(xml);
    let mut ids = Vec::new();

    loop {
        let (vocabulary, event) = read_event(&mut reader)?;

        match event {
            Event::Start(e) | Event::Empty(e)
                if vocabulary == Some(Vocabulary::Presentation)
                    && e.local_name().as_ref() == b"sldId" =>
            {
                if let Some(id) = relationship_id(&reader, &e)? {
                    ids.push(id);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(ids)
}

/// The `id` attribute bound to the relationships namespace, not the bare
/// numeric `id` that sits next to it.
fn relationship_id(
    reader: &NsReader<&[u8]>,
    element: &BytesStart<'_>,
) -> quick_xml::Result<Option<String>> {
    for attr in element.attributes() {
        let attr = attr?;
        let (namespace, local_name) = reader.resolve_attribute(attr.key);
        if Vocabulary::of(&namespace) == Some(Vocabulary::Relationships)
            && local_name.as_ref() == b"id"
        {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn relationship_targets(xml: &str) -> quick_xml::Result<HashMap<String, String>> {
    let mut reader = Reader::from_str(xml);
    let mut targets = HashMap::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                if let (Some(id), Some(target)) = (attribute(&e, b"Id")?, attribute(&e, b"Target")?)
                {
                    targets.insert(id, target);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(targets)
}

fn attribute(element: &BytesStart<'_>, name: &[u8]) -> quick_xml::Result<Option<String>> {
    match element.try_get_attribute(name)? {
        Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}

/// Targets are relative to `ppt/` unless they start with `/`.
fn resolve_part_name(target: &str) -> String {
    match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => format!("ppt/{}", target.trim_start_matches("./")),
    }
}

/// Text of every `p:sp` shape holding non-blank text. Paragraphs inside a
/// shape are joined with `\n`; group shapes are walked in place.
fn shape_texts(xml: &str) -> quick_xml::Result<Vec<String>> {
    let mut reader = NsReader::from_str(xml);
    let mut shapes = Vec::new();
    let mut shape: Option<Vec<String>> = None;
    let mut in_text = false;

    loop {
        let (vocabulary, event) = read_event(&mut reader)?;

        match (vocabulary, event) {
            (Some(Vocabulary::Presentation), Event::Start(e))
                if e.local_name().as_ref() == b"sp" =>
            {
                shape = Some(Vec::new());
            }
            (Some(Vocabulary::Drawing), Event::Start(e) | Event::Empty(e))
                if e.local_name().as_ref() == b"p" =>
            {
                if let Some(paragraphs) = shape.as_mut() {
                    paragraphs.push(String::new());
                }
            }
            (Some(Vocabulary::Drawing), Event::Start(e)) if e.local_name().as_ref() == b"t" => {
                in_text = true;
            }
            (Some(Vocabulary::Drawing), Event::Empty(e)) if e.local_name().as_ref() == b"br" => {
                if let Some(current) = shape.as_mut().and_then(|p| p.last_mut()) {
                    current.push('\n');
                }
            }
            (_, Event::Text(t)) if in_text => {
                let text = t.unescape()?;
                if let Some(current) = shape.as_mut().and_then(|p| p.last_mut()) {
                    current.push_str(&text);
                }
            }
            (Some(Vocabulary::Drawing), Event::End(e)) if e.local_name().as_ref() == b"t" => {
                in_text = false;
            }
            (Some(Vocabulary::Presentation), Event::End(e))
                if e.local_name().as_ref() == b"sp" =>
            {
                if let Some(paragraphs) = shape.take() {
                    let text = paragraphs.join("\n");
                    if !text.trim().is_empty() {
                        shapes.push(text);
                    }
                }
            }
            (_, Event::Eof) => break,
            _ => {}
        }
    }

    Ok(shapes)
}

#[async_trait]
impl FileLoader for PptxAdapter {
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
        if document.format != DocumentFormat::Pptx {
            return Err(FileLoaderError::UnsupportedFormat(document.format));
        }

        let data_owned = data.to_vec();
        run_blocking(DocumentFormat::Pptx, move || Self::extract(&data_owned)).await
    }
}
