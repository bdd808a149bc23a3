#![allow(dead_code)]

use std::io::{Cursor, Write};

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use lopdf::content::{Content, Operation};
use lopdf::{Document as PdfDocument, Object, Stream, dictionary};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use sentilyze::domain::{Document, DocumentFormat, SafeFilename};

const WORD_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const PRESENTATION_NS: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const DRAWING_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const RELATIONSHIP_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const PACKAGE_RELATIONSHIP_NS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships";
const SLIDE_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";

pub fn document(filename: &str, format: DocumentFormat, data: &[u8]) -> Document {
    Document::new(SafeFilename::new(filename), format, data.len() as u64)
}

pub fn zip_bytes(parts: &[(&str, String)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in parts {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

pub fn docx_paragraph(text: &str) -> String {
    format!("<w:p><w:r><w:t>{text}</w:t></w:r></w:p>")
}

/// A minimal DOCX whose body is `body_xml`.
pub fn docx_bytes(body_xml: &str) -> Vec<u8> {
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{WORD_NS}"><w:body>{body_xml}</w:body></w:document>"#
    );
    zip_bytes(&[
        ("[Content_Types].xml", content_types()),
        ("word/document.xml", document),
    ])
}

/// A minimal PPTX. Each slide is a list of shapes, each shape a list of
/// paragraphs. `order` lists slide numbers (1-based) in presentation order.
pub fn pptx_bytes(slides: &[Vec<Vec<&str>>], order: &[usize]) -> Vec<u8> {
    let slide_ids: String = order
        .iter()
        .enumerate()
        .map(|(i, n)| format!(r#"<p:sldId id="{}" r:id="rId{n}"/>"#, 256 + i))
        .collect();
    let presentation = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:presentation xmlns:p="{PRESENTATION_NS}" xmlns:r="{RELATIONSHIP_NS}"><p:sldIdLst>{slide_ids}</p:sldIdLst></p:presentation>"#
    );

    let relationships: String = (1..=slides.len())
        .map(|n| {
            format!(r#"<Relationship Id="rId{n}" Type="{SLIDE_REL_TYPE}" Target="slides/slide{n}.xml"/>"#)
        })
        .collect();
    let rels = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="{PACKAGE_RELATIONSHIP_NS}">{relationships}</Relationships>"#
    );

    let mut parts = vec![
        ("[Content_Types].xml".to_string(), content_types()),
        ("ppt/presentation.xml".to_string(), presentation),
        ("ppt/_rels/presentation.xml.rels".to_string(), rels),
    ];

    for (index, shapes) in slides.iter().enumerate() {
        let shapes_xml: String = shapes.iter().map(|paragraphs| shape_xml(paragraphs)).collect();
        let slide = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:sld xmlns:a="{DRAWING_NS}" xmlns:p="{PRESENTATION_NS}"><p:cSld><p:spTree>{shapes_xml}</p:spTree></p:cSld></p:sld>"#
        );
        parts.push((format!("ppt/slides/slide{}.xml", index + 1), slide));
    }

    let borrowed: Vec<(&str, String)> = parts
        .iter()
        .map(|(name, content)| (name.as_str(), content.clone()))
        .collect();
    zip_bytes(&borrowed)
}

fn shape_xml(paragraphs: &[&str]) -> String {
    let body: String = paragraphs
        .iter()
        .map(|text| {
            if text.is_empty() {
                "<a:p/>".to_string()
            } else {
                format!("<a:p><a:r><a:t>{text}</a:t></a:r></a:p>")
            }
        })
        .collect();
    format!("<p:sp><p:nvSpPr/><p:txBody><a:bodyPr/>{body}</p:txBody></p:sp>")
}

fn content_types() -> String {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"></Types>"#.to_string()
}

/// One page per entry; an empty entry yields a page with no text.
pub fn pdf_bytes(pages: &[&str]) -> Vec<u8> {
    let mut doc = PdfDocument::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let operations = if text.is_empty() {
            Vec::new()
        } else {
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ]
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
    let mut buffer = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .unwrap();
    buffer
}
