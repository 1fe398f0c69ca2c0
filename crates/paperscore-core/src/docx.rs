//! DOCX paragraph extraction
//!
//! A `.docx` file is a ZIP archive. Paragraph text lives in
//! `word/document.xml` as `w:t` runs inside `w:p` elements; the paragraph's
//! style id (`w:pStyle`) resolves to a human-readable style name through
//! `word/styles.xml` (`w:style/@w:styleId` -> `w:name/@w:val`).
//!
//! Only the ordered paragraph sequence is extracted. Tables, images,
//! numbering and metadata are irrelevant to the rubric and skipped.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::ZipArchive;

use crate::error::{PaperError, Result};

/// Style name assigned when a paragraph has no explicit `w:pStyle`
const DEFAULT_STYLE_NAME: &str = "Normal";

/// One paragraph of the source document: its text and the name of its style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub text: String,
    pub style_name: String,
}

/// A parsed document: the ordered paragraph sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub paragraphs: Vec<Paragraph>,
}

/// Parse a `.docx` file into its ordered paragraph sequence.
///
/// Fails with [`PaperError::Parse`] if the file is missing, not a ZIP
/// archive, or does not contain a valid `word/document.xml`.
pub fn parse(path: &Path) -> Result<Document> {
    let file = File::open(path).map_err(|e| PaperError::parse(path, e))?;
    let mut archive = ZipArchive::new(file).map_err(|e| PaperError::parse(path, e))?;

    let styles = parse_styles(&mut archive, path)?;
    let document_xml = read_archive_entry(&mut archive, "word/document.xml", path)?;
    let paragraphs = parse_paragraphs(&document_xml, &styles, path)?;

    tracing::debug!(
        path = %path.display(),
        paragraphs = paragraphs.len(),
        styles = styles.len(),
        "parsed document"
    );
    Ok(Document { paragraphs })
}

/// Extract an attribute value by key from an element
fn get_attr(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .find(|a| a.as_ref().ok().map(|x| x.key.as_ref()) == Some(key))
        .and_then(std::result::Result::ok)
        .map(|attr| String::from_utf8_lossy(&attr.value).to_string())
}

fn read_archive_entry(archive: &mut ZipArchive<File>, name: &str, path: &Path) -> Result<String> {
    let mut entry = archive
        .by_name(name)
        .map_err(|e| PaperError::parse(path, format!("missing {name}: {e}")))?;
    let mut content = String::new();
    entry
        .read_to_string(&mut content)
        .map_err(|e| PaperError::parse(path, e))?;
    Ok(content)
}

/// Parse `word/styles.xml` into a style id -> style name map.
///
/// A document without styles.xml is still readable; paragraphs then keep
/// their raw style ids as names.
fn parse_styles(archive: &mut ZipArchive<File>, path: &Path) -> Result<HashMap<String, String>> {
    let mut styles_map = HashMap::new();

    let xml_content = match read_archive_entry(archive, "word/styles.xml", path) {
        Ok(content) => content,
        Err(_) => return Ok(styles_map),
    };

    let mut reader = Reader::from_str(&xml_content);
    let mut current_style_id: Option<String> = None;
    let mut current_name: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:style" => {
                    current_style_id = get_attr(&e, b"w:styleId");
                    current_name = None;
                }
                b"w:name" if current_style_id.is_some() => {
                    current_name = get_attr(&e, b"w:val");
                }
                _ => {}
            },
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"w:style" {
                    if let (Some(id), Some(name)) = (current_style_id.take(), current_name.take()) {
                        styles_map.insert(id, name);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(PaperError::parse(path, format!("invalid styles.xml: {e}")));
            }
            _ => {}
        }
    }

    Ok(styles_map)
}

/// Walk `word/document.xml` and collect top-level body paragraphs in order.
///
/// Paragraphs nested in tables are not part of the body flow and are
/// skipped, matching what common word processors report as document text.
fn parse_paragraphs(
    xml_content: &str,
    styles: &HashMap<String, String>,
    path: &Path,
) -> Result<Vec<Paragraph>> {
    let mut paragraphs = Vec::new();

    let mut reader = Reader::from_str(xml_content);
    let mut table_depth = 0usize;
    let mut in_paragraph = false;
    let mut in_text_run = false;
    let mut text = String::new();
    let mut style_id: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:tbl" => table_depth += 1,
                b"w:p" if table_depth == 0 => {
                    in_paragraph = true;
                    text.clear();
                    style_id = None;
                }
                b"w:pStyle" if in_paragraph => {
                    style_id = get_attr(&e, b"w:val");
                }
                b"w:t" if in_paragraph => in_text_run = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                // Self-closing paragraph: empty text, default style
                b"w:p" if table_depth == 0 => {
                    paragraphs.push(Paragraph {
                        text: String::new(),
                        style_name: DEFAULT_STYLE_NAME.to_string(),
                    });
                }
                b"w:pStyle" if in_paragraph => {
                    style_id = get_attr(&e, b"w:val");
                }
                _ => {}
            },
            Ok(Event::Text(t)) if in_text_run => {
                let fragment = t
                    .unescape()
                    .map_err(|e| PaperError::parse(path, format!("invalid document.xml: {e}")))?;
                text.push_str(&fragment);
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                b"w:t" => in_text_run = false,
                b"w:p" if table_depth == 0 && in_paragraph => {
                    let style_name = match style_id.take() {
                        Some(id) => styles.get(&id).cloned().unwrap_or(id),
                        None => DEFAULT_STYLE_NAME.to_string(),
                    };
                    paragraphs.push(Paragraph {
                        text: std::mem::take(&mut text),
                        style_name,
                    });
                    in_paragraph = false;
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(PaperError::parse(path, format!("invalid document.xml: {e}")));
            }
            _ => {}
        }
    }

    Ok(paragraphs)
}
