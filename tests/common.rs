//! Shared helpers for paperscore integration tests

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Get a Command for paperscore
pub fn paperscore() -> Command {
    cargo_bin_cmd!("paperscore")
}

/// Style ids understood by [`write_paper`], mapped to Word-style names
const STYLES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8"?>"#,
    r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    r#"<w:style w:type="paragraph" w:styleId="Normal"><w:name w:val="Normal"/></w:style>"#,
    r#"<w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/></w:style>"#,
    r#"<w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/></w:style>"#,
    r#"</w:styles>"#,
);

/// Write a minimal `.docx` fixture with the given (style id, text) paragraphs
#[allow(dead_code)]
pub fn write_paper(dir: &Path, name: &str, paragraphs: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).expect("create fixture file");
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    zip.start_file("word/styles.xml", options).unwrap();
    zip.write_all(STYLES_XML.as_bytes()).unwrap();

    zip.start_file("word/document.xml", options).unwrap();
    let body: String = paragraphs
        .iter()
        .map(|(style_id, text)| {
            format!(
                "<w:p><w:pPr><w:pStyle w:val=\"{}\"/></w:pPr><w:r><w:t>{}</w:t></w:r></w:p>",
                style_id,
                xml_escape(text)
            )
        })
        .collect();
    let document = format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
            "<w:body>{}</w:body></w:document>",
        ),
        body
    );
    zip.write_all(document.as_bytes()).unwrap();
    zip.finish().unwrap();
    path
}

/// Paragraphs for a paper that scores 5 on every metric: the four special
/// headings, four chapters, and a body in the 1000-2000 word range
#[allow(dead_code)]
pub fn complete_paper_paragraphs(body: &str) -> Vec<(&'static str, String)> {
    let mut paragraphs: Vec<(&'static str, String)> = [
        "Voorwoord",
        "Inhoudsopgave",
        "Hoofdstuk 1",
        "Hoofdstuk 2",
        "Hoofdstuk 3",
        "Hoofdstuk 4",
        "Nawoord",
        "Bronnenlijst",
    ]
    .iter()
    .map(|heading| ("Heading1", (*heading).to_string()))
    .collect();
    paragraphs.push(("Normal", body.to_string()));
    paragraphs
}

/// Find the single `scores_*.csv` report in the output directory
#[allow(dead_code)]
pub fn find_report(output_dir: &Path) -> PathBuf {
    let mut reports: Vec<PathBuf> = std::fs::read_dir(output_dir)
        .expect("read output dir")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("scores_") && n.ends_with(".csv"))
        })
        .collect();
    assert_eq!(reports.len(), 1, "expected exactly one report");
    reports.remove(0)
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
