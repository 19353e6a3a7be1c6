use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use tracing::debug;

use crate::error::VitaeError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extract the body paragraphs of a DOCX file, in document order.
///
/// Only top-level paragraphs are read (tables, text boxes and headers are
/// not), and paragraphs with nothing but whitespace are dropped. The
/// remaining paragraphs are joined with newlines.
pub fn extract_docx(bytes: &[u8]) -> Result<String, VitaeError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| VitaeError::corrupt("docx", e))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| VitaeError::corrupt("docx", format!("{DOCUMENT_PART}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| VitaeError::corrupt("docx", e))?;

    let paragraphs = body_paragraphs(&xml)?;
    let total = paragraphs.len();
    let kept: Vec<String> = paragraphs
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .collect();

    debug!(paragraphs = total, kept = kept.len(), "extracted DOCX paragraphs");
    Ok(kept.join("\n"))
}

/// Text of every `w:p` that is a direct child of `w:body`.
fn body_paragraphs(xml: &str) -> Result<Vec<String>, VitaeError> {
    let mut reader = Reader::from_str(xml);
    let mut open: Vec<Vec<u8>> = Vec::new();
    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = e.local_name().as_ref().to_vec();
                if name == b"p" && is_body(&open) {
                    current = Some(String::new());
                }
                open.push(name);
            }
            Ok(Event::End(_)) => {
                let closed = open.pop();
                if closed.as_deref() == Some(b"p".as_slice()) && is_body(&open) {
                    if let Some(text) = current.take() {
                        paragraphs.push(text);
                    }
                }
            }
            Ok(Event::Empty(e)) => {
                let name = e.local_name();
                match name.as_ref() {
                    b"p" if is_body(&open) => paragraphs.push(String::new()),
                    b"tab" | b"br" | b"cr" => {
                        if let Some(text) = current.as_mut().filter(|_| in_own_paragraph(&open)) {
                            text.push(if name.as_ref() == b"tab" { '\t' } else { '\n' });
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Text(t)) => {
                if open.last().map(Vec::as_slice) == Some(b"t".as_slice()) {
                    if let Some(text) = current.as_mut().filter(|_| in_own_paragraph(&open)) {
                        let unescaped = t.unescape().map_err(|e| VitaeError::corrupt("docx", e))?;
                        text.push_str(&unescaped);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(VitaeError::corrupt("docx", e)),
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn is_body(open: &[Vec<u8>]) -> bool {
    open.last().map(Vec::as_slice) == Some(b"body".as_slice())
}

/// Inside exactly one paragraph, i.e. not in a text box nested in a run.
fn in_own_paragraph(open: &[Vec<u8>]) -> bool {
    open.iter().filter(|name| name.as_slice() == b"p").count() == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn document(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}<w:sectPr/></w:body></w:document>"#
        )
    }

    fn docx_bytes(document_xml: &str) -> Vec<u8> {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        zip.start_file(DOCUMENT_PART, SimpleFileOptions::default())
            .unwrap();
        zip.write_all(document_xml.as_bytes()).unwrap();
        zip.finish().unwrap().into_inner()
    }

    #[test]
    fn test_paragraphs_in_order() {
        let xml = document(
            "<w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>\
             <w:p><w:r><w:t xml:space=\"preserve\">Senior </w:t></w:r><w:r><w:t>Engineer</w:t></w:r></w:p>",
        );
        assert_eq!(
            extract_docx(&docx_bytes(&xml)).unwrap(),
            "Jane Doe\nSenior Engineer"
        );
    }

    #[test]
    fn test_blank_paragraphs_dropped() {
        let xml = document(
            "<w:p/><w:p><w:r><w:t>Skills</w:t></w:r></w:p>\
             <w:p><w:r><w:t>   </w:t></w:r></w:p><w:p><w:r><w:t>Rust</w:t></w:r></w:p>",
        );
        assert_eq!(extract_docx(&docx_bytes(&xml)).unwrap(), "Skills\nRust");
    }

    #[test]
    fn test_tabs_breaks_and_entities() {
        let xml = document(
            "<w:p><w:r><w:t>R&amp;D</w:t><w:tab/><w:t>2020</w:t><w:br/><w:t>Lead</w:t></w:r></w:p>",
        );
        assert_eq!(extract_docx(&docx_bytes(&xml)).unwrap(), "R&D\t2020\nLead");
    }

    #[test]
    fn test_table_paragraphs_skipped() {
        let xml = document(
            "<w:p><w:r><w:t>Before</w:t></w:r></w:p>\
             <w:tbl><w:tr><w:tc><w:p><w:r><w:t>Cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>\
             <w:p><w:r><w:t>After</w:t></w:r></w:p>",
        );
        assert_eq!(extract_docx(&docx_bytes(&xml)).unwrap(), "Before\nAfter");
    }

    #[test]
    fn test_not_a_zip_is_corrupt() {
        assert!(matches!(
            extract_docx(b"plain text pretending to be docx"),
            Err(VitaeError::CorruptDocument { .. })
        ));
    }

    #[test]
    fn test_missing_document_part_is_corrupt() {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        zip.start_file("word/styles.xml", SimpleFileOptions::default())
            .unwrap();
        zip.write_all(b"<w:styles/>").unwrap();
        let bytes = zip.finish().unwrap().into_inner();

        let err = extract_docx(&bytes).unwrap_err();
        assert!(err.to_string().contains(DOCUMENT_PART));
    }

    #[test]
    fn test_malformed_xml_is_corrupt() {
        let bytes = docx_bytes("<w:document><w:body><w:p></w:body>");
        assert!(matches!(
            extract_docx(&bytes),
            Err(VitaeError::CorruptDocument { .. })
        ));
    }
}
