pub mod analyze;
pub mod compare;
pub mod extract;
pub mod lexicon;

use std::borrow::Cow;
use std::path::Path;

use vitae_core::error::VitaeError;
use vitae_core::lexicon::Lexicon;
use vitae_core::model::{DocumentFormat, RawDocument};

/// Read a document from disk, see [`resolve_format`].
pub fn read_document(path: &Path, format: Option<&str>) -> Result<RawDocument, VitaeError> {
    let bytes = std::fs::read(path)?;
    let format = resolve_format(path, &bytes, format)?;
    Ok(RawDocument::new(bytes, format))
}

/// An explicit `--format` wins, then the file extension. Magic bytes are
/// only consulted when the file has no extension at all; an unsupported
/// extension is rejected even if the contents look like a known container.
pub fn resolve_format(
    path: &Path,
    bytes: &[u8],
    format: Option<&str>,
) -> Result<DocumentFormat, VitaeError> {
    if let Some(tag) = format {
        return DocumentFormat::from_extension(tag);
    }
    if path.extension().is_some() {
        return DocumentFormat::from_path(path);
    }
    DocumentFormat::sniff(bytes)
        .ok_or_else(|| VitaeError::UnsupportedFormat(path.display().to_string()))
}

/// The lexicon given with `--lexicon`, or the built-in one.
pub fn resolve_lexicon(path: Option<&Path>) -> Result<Cow<'static, Lexicon>, VitaeError> {
    match path {
        Some(path) => Ok(Cow::Owned(vitae_core::lexicon::load_lexicon(path)?)),
        None => Ok(Cow::Borrowed(Lexicon::builtin())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ZIP_MAGIC: &[u8] = b"PK\x03\x04 rest of container";

    #[test]
    fn test_explicit_format_wins() {
        let format = resolve_format(Path::new("resume.pdf"), ZIP_MAGIC, Some("txt")).unwrap();
        assert_eq!(format, DocumentFormat::Text);
    }

    #[test]
    fn test_explicit_format_must_be_supported() {
        assert!(matches!(
            resolve_format(Path::new("resume.pdf"), b"%PDF", Some("rtf")),
            Err(VitaeError::UnsupportedFormat(tag)) if tag == "rtf"
        ));
    }

    #[test]
    fn test_extension_beats_magic_bytes() {
        let format = resolve_format(Path::new("resume.TXT"), ZIP_MAGIC, None).unwrap();
        assert_eq!(format, DocumentFormat::Text);
    }

    #[test]
    fn test_unsupported_extension_not_sniffed() {
        for name in ["resume.odt", "resume.xlsx", "resume.pptx", "archive.zip"] {
            assert!(
                matches!(
                    resolve_format(Path::new(name), ZIP_MAGIC, None),
                    Err(VitaeError::UnsupportedFormat(_))
                ),
                "{name}"
            );
        }
    }

    #[test]
    fn test_sniff_without_extension() {
        assert_eq!(
            resolve_format(Path::new("resume"), b"%PDF-1.7", None).unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            resolve_format(Path::new("resume"), ZIP_MAGIC, None).unwrap(),
            DocumentFormat::Docx
        );
        assert!(matches!(
            resolve_format(Path::new("resume"), b"plain words", None),
            Err(VitaeError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_read_document_rejects_odt_before_parsing() {
        let mut file = tempfile::Builder::new().suffix(".odt").tempfile().unwrap();
        file.write_all(ZIP_MAGIC).unwrap();
        assert!(matches!(
            read_document(file.path(), None),
            Err(VitaeError::UnsupportedFormat(ext)) if ext == "odt"
        ));
    }
}
