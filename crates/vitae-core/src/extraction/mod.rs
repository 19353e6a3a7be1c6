pub mod docx;
pub mod pdf;
pub mod plain;

use crate::error::VitaeError;
use crate::model::{DocumentFormat, RawDocument};

/// Trait for PDF text extraction backends.
pub trait PdfBackend: Send + Sync {
    /// Extract the text of every page, in page order. Pages without
    /// extractable text come back as empty strings.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<String>, VitaeError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Dispatch a document to the extractor for its format and return the raw,
/// not yet normalized, text.
pub fn extract_raw_text(
    doc: &RawDocument,
    pdf_backend: &dyn PdfBackend,
) -> Result<String, VitaeError> {
    match doc.format {
        DocumentFormat::Pdf => pdf::extract_pdf(&doc.bytes, pdf_backend),
        DocumentFormat::Docx => docx::extract_docx(&doc.bytes),
        DocumentFormat::Text => plain::extract_plain(&doc.bytes),
    }
}
