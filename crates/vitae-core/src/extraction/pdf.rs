use std::panic;
use tracing::{debug, warn};

use crate::error::VitaeError;
use crate::extraction::PdfBackend;

/// PDF backend built on the pure-Rust `pdf-extract` crate. Works entirely in
/// memory.
pub struct PdfExtractBackend;

impl PdfExtractBackend {
    pub fn new() -> Self {
        PdfExtractBackend
    }
}

impl Default for PdfExtractBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfBackend for PdfExtractBackend {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<String>, VitaeError> {
        // pdf-extract panics on some malformed content streams instead of
        // returning an error.
        let outcome =
            panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(pdf_bytes));
        match outcome {
            Ok(Ok(pages)) => Ok(pages),
            Ok(Err(e)) => Err(VitaeError::corrupt("pdf", e)),
            Err(_) => Err(VitaeError::corrupt("pdf", "parser aborted on malformed content")),
        }
    }

    fn backend_name(&self) -> &str {
        "pdf-extract"
    }
}

/// Extract PDF text page by page and join the pages with newlines.
///
/// Pages without text are skipped. If no page has text at all the document
/// is most likely a scan, which is reported as `EmptyOrImageOnlyDocument`.
pub fn extract_pdf(pdf_bytes: &[u8], backend: &dyn PdfBackend) -> Result<String, VitaeError> {
    let pages = backend.extract_pages(pdf_bytes)?;
    let total = pages.len();

    let with_text: Vec<&str> = pages
        .iter()
        .map(String::as_str)
        .filter(|page| !page.trim().is_empty())
        .collect();

    if with_text.is_empty() {
        warn!(
            backend = backend.backend_name(),
            pages = total,
            "no extractable text in PDF"
        );
        return Err(VitaeError::EmptyOrImageOnlyDocument);
    }

    debug!(
        backend = backend.backend_name(),
        pages = total,
        skipped = total - with_text.len(),
        "extracted PDF pages"
    );
    Ok(with_text.join("\n"))
}
