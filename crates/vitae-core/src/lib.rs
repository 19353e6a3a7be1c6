pub mod analysis;
pub mod error;
pub mod extraction;
pub mod lexicon;
pub mod model;
pub mod parsing;

use tracing::{debug, info};

use analysis::skills::extract_skills_with_sections;
use error::VitaeError;
use extraction::PdfBackend;
use lexicon::Lexicon;
use model::{ExtractedText, RawDocument, ResumeReport};

/// Character budget for text handed to the language-model collaborator.
pub const DEFAULT_MODEL_CHAR_BUDGET: usize = 15_000;

/// Options for the analysis pipeline.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// How many ranked keywords to report.
    pub top_keywords: usize,
    /// Maximum characters of document text passed on to the language model.
    pub model_char_budget: usize,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        AnalyzeOptions {
            top_keywords: 10,
            model_char_budget: DEFAULT_MODEL_CHAR_BUDGET,
        }
    }
}

/// Extract and normalize the text of an uploaded document.
pub fn extract_document(
    doc: &RawDocument,
    pdf_backend: &dyn PdfBackend,
) -> Result<ExtractedText, VitaeError> {
    let raw = extraction::extract_raw_text(doc, pdf_backend)?;
    let text = parsing::normalize(&raw);
    info!(
        format = %doc.format,
        bytes = doc.bytes.len(),
        chars = text.char_count(),
        "extracted document text"
    );
    Ok(text)
}

/// Main API entry point: extract, normalize and analyze a document.
pub fn analyze_document(
    doc: &RawDocument,
    pdf_backend: &dyn PdfBackend,
    lexicon: &Lexicon,
    options: &AnalyzeOptions,
) -> Result<ResumeReport, VitaeError> {
    let text = extract_document(doc, pdf_backend)?;
    Ok(analyze_text(text, lexicon, options))
}

/// Analyze text that was already extracted, e.g. cached by the caller
/// between repeated analyses of the same document.
pub fn analyze_text(text: ExtractedText, lexicon: &Lexicon, options: &AnalyzeOptions) -> ResumeReport {
    let body = text.as_str();

    let sections = parsing::segment(body);
    let skills = extract_skills_with_sections(body, &sections, lexicon);
    let keywords = analysis::top_keywords(body, options.top_keywords, lexicon);
    let action_verbs = analysis::action_verbs(body, lexicon);
    let experience_years = analysis::experience_years(&sections);
    let sentiment = analysis::sentiment(body, lexicon);

    debug!(
        lexicon = lexicon.name(),
        skills = skills.len(),
        keywords = keywords.len(),
        action_verbs = action_verbs.len(),
        "analyzed document"
    );

    ResumeReport {
        text,
        sections,
        skills,
        keywords,
        action_verbs,
        experience_years,
        sentiment,
        model_char_budget: options.model_char_budget,
    }
}
