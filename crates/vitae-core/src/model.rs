use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use crate::error::VitaeError;
use crate::parsing::normalize::normalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Text,
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Pdf => write!(f, "pdf"),
            DocumentFormat::Docx => write!(f, "docx"),
            DocumentFormat::Text => write!(f, "text"),
        }
    }
}

impl DocumentFormat {
    /// Resolve a declared format tag or file extension (with or without the
    /// leading dot).
    pub fn from_extension(ext: &str) -> Result<DocumentFormat, VitaeError> {
        let lower = ext.trim().trim_start_matches('.').to_lowercase();
        match lower.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            "txt" | "text" => Ok(DocumentFormat::Text),
            _ => Err(VitaeError::UnsupportedFormat(ext.to_string())),
        }
    }

    pub fn from_path(path: &Path) -> Result<DocumentFormat, VitaeError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| VitaeError::UnsupportedFormat(path.display().to_string()))?;
        DocumentFormat::from_extension(ext)
    }

    /// Guess the container format from magic bytes. Plain text has no
    /// signature, so it is never sniffed.
    pub fn sniff(bytes: &[u8]) -> Option<DocumentFormat> {
        if bytes.starts_with(b"%PDF") {
            Some(DocumentFormat::Pdf)
        } else if bytes.starts_with(b"PK\x03\x04") {
            Some(DocumentFormat::Docx)
        } else {
            None
        }
    }
}

/// An uploaded document: the raw bytes plus the format they are declared as.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub bytes: Vec<u8>,
    pub format: DocumentFormat,
}

impl RawDocument {
    pub fn new(bytes: Vec<u8>, format: DocumentFormat) -> Self {
        RawDocument { bytes, format }
    }

    /// Build a document from bytes and a file extension. Unknown extensions
    /// are rejected before any parsing happens.
    pub fn with_extension(bytes: Vec<u8>, ext: &str) -> Result<Self, VitaeError> {
        let format = DocumentFormat::from_extension(ext)?;
        Ok(RawDocument { bytes, format })
    }
}

/// Normalized document text.
///
/// Only produced by [`normalize`], so it never contains CRLF line endings,
/// runs of three or more newlines, characters outside the whitelist, or
/// artifact words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct ExtractedText(String);

impl ExtractedText {
    pub(crate) fn new_unchecked(text: String) -> Self {
        ExtractedText(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of characters (not bytes).
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Prefix of at most `max_chars` characters, cut on a char boundary.
    pub fn truncated(&self, max_chars: usize) -> &str {
        match self.0.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

/// Normalizes on conversion, so deserialized values uphold the same
/// invariants as freshly extracted ones.
impl From<String> for ExtractedText {
    fn from(raw: String) -> Self {
        normalize(&raw)
    }
}

impl From<&str> for ExtractedText {
    fn from(raw: &str) -> Self {
        normalize(raw)
    }
}

impl AsRef<str> for ExtractedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExtractedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Contact,
    Summary,
    Education,
    Experience,
    Skills,
    Projects,
    Certifications,
    Other,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Contact,
        Section::Summary,
        Section::Education,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Certifications,
        Section::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Contact => "contact",
            Section::Summary => "summary",
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Certifications => "certifications",
            Section::Other => "other",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Section name -> section content. Every section is always present; a
/// section whose heading was not found holds an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionMap {
    pub contact: String,
    pub summary: String,
    pub education: String,
    pub experience: String,
    pub skills: String,
    pub projects: String,
    pub certifications: String,
    pub other: String,
}

impl SectionMap {
    pub fn get(&self, section: Section) -> &str {
        match section {
            Section::Contact => &self.contact,
            Section::Summary => &self.summary,
            Section::Education => &self.education,
            Section::Experience => &self.experience,
            Section::Skills => &self.skills,
            Section::Projects => &self.projects,
            Section::Certifications => &self.certifications,
            Section::Other => &self.other,
        }
    }

    pub(crate) fn set(&mut self, section: Section, content: String) {
        let slot = match section {
            Section::Contact => &mut self.contact,
            Section::Summary => &mut self.summary,
            Section::Education => &mut self.education,
            Section::Experience => &mut self.experience,
            Section::Skills => &mut self.skills,
            Section::Projects => &mut self.projects,
            Section::Certifications => &mut self.certifications,
            Section::Other => &mut self.other,
        };
        *slot = content;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Section, &str)> {
        Section::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

impl KeywordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        KeywordCount {
            word: word.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Neutral => write!(f, "neutral"),
            SentimentLabel::Negative => write!(f, "negative"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    /// In [-1, 1]; 0 when no lexicon word was found.
    pub score: f64,
    pub label: SentimentLabel,
    pub positive_words: usize,
    pub negative_words: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextComparison {
    /// Jaccard similarity of the two filtered term sets.
    pub similarity: f64,
    pub common_terms: Vec<String>,
    pub unique_to_first: Vec<String>,
    pub unique_to_second: Vec<String>,
}

/// Everything the core derives from one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeReport {
    pub text: ExtractedText,
    pub sections: SectionMap,
    pub skills: Vec<String>,
    pub keywords: Vec<KeywordCount>,
    pub action_verbs: BTreeSet<String>,
    pub experience_years: Option<u32>,
    pub sentiment: SentimentReport,
    pub model_char_budget: usize,
}

impl ResumeReport {
    /// The text handed to the language-model collaborator, cut to the
    /// configured character budget.
    pub fn model_input(&self) -> &str {
        self.text.truncated(self.model_char_budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            DocumentFormat::from_extension("PDF").unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_extension(".docx").unwrap(),
            DocumentFormat::Docx
        );
        assert_eq!(
            DocumentFormat::from_extension("txt").unwrap(),
            DocumentFormat::Text
        );
        assert!(matches!(
            DocumentFormat::from_extension("odt"),
            Err(VitaeError::UnsupportedFormat(ext)) if ext == "odt"
        ));
    }

    #[test]
    fn test_format_from_path_without_extension() {
        assert!(matches!(
            DocumentFormat::from_path(Path::new("resume")),
            Err(VitaeError::UnsupportedFormat(_))
        ));
        assert_eq!(
            DocumentFormat::from_path(Path::new("cv/Jane.Doe.pdf")).unwrap(),
            DocumentFormat::Pdf
        );
    }

    #[test]
    fn test_sniff() {
        assert_eq!(
            DocumentFormat::sniff(b"%PDF-1.7\n..."),
            Some(DocumentFormat::Pdf)
        );
        assert_eq!(
            DocumentFormat::sniff(b"PK\x03\x04rest"),
            Some(DocumentFormat::Docx)
        );
        assert_eq!(DocumentFormat::sniff(b"plain words"), None);
    }

    #[test]
    fn test_truncated_respects_char_boundaries() {
        let text = ExtractedText::from("héllo wörld");
        assert_eq!(text.truncated(2), "hé");
        assert_eq!(text.truncated(100), "héllo wörld");
        assert_eq!(text.truncated(0), "");
    }

    #[test]
    fn test_deserialize_normalizes() {
        let text: ExtractedText = serde_json::from_str(r#""  a\r\nb  ""#).unwrap();
        assert_eq!(text.as_str(), "a\nb");
    }

    #[test]
    fn test_section_map_serializes_all_keys() {
        let value = serde_json::to_value(SectionMap::default()).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 8);
        for section in Section::ALL {
            assert_eq!(obj[section.as_str()], "");
        }
    }
}
