use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum VitaeError {
    #[error("unsupported file format '{0}'. Supported formats: pdf, docx, txt")]
    UnsupportedFormat(String),

    #[error("invalid or corrupted {format} file: {reason}")]
    CorruptDocument { format: String, reason: String },

    #[error("PDF appears to be image-based or contains no extractable text. Please upload a text-based PDF, DOCX or TXT file")]
    EmptyOrImageOnlyDocument,

    #[error("text file is not valid UTF-8: {0}")]
    UnsupportedEncoding(String),

    #[error("failed to load lexicon from {path}: {reason}")]
    LexiconLoad { path: PathBuf, reason: String },

    #[error("invalid lexicon: {0}")]
    LexiconInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl VitaeError {
    pub(crate) fn corrupt(format: &str, reason: impl ToString) -> Self {
        VitaeError::CorruptDocument {
            format: format.to_string(),
            reason: reason.to_string(),
        }
    }
}
