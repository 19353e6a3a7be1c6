use crate::error::VitaeError;

/// Decode a plain-text upload as UTF-8.
pub fn extract_plain(bytes: &[u8]) -> Result<String, VitaeError> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| VitaeError::UnsupportedEncoding(e.to_string()))
}
