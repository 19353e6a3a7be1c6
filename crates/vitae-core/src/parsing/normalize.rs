use regex::Regex;
use std::sync::LazyLock;

use crate::model::ExtractedText;

static CRLF_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r+\n").unwrap());
static INLINE_WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());
static BLANK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());
static DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[^\w\s.,;:()\-'"/]"#).unwrap());
static ARTIFACT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:page|phone|email|https?://\S+)\b").unwrap());

/// Clean raw extracted text into the canonical form every later stage reads.
///
/// Steps:
/// 1. CRLF -> LF
/// 2. Collapse runs of spaces/tabs to one space
/// 3. Collapse 3+ newlines to a paragraph break
/// 4. Drop characters outside the whitelist (word chars, whitespace, `.,;:()-'"/`)
/// 5. Remove the artifact words `page`, `phone`, `email` and http(s) URLs
/// 6. Re-settle whitespace disturbed by steps 4 and 5, then trim
///
/// Empty input gives empty output. `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(raw: &str) -> ExtractedText {
    if raw.trim().is_empty() {
        return ExtractedText::default();
    }

    let text = settle_whitespace(raw);
    let text = DISALLOWED_RE.replace_all(&text, "");
    let text = remove_artifacts(&text);
    let text = settle_whitespace(&text);

    ExtractedText::new_unchecked(text.trim().to_string())
}

fn settle_whitespace(text: &str) -> String {
    let text = CRLF_RE.replace_all(text, "\n");
    let text = INLINE_WS_RE.replace_all(&text, " ");
    BLANK_RUN_RE.replace_all(&text, "\n\n").into_owned()
}

/// Removing one artifact can splice its neighbours into a new one
/// (`http:/page/x` -> `http://x`), so repeat until nothing matches.
fn remove_artifacts(text: &str) -> String {
    let mut current = text.to_string();
    while ARTIFACT_RE.is_match(&current) {
        current = ARTIFACT_RE.replace_all(&current, "").into_owned();
    }
    current
}
