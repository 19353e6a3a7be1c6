use regex::Regex;
use std::sync::LazyLock;

/// A word, optionally joined by inner apostrophes, dots or hyphens
/// ("don't", "node.js", "full-stack"), or a run of punctuation.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+(?:['’.\-]\w+)*|[^\w\s]+").unwrap());

/// Lowercase `text` and split it into word and punctuation tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// A token with no letters or digits.
pub fn is_punctuation(token: &str) -> bool {
    !token.chars().any(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_words_and_punctuation() {
        assert_eq!(
            tokenize("Led 5 engineers, shipped Node.js APIs."),
            vec!["led", "5", "engineers", ",", "shipped", "node.js", "apis", "."]
        );
    }

    #[test]
    fn test_tokenize_keeps_joined_words() {
        assert_eq!(
            tokenize("Don't stop full-stack work"),
            vec!["don't", "stop", "full-stack", "work"]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\t ").is_empty());
    }

    #[test]
    fn test_is_punctuation() {
        assert!(is_punctuation("..."));
        assert!(is_punctuation("("));
        assert!(!is_punctuation("c++"));
        assert!(!is_punctuation("2024"));
    }
}
