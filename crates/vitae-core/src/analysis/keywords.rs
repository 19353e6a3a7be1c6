use std::collections::{BTreeSet, HashMap};

use crate::lexicon::Lexicon;
use crate::model::{KeywordCount, TextComparison};
use crate::parsing::tokenize::{is_punctuation, tokenize};

/// Shorter tokens carry no keyword signal.
const MIN_KEYWORD_CHARS: usize = 3;

/// Lowercased tokens that survive keyword filtering: no stopwords, no pure
/// punctuation, nothing shorter than three characters.
pub fn content_terms(text: &str, lexicon: &Lexicon) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| {
            !lexicon.is_stopword(t)
                && !is_punctuation(t)
                && t.chars().count() >= MIN_KEYWORD_CHARS
        })
        .collect()
}

/// The `n` most frequent content terms, most frequent first. Equal counts
/// keep the order in which the terms first appear.
pub fn top_keywords(text: &str, n: usize, lexicon: &Lexicon) -> Vec<KeywordCount> {
    // term -> (count, first occurrence)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (position, term) in content_terms(text, lexicon).into_iter().enumerate() {
        counts.entry(term).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first))| (word, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(n);

    ranked
        .into_iter()
        .map(|(word, count, _)| KeywordCount { word, count })
        .collect()
}

/// Distinct action verbs used anywhere in `text`.
pub fn action_verbs(text: &str, lexicon: &Lexicon) -> BTreeSet<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| lexicon.is_action_verb(t))
        .collect()
}

/// Compare the content terms of two texts (e.g. two job descriptions).
pub fn compare_texts(first: &str, second: &str, lexicon: &Lexicon) -> TextComparison {
    let first: BTreeSet<String> = content_terms(first, lexicon).into_iter().collect();
    let second: BTreeSet<String> = content_terms(second, lexicon).into_iter().collect();

    let common: Vec<String> = first.intersection(&second).cloned().collect();
    let union = first.union(&second).count();
    let similarity = if union == 0 {
        0.0
    } else {
        common.len() as f64 / union as f64
    };

    TextComparison {
        similarity,
        common_terms: common,
        unique_to_first: first.difference(&second).cloned().collect(),
        unique_to_second: second.difference(&first).cloned().collect(),
    }
}
