use crate::lexicon::Lexicon;
use crate::model::{SentimentLabel, SentimentReport};
use crate::parsing::tokenize;

/// Scores beyond this distance from zero get a non-neutral label.
const LABEL_THRESHOLD: f64 = 0.1;

/// Lexicon-based tone of `text`: the balance of positive and negative words.
pub fn sentiment(text: &str, lexicon: &Lexicon) -> SentimentReport {
    let tokens = tokenize(text);
    let positive_words = tokens.iter().filter(|t| lexicon.is_positive(t)).count();
    let negative_words = tokens.iter().filter(|t| lexicon.is_negative(t)).count();

    let total = positive_words + negative_words;
    let score = if total == 0 {
        0.0
    } else {
        (positive_words as f64 - negative_words as f64) / total as f64
    };

    let label = if score > LABEL_THRESHOLD {
        SentimentLabel::Positive
    } else if score < -LABEL_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    };

    SentimentReport {
        score,
        label,
        positive_words,
        negative_words,
    }
}
