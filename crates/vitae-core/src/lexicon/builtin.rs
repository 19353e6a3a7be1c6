use std::sync::LazyLock;

use super::schema::LexiconDef;
use super::Lexicon;

const DEFAULT_LEXICON_JSON: &str = include_str!("../../../../lexicons/default.json");

static BUILTIN: LazyLock<Lexicon> = LazyLock::new(|| {
    let def: LexiconDef =
        serde_json::from_str(DEFAULT_LEXICON_JSON).expect("embedded default.json is valid");
    Lexicon::from_def(def).expect("embedded default.json passes validation")
});

/// The built-in lexicon, compiled once per process.
pub fn builtin() -> &'static Lexicon {
    &BUILTIN
}

/// The embedded lexicon definition as JSON, e.g. as a starting point for a
/// custom lexicon file.
pub fn default_json() -> &'static str {
    DEFAULT_LEXICON_JSON
}
