pub mod builtin;
pub mod schema;

use regex::Regex;
use std::collections::HashSet;
use std::path::Path;

use crate::error::VitaeError;
use schema::LexiconDef;

/// Load and compile a lexicon from a JSON file.
pub fn load_lexicon(path: &Path) -> Result<Lexicon, VitaeError> {
    let content = std::fs::read_to_string(path).map_err(|e| VitaeError::LexiconLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let def: LexiconDef = serde_json::from_str(&content).map_err(|e| VitaeError::LexiconLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Lexicon::from_def(def)
}

/// Parse a lexicon definition from a JSON string (no file path context).
pub fn parse_lexicon_str(json: &str) -> Result<LexiconDef, VitaeError> {
    let def: LexiconDef = serde_json::from_str(json)?;
    validate_lexicon(&def)?;
    Ok(def)
}

/// Validate that a lexicon definition is well-formed.
pub fn validate_lexicon(def: &LexiconDef) -> Result<(), VitaeError> {
    if def.name.trim().is_empty() {
        return Err(VitaeError::LexiconInvalid("name must not be empty".into()));
    }

    if def.skill_categories.is_empty() {
        return Err(VitaeError::LexiconInvalid(
            "skill_categories must not be empty".into(),
        ));
    }

    let mut seen_categories = HashSet::new();
    for category in &def.skill_categories {
        if category.name.trim().is_empty() {
            return Err(VitaeError::LexiconInvalid(
                "category name must not be empty".into(),
            ));
        }
        if !seen_categories.insert(category.name.as_str()) {
            return Err(VitaeError::LexiconInvalid(format!(
                "duplicate category '{}'",
                category.name
            )));
        }
        if category.skills.is_empty() {
            return Err(VitaeError::LexiconInvalid(format!(
                "category '{}' has no skills",
                category.name
            )));
        }
        for skill in &category.skills {
            if skill.trim().is_empty() {
                return Err(VitaeError::LexiconInvalid(format!(
                    "category '{}' contains a blank skill",
                    category.name
                )));
            }
            // Catalog entries are matched against lowercased text.
            if *skill != skill.to_lowercase() {
                return Err(VitaeError::LexiconInvalid(format!(
                    "skill '{}' in category '{}' must be lowercase",
                    skill, category.name
                )));
            }
        }
    }

    if def.action_verbs.is_empty() {
        return Err(VitaeError::LexiconInvalid(
            "action_verbs must not be empty".into(),
        ));
    }

    Ok(())
}

/// One catalog skill with its precompiled whole-word pattern.
#[derive(Debug, Clone)]
pub struct CatalogSkill {
    pub category: String,
    pub skill: String,
    pattern: Regex,
}

impl CatalogSkill {
    /// Whole-word match against already-lowercased text.
    pub fn is_match(&self, lowered: &str) -> bool {
        self.pattern.is_match(lowered)
    }
}

/// A validated, compiled lexicon. Immutable once built; share it by
/// reference across analyses and threads.
#[derive(Debug, Clone)]
pub struct Lexicon {
    def: LexiconDef,
    catalog: Vec<CatalogSkill>,
    stopwords: HashSet<String>,
    action_verbs: HashSet<String>,
    positive_words: HashSet<String>,
    negative_words: HashSet<String>,
}

impl Lexicon {
    pub fn from_def(def: LexiconDef) -> Result<Lexicon, VitaeError> {
        validate_lexicon(&def)?;

        let mut catalog = Vec::new();
        for category in &def.skill_categories {
            for skill in &category.skills {
                let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(skill)))
                    .map_err(|e| VitaeError::LexiconInvalid(format!("skill '{skill}': {e}")))?;
                catalog.push(CatalogSkill {
                    category: category.name.clone(),
                    skill: skill.clone(),
                    pattern,
                });
            }
        }

        Ok(Lexicon {
            stopwords: lowered_set(&def.stopwords),
            action_verbs: lowered_set(&def.action_verbs),
            positive_words: lowered_set(&def.positive_words),
            negative_words: lowered_set(&def.negative_words),
            catalog,
            def,
        })
    }

    /// The process-wide built-in lexicon.
    pub fn builtin() -> &'static Lexicon {
        builtin::builtin()
    }

    pub fn name(&self) -> &str {
        &self.def.name
    }

    pub fn version(&self) -> &str {
        &self.def.version
    }

    pub fn definition(&self) -> &LexiconDef {
        &self.def
    }

    pub fn catalog(&self) -> &[CatalogSkill] {
        &self.catalog
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    pub fn is_action_verb(&self, token: &str) -> bool {
        self.action_verbs.contains(token)
    }

    pub fn is_positive(&self, token: &str) -> bool {
        self.positive_words.contains(token)
    }

    pub fn is_negative(&self, token: &str) -> bool {
        self.negative_words.contains(token)
    }
}

fn lowered_set(words: &[String]) -> HashSet<String> {
    words.iter().map(|w| w.trim().to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r#"{
        "name": "Test",
        "version": "1.0",
        "skill_categories": [
            { "name": "Lang", "skills": ["rust", "c++"] }
        ],
        "stopwords": ["the"],
        "action_verbs": ["Built"]
    }"#;

    #[test]
    fn test_parse_valid_lexicon() {
        let def = parse_lexicon_str(MINIMAL).unwrap();
        assert_eq!(def.name, "Test");
        assert_eq!(def.skill_categories[0].skills, vec!["rust", "c++"]);
        assert!(def.positive_words.is_empty());
    }

    #[test]
    fn test_compiled_lookups_are_lowercased() {
        let lex = Lexicon::from_def(parse_lexicon_str(MINIMAL).unwrap()).unwrap();
        assert!(lex.is_action_verb("built"));
        assert!(lex.is_stopword("the"));
        assert_eq!(lex.catalog().len(), 2);
        assert_eq!(lex.catalog()[1].category, "Lang");
    }

    #[test]
    fn test_catalog_pattern_is_whole_word() {
        let lex = Lexicon::from_def(parse_lexicon_str(MINIMAL).unwrap()).unwrap();
        let rust = &lex.catalog()[0];
        assert!(rust.is_match("rust, go"));
        assert!(!rust.is_match("trusted"));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let json = r#"{ "name": "Bad", "version": "1", "skill_categories": [], "action_verbs": ["led"] }"#;
        assert!(matches!(
            parse_lexicon_str(json),
            Err(VitaeError::LexiconInvalid(_))
        ));
    }

    #[test]
    fn test_uppercase_skill_rejected() {
        let json = r#"{
            "name": "Bad", "version": "1",
            "skill_categories": [{ "name": "Cloud", "skills": ["AWS"] }],
            "action_verbs": ["led"]
        }"#;
        let err = parse_lexicon_str(json).unwrap_err();
        assert!(err.to_string().contains("must be lowercase"));
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let json = r#"{
            "name": "Bad", "version": "1",
            "skill_categories": [
                { "name": "Cloud", "skills": ["aws"] },
                { "name": "Cloud", "skills": ["gcp"] }
            ],
            "action_verbs": ["led"]
        }"#;
        assert!(parse_lexicon_str(json).is_err());
    }

    #[test]
    fn test_missing_action_verbs_rejected() {
        let json = r#"{
            "name": "Bad", "version": "1",
            "skill_categories": [{ "name": "Cloud", "skills": ["aws"] }],
            "action_verbs": []
        }"#;
        assert!(parse_lexicon_str(json).is_err());
    }

    #[test]
    fn test_load_lexicon_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();
        let lex = load_lexicon(file.path()).unwrap();
        assert_eq!(lex.name(), "Test");
        assert_eq!(lex.version(), "1.0");
    }

    #[test]
    fn test_load_lexicon_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        match load_lexicon(file.path()) {
            Err(VitaeError::LexiconLoad { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("expected LexiconLoad, got {other:?}"),
        }
    }
}
