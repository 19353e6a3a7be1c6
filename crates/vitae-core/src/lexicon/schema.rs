use serde::{Deserialize, Serialize};

/// A lexicon file: the skill catalog plus the word lists the lexical
/// analyzer matches against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Ordered categories of canonical, lowercase skill keywords.
    pub skill_categories: Vec<SkillCategoryDef>,
    /// Words excluded from keyword frequency analysis.
    #[serde(default)]
    pub stopwords: Vec<String>,
    pub action_verbs: Vec<String>,
    #[serde(default)]
    pub positive_words: Vec<String>,
    #[serde(default)]
    pub negative_words: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategoryDef {
    pub name: String,
    pub skills: Vec<String>,
}
