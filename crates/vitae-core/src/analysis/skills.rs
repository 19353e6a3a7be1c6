use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use crate::lexicon::Lexicon;
use crate::model::SectionMap;
use crate::parsing::segment;

/// Two capitalized words joined by spaces, slashes or hyphens
/// ("Machine Learning", "Front-End").
static COMPOUND_TERM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][a-z]*[ /-]+[A-Z][a-z]*\b").unwrap());

static ACRONYM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[A-Z]{2,}\b").unwrap());

/// Pattern matches shorter than this are dropped, so two-letter acronyms
/// like "QA" never show up as skills on their own.
const MIN_PATTERN_MATCH_LEN: usize = 3;

/// Extract skills from a document.
///
/// Catalog skills are searched in the skills section when the document has
/// one, otherwise in the whole text, and are reported in title case.
/// Capitalized compound terms and acronyms are always searched in the whole
/// original-case text and reported lowercase. Skills that literally occur in
/// the scanned text sort first; each group is alphabetical.
pub fn extract_skills(text: &str, lexicon: &Lexicon) -> Vec<String> {
    let sections = segment(text);
    extract_skills_with_sections(text, &sections, lexicon)
}

/// Same as [`extract_skills`] for callers that already segmented `text`.
pub fn extract_skills_with_sections(
    text: &str,
    sections: &SectionMap,
    lexicon: &Lexicon,
) -> Vec<String> {
    let scanned = if sections.skills.is_empty() {
        text.to_lowercase()
    } else {
        sections.skills.to_lowercase()
    };

    let mut found = BTreeSet::new();

    for entry in lexicon.catalog() {
        if entry.is_match(&scanned) {
            found.insert(title_case(&entry.skill));
        }
    }

    for pattern in [&*COMPOUND_TERM_RE, &*ACRONYM_RE] {
        for m in pattern.find_iter(text) {
            if m.as_str().len() >= MIN_PATTERN_MATCH_LEN {
                found.insert(m.as_str().to_lowercase());
            }
        }
    }

    // BTreeSet iteration is alphabetical and the sort is stable, so this
    // only moves literal occurrences ahead of the rest.
    let mut skills: Vec<String> = found.into_iter().collect();
    skills.sort_by_key(|skill| !scanned.contains(skill.as_str()));
    skills
}

/// Uppercase the first letter of every word, lowercase the rest. A word
/// starts after any non-letter, so "node.js" becomes "Node.Js".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if prev_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_is_letter = c.is_alphabetic();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn skills(text: &str) -> Vec<String> {
        extract_skills(text, Lexicon::builtin())
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("python"), "Python");
        assert_eq!(title_case("node.js"), "Node.Js");
        assert_eq!(title_case("ci/cd"), "Ci/Cd");
        assert_eq!(title_case("power bi"), "Power Bi");
        assert_eq!(title_case("c++"), "C++");
    }

    #[test]
    fn test_skills_section_catalog_and_acronyms() {
        assert_eq!(
            skills("Skills: Python, AWS, Leadership"),
            vec!["aws", "Aws", "Leadership", "Python"]
        );
    }

    #[test]
    fn test_falls_back_to_full_text() {
        let text = "Built microservices in Rust and Go on AWS. Machine Learning pipelines.";
        assert_eq!(
            skills(text),
            vec![
                "aws",
                "machine learning",
                "Aws",
                "Go",
                "Microservices",
                "Rust"
            ]
        );
    }

    #[test]
    fn test_catalog_only_scans_skills_section_when_present() {
        let text = "Summary\nTen years of Java.\n\nSkills\nDocker, Kubernetes";
        let found = skills(text);
        assert!(found.contains(&"Docker".to_string()));
        assert!(found.contains(&"Kubernetes".to_string()));
        assert!(!found.contains(&"Java".to_string()));
    }

    #[test]
    fn test_multi_word_catalog_skills() {
        let found = skills("Skills\nProblem solving, critical thinking and Power BI");
        assert!(found.contains(&"Problem Solving".to_string()));
        assert!(found.contains(&"Critical Thinking".to_string()));
        assert!(found.contains(&"Power Bi".to_string()));
    }

    #[test]
    fn test_short_pattern_matches_discarded() {
        let found = skills("QA and UX reviews");
        assert!(found.is_empty(), "{found:?}");
    }

    #[test]
    fn test_no_duplicates() {
        let text = "Skills\nAWS, aws, Docker, DOCKER, Machine Learning, Machine Learning\n\nAWS again";
        let found = skills(text);
        let unique: HashSet<&String> = found.iter().collect();
        assert_eq!(unique.len(), found.len());
    }

    #[test]
    fn test_empty_input() {
        assert!(skills("").is_empty());
    }
}
