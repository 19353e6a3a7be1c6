use regex::Regex;
use std::sync::LazyLock;

use crate::model::SectionMap;

static YEARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*years?").unwrap());

/// Longest "N years" duration mentioned in the experience section.
pub fn experience_years(sections: &SectionMap) -> Option<u32> {
    YEARS_RE
        .captures_iter(&sections.experience)
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .max()
}
