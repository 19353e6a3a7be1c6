use regex::Regex;
use std::sync::LazyLock;

use crate::model::{Section, SectionMap};

/// Heading patterns, one per named section, in matching order.
static HEADINGS: LazyLock<Vec<(Section, Regex)>> = LazyLock::new(|| {
    [
        (Section::Contact, r"contact\s*information|personal\s*details"),
        (Section::Summary, r"summary|profile|objective"),
        (
            Section::Education,
            r"education|academic\s*background|qualifications",
        ),
        (Section::Experience, r"experience|work\s*history|employment"),
        (Section::Skills, r"skills|technical\s*skills|competencies"),
        (Section::Projects, r"projects|key\s*projects"),
        (Section::Certifications, r"certifications|licenses"),
    ]
    .into_iter()
    .map(|(section, pattern)| {
        let re = Regex::new(&format!("(?i){pattern}")).unwrap();
        (section, re)
    })
    .collect()
});

/// A blank line (two newlines with only whitespace between) ends a section.
static BLANK_LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Leading bullets, dashes, numbering and whitespace on each line.
static LIST_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[\s•\-*\d.]+\s*").unwrap());

/// A section match: the whole span (heading + body) and the body alone.
struct SectionSpan<'a> {
    span: &'a str,
    body: &'a str,
}

/// Split normalized text into the named resume sections.
///
/// Every heading is searched once across the full text, independently of
/// the others, so one passage can land in several sections when heading
/// keywords overlap (a skills line mentioning "profile" also feeds the
/// summary).
/// A section body runs from just after its heading to the next blank line
/// or the end of the text. Whatever is left after removing all matched
/// spans becomes `other`.
pub fn segment(text: &str) -> SectionMap {
    let mut sections = SectionMap::default();
    let mut remainder = text.to_string();

    for (section, heading) in HEADINGS.iter() {
        let Some(found) = find_section(text, heading) else {
            continue;
        };
        sections.set(*section, strip_list_markers(found.body.trim()));
        remainder = remainder.replace(found.span, "");
    }

    sections.set(Section::Other, remainder);
    sections
}

fn find_section<'a>(text: &'a str, heading: &Regex) -> Option<SectionSpan<'a>> {
    let m = heading.find(text)?;
    let end = section_end(text, m.end());
    Some(SectionSpan {
        span: &text[m.start()..end],
        body: &text[m.end()..end],
    })
}

/// First position at or after `from` where a blank line starts, else the end
/// of the text (ignoring one trailing newline).
fn section_end(text: &str, from: usize) -> usize {
    if let Some(blank) = BLANK_LINE_RE.find_at(text, from) {
        return blank.start();
    }
    if text.ends_with('\n') && from < text.len() {
        text.len() - 1
    } else {
        text.len()
    }
}

fn strip_list_markers(body: &str) -> String {
    LIST_MARKER_RE.replace_all(body, "").trim().to_string()
}
