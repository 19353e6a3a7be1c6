use std::path::Path;
use vitae_core::model::{ResumeReport, TextComparison};

/// Sections are previewed up to this many characters.
const PREVIEW_CHARS: usize = 60;

pub fn print_report(report: &ResumeReport) {
    println!("=== Sections ===\n");
    for (section, content) in report.sections.iter() {
        if content.is_empty() {
            println!("  {:<15} -", section.as_str());
        } else {
            println!("  {:<15} {}", section.as_str(), preview(content));
        }
    }
    println!();

    println!("=== Skills ({}) ===\n", report.skills.len());
    if report.skills.is_empty() {
        println!("  (none found)");
    } else {
        println!("  {}", report.skills.join(", "));
    }
    println!();

    println!("=== Top keywords ===\n");
    if report.keywords.is_empty() {
        println!("  (none)");
    } else {
        let width = report
            .keywords
            .iter()
            .map(|k| k.word.chars().count())
            .max()
            .unwrap_or(10);
        for keyword in &report.keywords {
            println!("  {:<width$}  {}", keyword.word, keyword.count, width = width);
        }
    }
    println!();

    println!("=== Action verbs ({}) ===\n", report.action_verbs.len());
    if report.action_verbs.is_empty() {
        println!("  (none)");
    } else {
        let verbs: Vec<&str> = report.action_verbs.iter().map(String::as_str).collect();
        println!("  {}", verbs.join(", "));
    }
    println!();

    println!("=== Summary ===\n");
    match report.experience_years {
        Some(years) => println!("  Experience:  {} year(s)", years),
        None => println!("  Experience:  not stated"),
    }
    println!(
        "  Tone:        {} ({:+.2}; {} positive, {} negative)",
        report.sentiment.label,
        report.sentiment.score,
        report.sentiment.positive_words,
        report.sentiment.negative_words
    );
    let total = report.text.char_count();
    let sent = report.model_input().chars().count();
    if sent < total {
        println!(
            "  Text:        {} chars ({} within the {}-char model budget)",
            total, sent, report.model_char_budget
        );
    } else {
        println!("  Text:        {} chars", total);
    }
}

pub fn print_comparison(cmp: &TextComparison, first: &Path, second: &Path) {
    println!(
        "Similarity: {:.1}% ({} shared term(s))\n",
        cmp.similarity * 100.0,
        cmp.common_terms.len()
    );

    print_terms("Shared", &cmp.common_terms);
    print_terms(&format!("Only in {}", first.display()), &cmp.unique_to_first);
    print_terms(&format!("Only in {}", second.display()), &cmp.unique_to_second);
}

fn print_terms(title: &str, terms: &[String]) {
    println!("=== {} ({}) ===\n", title, terms.len());
    if terms.is_empty() {
        println!("  (none)");
    } else {
        println!("  {}", terms.join(", "));
    }
    println!();
}

/// First line of `content`, shortened to the preview width.
fn preview(content: &str) -> String {
    let line = content.lines().next().unwrap_or("");
    let mut short: String = line.chars().take(PREVIEW_CHARS).collect();
    if short.chars().count() < content.chars().count() {
        short.push_str(" ...");
    }
    short
}
