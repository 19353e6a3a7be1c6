use std::path::Path;
use vitae_core::lexicon::{builtin, Lexicon};

use crate::commands::resolve_lexicon;

pub fn list() -> Result<(), vitae_core::error::VitaeError> {
    let lex = Lexicon::builtin();
    let def = lex.definition();

    println!("Built-in lexicon:\n");
    println!("  {} (v{})", def.name, def.version);
    if let Some(ref desc) = def.description {
        println!("  {}", desc);
    }
    println!();
    println!("  Skill categories: {}", def.skill_categories.len());
    println!("  Catalog skills:   {}", lex.catalog().len());
    println!("  Stopwords:        {}", def.stopwords.len());
    println!("  Action verbs:     {}", def.action_verbs.len());
    println!(
        "  Sentiment words:  {} positive, {} negative",
        def.positive_words.len(),
        def.negative_words.len()
    );
    println!();
    println!("Run `vitae lexicon show --json > my-lexicon.json` for a starting point");
    println!("for a custom lexicon.");
    Ok(())
}

pub fn show(file: Option<&Path>, json: bool) -> Result<(), vitae_core::error::VitaeError> {
    if json && file.is_none() {
        print!("{}", builtin::default_json());
        return Ok(());
    }

    let lex = resolve_lexicon(file)?;
    let def = lex.definition();

    if json {
        println!("{}", serde_json::to_string_pretty(def)?);
        return Ok(());
    }

    println!("{} (version {})\n", def.name, def.version);

    let width = def
        .skill_categories
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(10);

    for category in &def.skill_categories {
        println!(
            "  {:<width$}  {}",
            category.name,
            category.skills.join(", "),
            width = width
        );
    }
    println!();
    println!("Action verbs: {}", def.action_verbs.join(", "));

    Ok(())
}

pub fn validate(file: &Path) -> Result<(), vitae_core::error::VitaeError> {
    let lex = vitae_core::lexicon::load_lexicon(file)?;
    let def = lex.definition();

    println!("Lexicon '{}' (v{}) is valid.", def.name, def.version);
    println!("  Categories: {}", def.skill_categories.len());
    println!("  Skills: {}", lex.catalog().len());

    // Warnings, not errors
    let mut warnings = Vec::new();
    let mut seen = std::collections::HashMap::new();
    for entry in lex.catalog() {
        if let Some(first) = seen.insert(entry.skill.as_str(), entry.category.as_str()) {
            warnings.push(format!(
                "skill '{}' is listed in both '{}' and '{}'",
                entry.skill, first, entry.category
            ));
        }
    }
    if def.stopwords.is_empty() {
        warnings.push("no stopwords: keyword ranking will include filler words".to_string());
    }
    if def.positive_words.is_empty() && def.negative_words.is_empty() {
        warnings.push("no sentiment words: every document scores neutral".to_string());
    }
    for verb in &def.action_verbs {
        if lex.is_stopword(&verb.to_lowercase()) {
            warnings.push(format!("action verb '{}' is also a stopword", verb));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
