use std::path::PathBuf;
use vitae_core::analysis::compare_texts;
use vitae_core::extraction::pdf::PdfExtractBackend;

use crate::commands::{read_document, resolve_lexicon};
use crate::output;

pub fn run(
    first: PathBuf,
    second: PathBuf,
    lexicon_file: Option<PathBuf>,
    output_format: &str,
) -> Result<(), vitae_core::error::VitaeError> {
    let lexicon = resolve_lexicon(lexicon_file.as_deref())?;
    let backend = PdfExtractBackend::new();

    let first_text = vitae_core::extract_document(&read_document(&first, None)?, &backend)?;
    let second_text = vitae_core::extract_document(&read_document(&second, None)?, &backend)?;

    let comparison = compare_texts(first_text.as_str(), second_text.as_str(), &lexicon);

    match output_format {
        "json" => output::json::print(&comparison)?,
        _ => output::table::print_comparison(&comparison, &first, &second),
    }

    Ok(())
}
