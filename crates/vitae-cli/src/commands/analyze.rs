use std::path::PathBuf;
use vitae_core::extraction::pdf::PdfExtractBackend;
use vitae_core::AnalyzeOptions;

use crate::commands::{read_document, resolve_lexicon};
use crate::output;

pub fn run(
    input_file: PathBuf,
    lexicon_file: Option<PathBuf>,
    format: Option<&str>,
    output_format: &str,
    options: AnalyzeOptions,
) -> Result<(), vitae_core::error::VitaeError> {
    let lexicon = resolve_lexicon(lexicon_file.as_deref())?;
    let doc = read_document(&input_file, format)?;

    let backend = PdfExtractBackend::new();
    let report = vitae_core::analyze_document(&doc, &backend, &lexicon, &options)?;

    match output_format {
        "json" => output::json::print(&report)?,
        _ => output::table::print_report(&report),
    }

    Ok(())
}
