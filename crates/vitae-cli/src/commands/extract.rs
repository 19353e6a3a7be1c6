use std::path::PathBuf;
use vitae_core::extraction::pdf::PdfExtractBackend;

use crate::commands::read_document;
use crate::output;

pub fn run(
    input_file: PathBuf,
    format: Option<&str>,
    output_format: &str,
    max_chars: Option<usize>,
) -> Result<(), vitae_core::error::VitaeError> {
    let doc = read_document(&input_file, format)?;
    let backend = PdfExtractBackend::new();
    let text = vitae_core::extract_document(&doc, &backend)?;

    let shown = match max_chars {
        Some(limit) => text.truncated(limit),
        None => text.as_str(),
    };

    match output_format {
        "json" => output::json::print(&serde_json::json!({
            "file": input_file.display().to_string(),
            "format": doc.format,
            "chars": text.char_count(),
            "text": shown,
        }))?,
        _ => println!("{shown}"),
    }

    Ok(())
}
