mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "vitae",
    version,
    about = "Resume text analysis: sections, skills, keywords and action verbs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the normalized text of a resume (PDF, DOCX or TXT)
    Extract {
        /// Path to the document
        input_file: PathBuf,

        /// Document format: pdf, docx or txt (default: from extension, then file contents)
        #[arg(short, long)]
        format: Option<String>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Cut the text to this many characters
        #[arg(long, value_name = "N")]
        max_chars: Option<usize>,
    },
    /// Analyze a resume: sections, skills, keywords, action verbs
    Analyze {
        /// Path to the document
        input_file: PathBuf,

        /// Custom JSON lexicon file (default: built-in English lexicon)
        #[arg(short, long, value_name = "FILE")]
        lexicon: Option<PathBuf>,

        /// Number of top keywords to report
        #[arg(short, long, default_value_t = 10)]
        top: usize,

        /// Document format: pdf, docx or txt (default: from extension, then file contents)
        #[arg(short, long)]
        format: Option<String>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Character budget for text handed to a language model
        #[arg(long, value_name = "N", default_value_t = vitae_core::DEFAULT_MODEL_CHAR_BUDGET)]
        max_chars: usize,
    },
    /// Compare the vocabulary of two documents (e.g. two job descriptions)
    Compare {
        /// First document
        first: PathBuf,

        /// Second document
        second: PathBuf,

        /// Custom JSON lexicon file (default: built-in English lexicon)
        #[arg(short, long, value_name = "FILE")]
        lexicon: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Inspect and validate lexicons
    Lexicon {
        #[command(subcommand)]
        action: LexiconAction,
    },
}

#[derive(Subcommand)]
enum LexiconAction {
    /// Summarize the built-in lexicon
    List,
    /// Print the skill catalog of a lexicon
    Show {
        /// Lexicon file (default: built-in)
        file: Option<PathBuf>,

        /// Print the raw JSON definition instead
        #[arg(long)]
        json: bool,
    },
    /// Validate a custom lexicon file
    Validate {
        /// Path to JSON lexicon file
        file: PathBuf,
    },
}

fn main() {
    // Logs go to stderr so table/JSON output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            format,
            output,
            max_chars,
        } => commands::extract::run(input_file, format.as_deref(), &output, max_chars),
        Commands::Analyze {
            input_file,
            lexicon,
            top,
            format,
            output,
            max_chars,
        } => commands::analyze::run(
            input_file,
            lexicon,
            format.as_deref(),
            &output,
            vitae_core::AnalyzeOptions {
                top_keywords: top,
                model_char_budget: max_chars,
            },
        ),
        Commands::Compare {
            first,
            second,
            lexicon,
            output,
        } => commands::compare::run(first, second, lexicon, &output),
        Commands::Lexicon { action } => match action {
            LexiconAction::List => commands::lexicon::list(),
            LexiconAction::Show { file, json } => commands::lexicon::show(file.as_deref(), json),
            LexiconAction::Validate { file } => commands::lexicon::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
