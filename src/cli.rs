//! Command-line interface for the splitter.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::error::{Result, SplitterError};
use crate::input::load_document;
use crate::observer::TracingObserver;
use crate::output::{generate_json, generate_yaml, save_records, OutputFormat};
use crate::splitting::SplitEngine;

/// Mathdoc Splitter - Split converted mathematical documents into statement and proof blocks.
#[derive(Parser)]
#[command(name = "mathdoc-splitter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a converted document into statement records.
    Split {
        /// Path to the converted document (markdown text)
        input: PathBuf,

        /// Output format: json or yaml (default: json)
        #[arg(short, long)]
        format: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            input,
            format,
            output,
        } => split_command(&input, format.as_deref(), output.as_deref()),
    }
}

/// Execute the split command.
fn split_command(input: &Path, format: Option<&str>, output: Option<&Path>) -> Result<()> {
    // Validate the format name before touching the input file
    let format = match format {
        Some(name) => OutputFormat::from_name(name)
            .ok_or_else(|| SplitterError::InvalidFormat(name.to_string()))?,
        None => OutputFormat::Json,
    };

    let text = load_document(input)?;

    let engine = SplitEngine::new().with_observer(Box::new(TracingObserver));
    let records = engine.split(&text);

    match output {
        Some(path) => {
            let saved = save_records(&records, format, path)?;

            println!(
                "{} {}",
                style("Split").bold(),
                style(input.display()).cyan()
            );
            println!("  Statements: {}", records.len());
            println!(
                "  With proof: {}",
                records.iter().filter(|r| r.has_proof()).count()
            );
            println!();
            println!("{} {}", style("Saved to:").green().bold(), saved.display());
        }
        None => {
            let content = match format {
                OutputFormat::Json => generate_json(&records)?,
                OutputFormat::Yaml => generate_yaml(&records)?,
            };
            print!("{content}");
        }
    }

    Ok(())
}
