//! pdfsift CLI - heuristic PDF text extraction tool

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use pdfsift::{ExtractOptions, PdfExtractor};

#[derive(Parser)]
#[command(name = "pdfsift")]
#[command(version)]
#[command(about = "Extract plain text from PDF files without an external parser", long_about = None)]
struct Cli {
    /// Input PDF file (shorthand for the `text` subcommand)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Log per-stage diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract plain text
    Text {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show document metadata
    #[command(alias = "meta")]
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the page count
    Count {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let result = match cli.command {
        Some(Commands::Text { input }) => cmd_text(&input, cli.verbose),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Count { input }) => cmd_count(&input),
        None => match cli.input {
            Some(input) => cmd_text(&input, cli.verbose),
            None => {
                eprintln!("{}: no input file given; try --help", "error".red().bold());
                return ExitCode::FAILURE;
            }
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {}", "error".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn cmd_text(input: &PathBuf, verbose: bool) -> pdfsift::Result<()> {
    let options = ExtractOptions::new().with_verbose(verbose);
    let extractor = PdfExtractor::open_with_options(input, options)?;
    let text = extractor.extract()?;
    println!("{}", text);
    Ok(())
}

fn cmd_info(input: &PathBuf, json: bool) -> pdfsift::Result<()> {
    let metadata = pdfsift::get_metadata(input);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&metadata).expect("metadata serializes")
        );
        return Ok(());
    }

    if metadata.is_empty() {
        println!("{}", "no metadata found".yellow());
        return Ok(());
    }

    for (key, value) in metadata.to_map() {
        println!("{}: {}", key.cyan().bold(), value);
    }
    Ok(())
}

fn cmd_count(input: &PathBuf) -> pdfsift::Result<()> {
    println!("{}", pdfsift::get_page_count(input));
    Ok(())
}
