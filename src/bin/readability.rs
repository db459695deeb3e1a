//! Command-line summarizer.
//!
//! Reads an HTML file (or stdin with `-`) and prints the article markup, or
//! a JSON object with the summary and byline when `--json` is given.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rs_readability::{Document, Options, Summary};
use serde::Serialize;
use tracing::debug;

#[derive(Parser)]
#[command(name = "readability")]
#[command(about = "Extract the main article of an HTML page")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// HTML file to read, or `-` for stdin
    path: PathBuf,

    /// Source URL, used to make links absolute
    #[arg(short, long)]
    url: Option<String>,

    /// Print a bare <div> fragment instead of a full document
    #[arg(long)]
    partial: bool,

    /// Keep every image of the article
    #[arg(long)]
    keep_all_images: bool,

    /// Minimum paragraph length for scoring
    #[arg(long, default_value_t = 25)]
    min_text_length: usize,

    /// Minimum article length before a lenient retry
    #[arg(long, default_value_t = 250)]
    retry_length: usize,

    /// Print the summary, title, short title and author as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug output, including per-node scoring decisions
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct JsonOutput {
    #[serde(flatten)]
    summary: Summary,
    author: String,
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut bytes = Vec::new();
        io::stdin()
            .read_to_end(&mut bytes)
            .context("failed to read stdin")?;
        Ok(bytes)
    } else {
        fs::read(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let bytes = read_input(&cli.path)?;
    debug!(bytes = bytes.len(), path = %cli.path.display(), "input read");

    let options = Options {
        url: cli.url,
        min_text_length: cli.min_text_length,
        retry_length: cli.retry_length,
        html_partial: cli.partial,
        keep_all_images: cli.keep_all_images,
        debug: cli.verbose,
    };
    let doc = Document::from_bytes(&bytes, options)?;

    if cli.json {
        let output = JsonOutput {
            summary: doc.summary_with_metadata()?,
            author: doc.author(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", doc.summary()?);
    }
    Ok(())
}
