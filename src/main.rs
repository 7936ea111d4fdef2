//! PageLens main entry point
//!
//! Command-line interface for the single-page extraction engine: fetch one
//! URL and print either its classified links or its cleaned text as JSON.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use pagelens::config::{config_from_env, load_config};
use pagelens::extract::LinkType;
use pagelens::Engine;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// PageLens: single-page link and text extraction
///
/// Fetches exactly one webpage and prints a structured envelope with
/// either every classified hyperlink or the cleaned text and metadata.
/// PageLens never crawls; each invocation processes one document.
#[derive(Parser, Debug)]
#[command(name = "pagelens")]
#[command(version = "1.0.0")]
#[command(about = "Single-page link and text extraction", long_about = None)]
struct Cli {
    /// URL to fetch (scheme optional; https:// is assumed)
    #[arg(value_name = "URL")]
    url: String,

    /// What to extract from the page
    #[arg(short, long, value_enum, default_value_t = Mode::Links)]
    mode: Mode,

    /// Keep only links of this type (links mode only)
    #[arg(long, value_name = "TYPE", conflicts_with = "external")]
    link_type: Option<String>,

    /// Keep only links pointing to other hosts (links mode only)
    #[arg(long)]
    external: bool,

    /// Maximum sentences in the summary (summary mode only)
    #[arg(long, default_value_t = 3)]
    max_sentences: usize,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Classified hyperlink list
    Links,
    /// Cleaned text with metadata
    Text,
    /// Cleaned text plus sentence summary
    Summary,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Mode::Links => "links",
            Mode::Text => "text",
            Mode::Summary => "summary",
        };
        f.write_str(name)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => config_from_env().context("reading configuration from environment")?,
    };

    let engine = Engine::new(config)?;

    let output = match cli.mode {
        Mode::Links => {
            if let Some(type_name) = &cli.link_type {
                let link_type: LinkType = type_name
                    .parse()
                    .map_err(|e: String| anyhow::anyhow!(e))?;
                serde_json::to_string_pretty(&engine.extract_links_by_type(&cli.url, link_type).await)?
            } else if cli.external {
                serde_json::to_string_pretty(&engine.extract_external_links(&cli.url).await)?
            } else {
                serde_json::to_string_pretty(&engine.extract_links(&cli.url).await)?
            }
        }
        Mode::Text => serde_json::to_string_pretty(&engine.extract_text(&cli.url).await)?,
        Mode::Summary => serde_json::to_string_pretty(
            &engine.extract_summary(&cli.url, cli.max_sentences).await,
        )?,
    };

    println!("{}", output);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pagelens=info,warn"),
            1 => EnvFilter::new("pagelens=debug,info"),
            2 => EnvFilter::new("pagelens=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
