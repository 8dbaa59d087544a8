//! SQuAD builder CLI
//!
//! Converts a tab-separated file of question/context pairs into a
//! SQuAD 1.1 JSON file.

use anyhow::{Context, Result};
use clap::Parser;
use squad_core::{
    convert_file, default_output_path, BuildOptions, ConvertOptions, DEFAULT_TITLE,
    DEFAULT_VERSION,
};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Build a SQuAD 1.1 dataset from tab-separated question/context pairs
#[derive(Parser, Debug)]
#[command(name = "build-squad")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file, one `question<TAB>context` pair per line
    input: PathBuf,

    /// Output path (defaults to the input path with a .json extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Title of the data group
    #[arg(long, env = "SQUAD_TITLE", default_value = DEFAULT_TITLE)]
    title: String,

    /// Version tag written at the top of the dataset
    #[arg(long = "squad-version", env = "SQUAD_VERSION", default_value = DEFAULT_VERSION)]
    squad_version: String,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            build: BuildOptions::default()
                .with_version(self.squad_version.clone())
                .with_title(self.title.clone()),
            pretty: self.pretty,
        }
    }
}

/// Log filter from `RUST_LOG`, falling back to INFO (or DEBUG when verbose)
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(rust_log.unwrap_or_default())
}

fn main() -> Result<()> {
    // Load environment variables from .env if present.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Setup logging
    let rust_log = std::env::var("RUST_LOG").ok();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(cli.verbose, rust_log.as_deref()))
        .with_target(false)
        // Logs and errors go to stderr; stdout only carries the summary line
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));
    let options = cli.convert_options();
    debug!(?options, "Converting {}", cli.input.display());

    let summary = convert_file(&cli.input, &output, &options)
        .with_context(|| format!("Cannot build SQuAD {} json file", options.build.version))?;

    println!(
        "✓ Wrote {} paragraphs ({} questions) to {}",
        summary.paragraphs,
        summary.questions,
        summary.output.display()
    );

    Ok(())
}
