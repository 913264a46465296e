//! Stream Processor - Main Entry Point
//!
//! Processes one input and writes the result record as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use streamprocessor::ProcessorConfig;

#[derive(Parser, Debug)]
#[command(name = "streamprocessor", version, about = "Wrap text in a timestamped result record")]
struct Cli {
    /// File to read input from (built-in sample text when omitted)
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// File to write the result to (stdout when omitted)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print processor stats to stderr after the run
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    dotenvy::dotenv().ok();
    let mut config = ProcessorConfig::from_env();
    if cli.verbose {
        config = config.with_verbose(true);
    }
    if let Some(input) = cli.input {
        config = config.with_input(input);
    }
    if let Some(output) = cli.output {
        config = config.with_output(output);
    }

    // Initialize tracing; stdout is reserved for the result
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!(?config, "Loaded configuration");

    let mut processor = config.build();
    processor
        .run(config.input_path.as_deref(), config.output_path.as_deref())
        .context("processing run failed")?;

    if cli.stats {
        let stats = serde_json::to_string_pretty(&processor.stats().to_map())?;
        eprintln!("{stats}");
    }

    Ok(())
}
