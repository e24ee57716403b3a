//! CLI entry point for sliding-window image binarization and extremum marking

use clap::Parser;
use gridscan::io::cli::{Cli, FileProcessor};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> gridscan::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut processor = FileProcessor::new(cli);
    let written = processor.process()?;
    info!(files = written, "done");
    Ok(())
}
