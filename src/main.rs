//! CLI entry point for the alternating pixel progression generator

use alternando::io::cli::{BatchProcessor, Cli};
use alternando::io::logging::init_tracing;
use clap::Parser;

fn main() -> alternando::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);
    let mut processor = BatchProcessor::new(cli);
    processor.process().map(|_| ())
}
