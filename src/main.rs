//! CLI entry point for the heightmap tiler

use clap::Parser;
use heightmap_tiler::io::cli::{Cli, FileProcessor};
use heightmap_tiler::io::logging::init_logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = init_logging(cli.verbose) {
        report_without_logger(&err);
        return ExitCode::FAILURE;
    }

    let mut processor = FileProcessor::new(cli);
    match processor.process() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

// No logger is installed yet, so stderr is the only channel left
#[allow(clippy::print_stderr)]
fn report_without_logger(err: &heightmap_tiler::TilingError) {
    eprintln!("Error: {err}");
}
