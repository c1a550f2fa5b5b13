//! CLI entry point for the e-paper photo rendering tool

use clap::Parser;
use inkframe::io::cli::{Cli, FileProcessor};

fn main() -> inkframe::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
