//! CLI entry point for photomosaic assembly

use clap::Parser;
use fftmosaic::io::cli::{Cli, MosaicProcessor};

fn main() -> fftmosaic::Result<()> {
    let cli = Cli::parse();
    let mut processor = MosaicProcessor::new(cli);
    processor.process()
}
