use clap::Parser;
use std::io;
use tracing::error;

use urlscope::{run, utils, AnalyzerConfig, Args};

fn main() {
    let args = Args::parse();
    utils::setup_logging(args.verbose);

    let config = AnalyzerConfig::from(&args);
    if let Err(e) = run(&config, &mut io::stdout().lock()) {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}
