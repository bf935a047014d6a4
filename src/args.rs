use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "urlscope",
    about = "Analyze URLs and extract domains, subdirectories, and parameters",
    version,
    long_about = None
)]
pub struct Args {
    /// File containing a list of URLs, one per line
    pub input_file: PathBuf,

    /// Optional output file to save results
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Filter subdirectories by depth (default: all levels)
    #[arg(short, long)]
    pub depth: Option<usize>,

    /// Only write the combined summary to the output file
    #[arg(long)]
    pub no_split: bool,

    /// Count parameters even when every value they carry is empty
    #[arg(long)]
    pub keep_blank_values: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
