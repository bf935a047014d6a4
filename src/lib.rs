pub mod analyzer;
pub mod args;
pub mod config;
pub mod path;
pub mod query;
pub mod report;
pub mod stats;
pub mod url_parts;
pub mod utils;

pub use analyzer::analyze_urls;
pub use args::Args;
pub use config::AnalyzerConfig;
pub use report::{emit, Report};
pub use stats::{AnalysisResult, UrlStats};

/// Validates the configuration, runs the pass and writes the report to `out`.
///
/// Errors are returned untouched; the caller decides how to surface them.
pub fn run<W: std::io::Write>(config: &AnalyzerConfig, out: &mut W) -> anyhow::Result<()> {
    utils::validate_args(config)?;
    let result = analyze_urls(config)?;
    emit(&result, config, out)
}
