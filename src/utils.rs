use std::path::{Path, PathBuf};
use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

use crate::config::AnalyzerConfig;

/// Logs go to stderr so stdout only carries the report. `RUST_LOG` wins over
/// the verbosity flag.
pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::new(format_description!(
            "[hour]:[minute]:[second].[subsecond digits:3]"
        )))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Inserts `suffix` before a trailing `.txt`, or appends `suffix.txt` otherwise.
pub fn companion_path(output: &Path, suffix: &str) -> PathBuf {
    let output = output.to_string_lossy();
    match output.strip_suffix(".txt") {
        Some(stem) => PathBuf::from(format!("{}{}.txt", stem, suffix)),
        None => PathBuf::from(format!("{}{}.txt", output, suffix)),
    }
}

pub fn validate_args(config: &AnalyzerConfig) -> anyhow::Result<()> {
    if let Some(output) = &config.output {
        if output == &config.input {
            anyhow::bail!("--output must not be the input file");
        }

        if config.split_categories {
            for suffix in ["_subdomains", "_subdirs", "_params"] {
                if companion_path(output, suffix) == config.input {
                    anyhow::bail!(
                        "--output would overwrite the input file with its {} file",
                        suffix.trim_start_matches('_')
                    );
                }
            }
        }
    }

    Ok(())
}
