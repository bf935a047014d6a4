use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::AnalyzerConfig;
use crate::stats::AnalysisResult;
use crate::utils::companion_path;

/// Rendered report text: the combined summary plus each section on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub summary: String,
    pub domains: String,
    pub subdirectories: String,
    pub parameters: String,
}

impl Report {
    pub fn render(result: &AnalysisResult) -> Self {
        let stats = &result.stats;

        let domains = join_lines(stats.domains.iter().map(String::as_str));
        let subdirectories = join_lines(stats.subdirectories.iter().map(String::as_str));
        let parameters = stats
            .sorted_parameters()
            .into_iter()
            .map(|(name, count)| format!("{} ({} occurrences)", name, count))
            .collect::<Vec<_>>()
            .join("\n");

        let summary = [
            section("### Unique Domains (Subdomains) ###", &domains),
            section(
                &format!("### Unique Subdirectories (Depth: {}) ###", result.depth_label()),
                &subdirectories,
            ),
            section("### Unique Parameters ###", &parameters),
        ]
        .join("\n\n");

        Self {
            summary,
            domains,
            subdirectories,
            parameters,
        }
    }
}

fn join_lines<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    lines.collect::<Vec<_>>().join("\n")
}

fn section(header: &str, body: &str) -> String {
    if body.is_empty() {
        header.to_string()
    } else {
        format!("{}\n{}", header, body)
    }
}

/// A file written by [`write_report_files`] and what it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub label: &'static str,
    pub path: PathBuf,
}

/// Writes the summary to `output`, then the companion files when `split` is set.
///
/// Files are written in order and the first failure aborts, leaving earlier
/// files in place.
pub fn write_report_files(report: &Report, output: &Path, split: bool) -> Result<Vec<SavedFile>> {
    let mut targets = vec![("Summary", output.to_path_buf(), &report.summary)];
    if split {
        targets.push(("Subdomains", companion_path(output, "_subdomains"), &report.domains));
        targets.push(("Subdirectories", companion_path(output, "_subdirs"), &report.subdirectories));
        targets.push(("Parameters", companion_path(output, "_params"), &report.parameters));
    }

    let mut saved = Vec::with_capacity(targets.len());
    for (label, path, contents) in targets {
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write {} to {:?}", label.to_lowercase(), path))?;
        info!(action = "write", component = "report_output", label = label, path = ?path, bytes = contents.len(), "Report file written");
        saved.push(SavedFile { label, path });
    }

    Ok(saved)
}

/// Writes the summary to `out`, then any configured output files followed by
/// one confirmation line each.
pub fn emit<W: Write>(result: &AnalysisResult, config: &AnalyzerConfig, out: &mut W) -> Result<()> {
    let report = Report::render(result);
    writeln!(out, "{}", report.summary)?;

    if let Some(output) = &config.output {
        let saved = write_report_files(&report, output, config.split_categories)?;
        writeln!(out)?;
        for file in saved {
            writeln!(out, "[+] {} saved to {}", file.label, file.path.display())?;
        }
    }

    out.flush()?;
    Ok(())
}
