use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::time::Instant;
use tracing::info;

use crate::config::AnalyzerConfig;
use crate::stats::{AnalysisResult, UrlStats};
use crate::url_parts::UrlParts;

pub fn analyze_urls(config: &AnalyzerConfig) -> Result<AnalysisResult> {
    let start_time = Instant::now();
    info!(action = "start", component = "url_analysis", input = ?config.input, depth = ?config.depth, "Starting URL analysis");

    let file = File::open(&config.input)
        .with_context(|| format!("Failed to open input file {:?}", config.input))?;
    let stats = collect_stats(BufReader::new(file), config)
        .with_context(|| format!("Failed to read input file {:?}", config.input))?;

    let total_time = start_time.elapsed();
    info!(
        action = "complete",
        component = "url_analysis",
        urls_processed = stats.urls_processed,
        lines_skipped = stats.lines_skipped,
        unique_domains = stats.domains.len(),
        unique_subdirectories = stats.subdirectories.len(),
        unique_parameters = stats.parameters.len(),
        duration_ms = total_time.as_millis(),
        "URL analysis completed"
    );

    Ok(AnalysisResult {
        depth: config.depth,
        stats,
    })
}

/// Runs the aggregation over any line source.
pub fn collect_stats<R: BufRead>(reader: R, config: &AnalyzerConfig) -> Result<UrlStats> {
    let mut stats = UrlStats::new();

    for line in reader.lines() {
        let line = line?;
        let url = line.trim();
        if url.is_empty() {
            stats.lines_skipped += 1;
            continue;
        }

        stats.record(&UrlParts::parse(url), config.depth, config.keep_blank_values);
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str, depth: Option<usize>) -> UrlStats {
        let config = AnalyzerConfig::new("unused").with_depth(depth);
        collect_stats(BufReader::new(input.as_bytes()), &config).unwrap()
    }

    #[test]
    fn blank_lines_contribute_nothing() {
        let stats = collect("\n   \n\t\nhttp://a.com/x\n\n", None);
        assert_eq!(stats.urls_processed, 1);
        assert_eq!(stats.lines_skipped, 4);
        assert_eq!(stats.domains.len(), 1);
        assert_eq!(stats.subdirectories.len(), 1);
    }

    #[test]
    fn surrounding_whitespace_trimmed() {
        let stats = collect("  http://a.com/x?q=1  \r\n", Some(1));
        assert!(stats.domains.contains("a.com"));
        assert!(stats.subdirectories.contains("/x"));
        assert_eq!(stats.parameters.get("q"), Some(&1));
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let config = AnalyzerConfig::new("unused");
        let bytes: &[u8] = &[0x68, 0x74, 0xff, 0xfe, b'\n'];
        assert!(collect_stats(BufReader::new(bytes), &config).is_err());
    }

    #[test]
    fn missing_input_file_is_an_error() {
        let config = AnalyzerConfig::new("/definitely/not/here/urls.txt");
        let err = analyze_urls(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to open input file"));
    }
}
