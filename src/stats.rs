use std::collections::{BTreeMap, BTreeSet};

use crate::path::path_prefix;
use crate::query::parameter_names;
use crate::url_parts::UrlParts;

/// Aggregates collected over one pass. Entries are only ever added.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UrlStats {
    pub domains: BTreeSet<String>,
    pub subdirectories: BTreeSet<String>,
    pub parameters: BTreeMap<String, u32>,
    pub urls_processed: u64,
    pub lines_skipped: u64,
}

impl UrlStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one URL into the aggregates.
    pub fn record(&mut self, parts: &UrlParts, depth: Option<usize>, keep_blank_values: bool) {
        self.domains.insert(parts.authority.clone());
        self.subdirectories.insert(path_prefix(&parts.path, depth));

        if let Some(query) = &parts.query {
            for name in parameter_names(query, keep_blank_values) {
                *self.parameters.entry(name).or_insert(0) += 1;
            }
        }

        self.urls_processed += 1;
    }

    /// Parameters by descending count, equal counts by name.
    pub fn sorted_parameters(&self) -> Vec<(&str, u32)> {
        let mut sorted: Vec<(&str, u32)> = self
            .parameters
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        // stable sort keeps the map's name order within a count
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

#[derive(Debug)]
pub struct AnalysisResult {
    pub depth: Option<usize>,
    pub stats: UrlStats,
}

impl AnalysisResult {
    /// Depth shown in the subdirectory section header.
    pub fn depth_label(&self) -> String {
        match self.depth {
            Some(depth) => depth.to_string(),
            None => "All".to_string(),
        }
    }
}
