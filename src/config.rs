use std::path::PathBuf;

use crate::Args;

/// Settings for a single analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    /// Number of leading path segments kept; `None` keeps the full path.
    pub depth: Option<usize>,
    /// Write the per-category companion files next to `output`.
    pub split_categories: bool,
    pub keep_blank_values: bool,
}

impl AnalyzerConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            depth: None,
            split_categories: true,
            keep_blank_values: false,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// A depth of zero means "All".
    pub fn with_depth(mut self, depth: Option<usize>) -> Self {
        self.depth = depth.filter(|&d| d > 0);
        self
    }

    pub fn with_split_categories(mut self, split: bool) -> Self {
        self.split_categories = split;
        self
    }

    pub fn with_keep_blank_values(mut self, keep: bool) -> Self {
        self.keep_blank_values = keep;
        self
    }
}

impl From<&Args> for AnalyzerConfig {
    fn from(args: &Args) -> Self {
        let config = AnalyzerConfig::new(&args.input_file)
            .with_depth(args.depth)
            .with_split_categories(!args.no_split)
            .with_keep_blank_values(args.keep_blank_values);

        match &args.output {
            Some(output) => config.with_output(output),
            None => config,
        }
    }
}
