// testcat-core/src/infrastructure/config.rs

use std::path::PathBuf;

/// Pattern used when the caller supplies none.
pub const DEFAULT_PATTERN: &str = "test-catalog/**/*.yaml";

pub const DEFAULT_OUTPUT_FILE: &str = "combined-test-catalog.txt";

/// Environment variable that marks execution inside GitHub Actions.
pub const CI_MARKER_ENV: &str = "GITHUB_WORKSPACE";

/// Inputs of a single flatten run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenConfig {
    /// Base directory for relative patterns and a relative output path.
    pub root: PathBuf,
    pub patterns: Vec<String>,
    pub output_file: PathBuf,
}

impl FlattenConfig {
    /// Builds a config, falling back to [`DEFAULT_PATTERN`] when `patterns` is empty.
    pub fn new(
        root: impl Into<PathBuf>,
        patterns: Vec<String>,
        output_file: impl Into<PathBuf>,
    ) -> Self {
        let patterns = if patterns.is_empty() {
            vec![DEFAULT_PATTERN.to_string()]
        } else {
            patterns
        };

        Self {
            root: root.into(),
            patterns,
            output_file: output_file.into(),
        }
    }

    /// Output location with a relative path anchored at `root`.
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_file)
    }
}

impl Default for FlattenConfig {
    fn default() -> Self {
        Self::new(".", Vec::new(), DEFAULT_OUTPUT_FILE)
    }
}

/// True when [`CI_MARKER_ENV`] is set to a non-empty value.
pub fn ci_marker_present() -> bool {
    std::env::var_os(CI_MARKER_ENV).is_some_and(|v| !v.is_empty())
}
