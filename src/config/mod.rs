//! Configuration management for max-lines
//!
//! Settings come from built-in defaults, an optional repository config file
//! (TOML, JSON or YAML), `MAX_LINES_*` environment variables and finally the
//! command line, each layer overriding the one before it.

use crate::hooks::CheckOptions;
use crate::hooks::max_lines::DEFAULT_MAX_LINES;
use serde::{Deserialize, Serialize};

mod load;
mod smart_load;

pub use load::{CONFIG_FILE_NAMES, ConfigOverrides};

/// Where staged line statistics come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DiffBackend {
    /// Run `git diff --numstat`
    #[default]
    Git,
    /// Compute the diff in-process with libgit2
    Libgit2,
}

/// How files are counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CounterBackend {
    /// Count newline bytes in-process
    #[default]
    Native,
    /// Run `wc -l`
    Wc,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaxLinesConfig {
    /// Maximum number of lines a file can have
    pub max_lines: u64,

    /// Only check files with this extension (no leading dot)
    pub extension: Option<String>,

    /// Exempt staged modified files whose line count went down
    pub ignore_modified: bool,

    /// Path substrings; accepted but not applied by the check
    pub exceptions: Vec<String>,

    pub diff_backend: DiffBackend,

    pub line_counter: CounterBackend,
}

impl Default for MaxLinesConfig {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            extension: None,
            ignore_modified: false,
            exceptions: Vec::new(),
            diff_backend: DiffBackend::default(),
            line_counter: CounterBackend::default(),
        }
    }
}

impl MaxLinesConfig {
    /// Options for the line check
    pub fn check_options(&self) -> CheckOptions {
        CheckOptions {
            max_lines: self.max_lines,
            extension: self.extension.clone(),
            ignore_modified: self.ignore_modified,
            exceptions: self.exceptions.clone(),
        }
    }
}
