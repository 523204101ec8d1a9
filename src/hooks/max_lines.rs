//! Maximum line count check
//!
//! Flags files whose current line count is above a limit. Candidates can be
//! narrowed by extension, and files that are staged as modified with fewer
//! lines than `HEAD` can be exempted so shrinking an oversized file is never
//! blocked.

use crate::count::LineCounter;
use crate::error::Result;
use crate::git::{DiffProvider, modified_decreased_lines};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

pub const DEFAULT_MAX_LINES: u64 = 1000;

/// Options for a single check run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    pub max_lines: u64,

    /// Only check files ending in `.<extension>`; empty means every file
    pub extension: Option<String>,

    /// Skip files staged as modified with a negative line delta
    pub ignore_modified: bool,

    /// Accepted for command-line compatibility; not applied to the check
    pub exceptions: Vec<String>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            extension: None,
            ignore_modified: false,
            exceptions: Vec::new(),
        }
    }
}

/// A counted file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileLines {
    pub path: String,
    pub lines: u64,
}

/// Outcome of a check run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub max_lines: u64,
    pub checked: Vec<FileLines>,
    pub exceeding: Vec<FileLines>,
    pub exempted: Vec<String>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.exceeding.is_empty()
    }

    /// 0 when nothing exceeds the limit, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        if self.passed() { 0 } else { 1 }
    }
}

/// Count lines in `filenames` and collect every file above `options.max_lines`.
///
/// `diff` is only consulted when `options.ignore_modified` is set.
pub fn files_exceeding_max_lines<S: AsRef<str>>(
    filenames: &[S],
    options: &CheckOptions,
    counter: &dyn LineCounter,
    diff: &dyn DiffProvider,
) -> Result<CheckReport> {
    let mut candidates: BTreeSet<&str> = filenames.iter().map(|name| name.as_ref()).collect();

    if let Some(extension) = options.extension.as_deref().filter(|ext| !ext.is_empty()) {
        let suffix = format!(".{extension}");
        candidates.retain(|name| name.ends_with(&suffix));
    }

    if !options.exceptions.is_empty() {
        tracing::warn!("Exceptions {:?} are not applied to the line check", options.exceptions);
    }

    let mut report = CheckReport {
        max_lines: options.max_lines,
        ..CheckReport::default()
    };

    if options.ignore_modified {
        let decreased = modified_decreased_lines(diff)?;
        tracing::info!("Ignoring modified files that have less lines than before: {:?}", decreased);
        let (exempt, kept): (BTreeSet<&str>, BTreeSet<&str>) =
            candidates.into_iter().partition(|name| decreased.contains(*name));
        candidates = kept;
        report.exempted = exempt.into_iter().map(str::to_string).collect();
    }

    for name in candidates {
        let lines = counter.count_lines(Path::new(name))?;
        tracing::debug!("{}: {} lines", name, lines);

        let file = FileLines {
            path: name.to_string(),
            lines,
        };
        if lines > options.max_lines {
            report.exceeding.push(file.clone());
        }
        report.checked.push(file);
    }

    Ok(report)
}
