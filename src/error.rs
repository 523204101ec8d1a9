//! Error types for max-lines
//!
//! Library operations return [`MaxLinesError`]. A missing file is not an error:
//! line counting treats it as empty.

use std::io;
use std::path::PathBuf;

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, MaxLinesError>;

#[derive(Debug, thiserror::Error)]
pub enum MaxLinesError {
    /// An external program could not be found or started
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// An external program ran but reported failure
    #[error("`{command}` failed with {status}: {stderr}")]
    ToolFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// A `git diff --numstat` line could not be parsed
    #[error("malformed numstat line {line:?}: {reason}")]
    Numstat { line: String, reason: String },

    /// `wc -l` printed something other than a count
    #[error("could not read a line count from `wc` output {output:?}")]
    WcOutput { output: String },

    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MaxLinesError {
    /// True for failures of `git`, `wc` or libgit2 (as opposed to bad output)
    pub fn is_external_tool_failure(&self) -> bool {
        matches!(
            self,
            MaxLinesError::Spawn { .. } | MaxLinesError::ToolFailed { .. } | MaxLinesError::Git(_)
        )
    }

    /// True when upstream output could not be parsed
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            MaxLinesError::Numstat { .. } | MaxLinesError::WcOutput { .. }
        )
    }
}
