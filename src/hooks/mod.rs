//! Pre-commit checks
//!
//! Each check takes the filenames the hook framework passes on the command
//! line and returns a report the CLI turns into output and an exit code.

pub mod max_lines;

pub use max_lines::{CheckOptions, CheckReport, FileLines, files_exceeding_max_lines};
