//! # max-lines - keep files under a line budget
//!
//! A pre-commit hook that counts lines in the files it is given and fails
//! when any of them is longer than the configured maximum.
//!
//! ## Features
//!
//! - **`wc -l` compatible counting**: newline bytes, missing files count as 0
//! - **Extension filter**: only check `*.py`, `*.rs`, ...
//! - **Shrinking is always allowed**: with `--ignore-modified`, files staged as
//!   modified with fewer lines than `HEAD` are exempt
//! - **Layered configuration**: defaults, `.max-lines.{toml,json,yaml,yml}`,
//!   `MAX_LINES_*` environment variables, command-line flags
//!
//! ## Usage
//!
//! ```yaml
//! # .pre-commit-config.yaml
//! repos:
//!   - repo: https://github.com/example/max-lines
//!     rev: v0.1.0
//!     hooks:
//!       - id: max-lines
//!         args: ["--max-lines", "500", "--extension", "rs", "--ignore-modified"]
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use max_lines::count::NewlineCounter;
//! use max_lines::git::GitCli;
//! use max_lines::hooks::{CheckOptions, files_exceeding_max_lines};
//!
//! let options = CheckOptions { max_lines: 500, ..CheckOptions::default() };
//! let report = files_exceeding_max_lines(&["src/main.rs"], &options, &NewlineCounter, &GitCli::new())?;
//! for file in &report.exceeding {
//!     println!("{} has {} lines", file.path, file.lines);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod count;
pub mod error;
pub mod external;
pub mod git;
pub mod hooks;

pub use cli::{Cli, Output};
pub use config::MaxLinesConfig;
pub use error::{MaxLinesError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
