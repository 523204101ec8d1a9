//! Command-line interface for max-lines
//!
//! The hook framework passes the changed filenames as positional arguments;
//! flags map onto [`MaxLinesConfig`] and override any config file.

use crate::config::{ConfigOverrides, CounterBackend, DiffBackend, MaxLinesConfig};
use crate::count::{LineCounter, NewlineCounter, WcCounter};
use crate::git::{DiffProvider, GitCli, Libgit2Diff};
use crate::hooks::files_exceeding_max_lines;
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

mod output;

pub use output::Output;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Fail when files exceed a maximum number of lines
#[derive(Parser, Debug)]
#[command(name = "max-lines", author, version, about, long_about = None)]
pub struct Cli {
    /// Filenames pre-commit believes are changed
    pub filenames: Vec<String>,

    /// Maximum number of lines a file can have [default: 1000]
    #[arg(short, long, value_name = "LINES")]
    pub max_lines: Option<u64>,

    /// Comma separated list of paths to partially match and filter out (accepted, not applied)
    #[arg(short, long, value_delimiter = ',', value_name = "PATHS")]
    pub exceptions: Option<Vec<String>>,

    /// File extension to analyze, without the leading dot
    #[arg(short = 'x', long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Ignore modified files that have less lines than before
    #[arg(long)]
    pub ignore_modified: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print violations
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Where staged line statistics come from
    #[arg(long, value_enum)]
    pub diff_backend: Option<DiffBackend>,

    /// How lines are counted
    #[arg(long, value_enum)]
    pub line_counter: Option<CounterBackend>,
}

impl Cli {
    /// Flags that were given explicitly; absent flags leave lower layers alone
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            max_lines: self.max_lines,
            extension: self.extension.clone(),
            ignore_modified: self.ignore_modified.then_some(true),
            exceptions: self.exceptions.clone(),
            diff_backend: self.diff_backend,
            line_counter: self.line_counter,
        }
    }

    /// Run the line check and return the process exit code
    pub fn run(self) -> Result<ExitCode> {
        let output = Output::new(self.verbose > 0, self.quiet);
        let cwd = std::env::current_dir().context("Failed to determine current directory")?;
        let config = MaxLinesConfig::load(self.config.as_deref(), &cwd, &self.overrides())?;

        let counter: Box<dyn LineCounter> = match config.line_counter {
            CounterBackend::Native => Box::new(NewlineCounter),
            CounterBackend::Wc => Box::new(WcCounter),
        };
        let diff: Box<dyn DiffProvider> = match config.diff_backend {
            DiffBackend::Git => Box::new(GitCli::new()),
            DiffBackend::Libgit2 => Box::new(Libgit2Diff::discover(&cwd)),
        };

        let options = config.check_options();
        let report = files_exceeding_max_lines(&self.filenames, &options, counter.as_ref(), diff.as_ref())
            .context("Line count check failed")?;

        match self.format {
            OutputFormat::Text => output.report(&report, options.ignore_modified),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        }

        Ok(ExitCode::from(report.exit_code()))
    }
}

/// Install the tracing subscriber; `RUST_LOG` takes precedence over `-v`
pub fn setup_logging(verbose: u8) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
