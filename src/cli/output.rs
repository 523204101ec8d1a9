//! Styled terminal output
//!
//! Violations are always printed; everything else respects `--quiet`.

use crate::hooks::CheckReport;
use console::style;

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✔").green(), message);
        }
    }

    /// Print a check failure, even in quiet mode
    pub fn violation(&self, message: &str) {
        println!("{} {}", style("✖").red(), message);
    }

    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("ℹ").blue(), message);
        }
    }

    /// Only shown with `--verbose`
    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            println!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    pub fn list_item(&self, item: &str) {
        if !self.quiet {
            println!("  • {}", item);
        }
    }

    /// Render a line check report as text
    pub fn report(&self, report: &CheckReport, ignore_modified: bool) {
        if ignore_modified {
            self.info("Ignoring modified files that have less lines than before:");
            for path in &report.exempted {
                self.list_item(path);
            }
        }

        for file in &report.checked {
            self.verbose(&format!("{}: {} lines", file.path, file.lines));
        }

        for file in &report.exceeding {
            self.violation(&format!(
                "{} exceeds {} lines",
                style(&file.path).bold(),
                report.max_lines
            ));
        }

        if report.passed() {
            self.success(&format!(
                "{} file(s) within {} lines",
                report.checked.len(),
                report.max_lines
            ));
        }
    }
}
