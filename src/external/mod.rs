//! External tool invocation
//!
//! Thin blocking wrapper over `std::process::Command` shared by the `git`
//! and `wc` backends. The executable is resolved on `PATH` first so a missing
//! tool is reported as such instead of as a generic spawn error.

use crate::error::{MaxLinesError, Result};
use std::io;
use std::path::Path;
use std::process::Command;

/// Run `program` with `args` and return its stdout.
/// Non-zero exit is an error carrying the tool's stderr.
pub fn run_tool(program: &str, args: &[&str], current_dir: Option<&Path>) -> Result<String> {
    let command = std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");

    let executable = which::which(program).map_err(|e| MaxLinesError::Spawn {
        command: command.clone(),
        source: io::Error::new(io::ErrorKind::NotFound, e.to_string()),
    })?;

    let mut cmd = Command::new(executable);
    cmd.args(args);
    if let Some(dir) = current_dir {
        cmd.current_dir(dir);
    }

    tracing::trace!("Running `{}`", command);
    let output = cmd.output().map_err(|source| MaxLinesError::Spawn {
        command: command.clone(),
        source,
    })?;

    if !output.status.success() {
        return Err(MaxLinesError::ToolFailed {
            command,
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_spawn_error() {
        let err = run_tool("definitely-not-a-real-tool-4242", &[], None).unwrap_err();
        assert!(matches!(err, MaxLinesError::Spawn { .. }));
        assert!(err.is_external_tool_failure());
    }

    #[test]
    fn test_failing_program_reports_status() {
        if which::which("git").is_err() {
            return;
        }
        let err = run_tool("git", &["no-such-subcommand-4242"], None).unwrap_err();
        assert!(matches!(err, MaxLinesError::ToolFailed { .. }));
        assert!(err.to_string().contains("git no-such-subcommand-4242"));
    }
}
