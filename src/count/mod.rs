//! Line counting
//!
//! Counts follow `wc -l`: the number of `\n` bytes in the file. A last line
//! without a trailing newline is not counted. Paths that are not regular
//! files (missing, deleted since staging, directories) count as 0.

use crate::error::{MaxLinesError, Result};
use crate::external::run_tool;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Counts lines in a single file
pub trait LineCounter {
    fn count_lines(&self, path: &Path) -> Result<u64>;
}

/// Counts newline bytes in-process
#[derive(Debug, Clone, Copy, Default)]
pub struct NewlineCounter;

impl LineCounter for NewlineCounter {
    fn count_lines(&self, path: &Path) -> Result<u64> {
        if !path.is_file() {
            return Ok(0);
        }

        let read_error = |source| MaxLinesError::Read {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(read_error)?;
        let mut reader = BufReader::with_capacity(64 * 1024, file);
        let mut lines = 0u64;
        loop {
            let buf = reader.fill_buf().map_err(read_error)?;
            if buf.is_empty() {
                break;
            }
            lines += buf.iter().filter(|&&b| b == b'\n').count() as u64;
            let consumed = buf.len();
            reader.consume(consumed);
        }

        Ok(lines)
    }
}

/// Shells out to `wc -l`
#[derive(Debug, Clone, Copy, Default)]
pub struct WcCounter;

impl LineCounter for WcCounter {
    fn count_lines(&self, path: &Path) -> Result<u64> {
        if !path.is_file() {
            return Ok(0);
        }

        let path_arg = path.to_string_lossy();
        let output = run_tool("wc", &["-l", "--", &*path_arg], None)?;
        parse_wc_output(&output)
    }
}

/// First whitespace-delimited token of `wc -l` output
fn parse_wc_output(output: &str) -> Result<u64> {
    output
        .split_whitespace()
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| MaxLinesError::WcOutput {
            output: output.trim().to_string(),
        })
}
