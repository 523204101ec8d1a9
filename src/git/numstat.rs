use crate::error::{MaxLinesError, Result};
use serde::Serialize;

/// One line of `git diff --numstat` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumstatEntry {
    pub added: u64,
    pub deleted: u64,
    pub path: String,
}

impl NumstatEntry {
    /// Net change in line count (negative when the file shrank)
    pub fn delta(&self) -> i64 {
        self.added as i64 - self.deleted as i64
    }
}

/// Parse `git diff --numstat` output.
/// Each line: `<added>\t<deleted>\t<path>`
///
/// Unlike a display-oriented parser this does not skip anything it cannot
/// read: binary files (`-\t-\t<path>`) and lines with the wrong number of
/// fields are errors.
pub fn parse_numstat(output: &str) -> Result<Vec<NumstatEntry>> {
    output.lines().map(parse_numstat_line).collect()
}

/// Parse `git diff --numstat -z` output.
///
/// Records end in NUL and paths are written verbatim, so names with
/// non-ASCII bytes, tabs, quotes or newlines come through unquoted.
pub fn parse_numstat_z(output: &str) -> Result<Vec<NumstatEntry>> {
    output
        .split('\0')
        .filter(|record| !record.is_empty())
        .map(|record| parse_fields(record, record.splitn(3, '\t').collect()))
        .collect()
}

fn parse_numstat_line(line: &str) -> Result<NumstatEntry> {
    parse_fields(line, line.split('\t').collect())
}

fn parse_fields(line: &str, fields: Vec<&str>) -> Result<NumstatEntry> {
    let [added, deleted, path] = fields[..] else {
        return Err(MaxLinesError::Numstat {
            line: line.to_string(),
            reason: format!("expected 3 tab-separated fields, found {}", fields.len()),
        });
    };

    let count = |field: &str, name: &str| {
        field.parse::<u64>().map_err(|_| MaxLinesError::Numstat {
            line: line.to_string(),
            reason: format!("{name} count {field:?} is not a number"),
        })
    };

    Ok(NumstatEntry {
        added: count(added, "added")?,
        deleted: count(deleted, "deleted")?,
        path: path.to_string(),
    })
}
