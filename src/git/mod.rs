//! Git integration layer for max-lines
//!
//! The decision logic only needs one thing from git: the numeric diff of
//! files that are staged as modified. [`DiffProvider`] abstracts where that
//! comes from so it can be answered by the `git` executable, by libgit2, or
//! by a fixed list in tests.

use crate::error::Result;
use std::collections::BTreeSet;

mod numstat;
mod operations;

pub use numstat::{NumstatEntry, parse_numstat, parse_numstat_z};
pub use operations::{GitCli, Libgit2Diff};

/// Source of staged-vs-HEAD line statistics
pub trait DiffProvider {
    /// Numstat entries for files staged as modified (not added or deleted)
    fn staged_modified_numstat(&self) -> Result<Vec<NumstatEntry>>;
}

/// Files staged as modified whose line count went down
pub fn modified_decreased_lines(provider: &dyn DiffProvider) -> Result<BTreeSet<String>> {
    let entries = provider.staged_modified_numstat()?;

    Ok(entries
        .into_iter()
        .filter(|entry| entry.delta() < 0)
        .map(|entry| entry.path)
        .collect())
}
