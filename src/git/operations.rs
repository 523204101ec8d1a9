use super::{DiffProvider, NumstatEntry, parse_numstat_z};
use crate::error::{MaxLinesError, Result};
use crate::external::run_tool;
use git2::{Delta, DiffOptions, ErrorCode, Patch, Repository, Tree};
use std::path::{Path, PathBuf};

const NUMSTAT_ARGS: &[&str] = &["diff", "--numstat", "-z", "--staged", "--diff-filter=M"];

/// Staged numstat from the `git` executable
#[derive(Debug, Clone, Default)]
pub struct GitCli {
    workdir: Option<PathBuf>,
}

impl GitCli {
    /// Run git in the current directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git in `path` instead of the current directory
    pub fn in_dir<P: AsRef<Path>>(path: P) -> Self {
        Self {
            workdir: Some(path.as_ref().to_path_buf()),
        }
    }
}

impl DiffProvider for GitCli {
    fn staged_modified_numstat(&self) -> Result<Vec<NumstatEntry>> {
        let output = run_tool("git", NUMSTAT_ARGS, self.workdir.as_deref())?;
        tracing::debug!("git numstat: {:?}", output.split_terminator('\0').collect::<Vec<_>>());
        parse_numstat_z(&output)
    }
}

/// Staged numstat computed in-process with libgit2
#[derive(Debug, Clone)]
pub struct Libgit2Diff {
    path: PathBuf,
}

impl Libgit2Diff {
    /// Use the repository containing `path`
    pub fn discover<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn head_tree(repo: &Repository) -> Result<Option<Tree<'_>>> {
        match repo.head() {
            Ok(head) => Ok(Some(head.peel_to_tree()?)),
            // No commits yet: everything staged is an addition
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl DiffProvider for Libgit2Diff {
    fn staged_modified_numstat(&self) -> Result<Vec<NumstatEntry>> {
        let repo = Repository::discover(&self.path)?;
        let head_tree = Self::head_tree(&repo)?;
        let index = repo.index()?;

        let mut diff_opts = DiffOptions::new();
        diff_opts.context_lines(0);
        let diff = repo.diff_tree_to_index(head_tree.as_ref(), Some(&index), Some(&mut diff_opts))?;

        let mut entries = Vec::new();
        for (idx, delta) in diff.deltas().enumerate() {
            if delta.status() != Delta::Modified {
                continue;
            }
            let path = match delta.new_file().path() {
                Some(path) => path.to_string_lossy().into_owned(),
                None => continue,
            };

            let patch = Patch::from_diff(&diff, idx)?;
            let binary = patch
                .as_ref()
                .is_none_or(|patch| patch.delta().flags().is_binary());
            let Some(patch) = patch.filter(|_| !binary) else {
                return Err(MaxLinesError::Numstat {
                    line: format!("-\t-\t{path}"),
                    reason: "binary file has no line counts".to_string(),
                });
            };

            let (_context, added, deleted) = patch.line_stats()?;
            tracing::debug!("libgit2 numstat: {}\t{}\t{}", added, deleted, path);
            entries.push(NumstatEntry {
                added: added as u64,
                deleted: deleted as u64,
                path,
            });
        }

        Ok(entries)
    }
}
