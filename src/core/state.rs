//! Repository state produced by parsing and consumed by rendering.
//!
//! One [`RepositoryState`] lives for a single prompt run: created empty,
//! filled by one pass over the porcelain status text, optionally enriched by
//! the diff summary and the stash/merge probes, rendered once and dropped.
//!
//! # Public API
//! - [`ChangeArea`]: Per-side (staged or unstaged) change counters
//! - [`RepositoryState`]: Aggregate record handed to the renderer
//! - [`Resolution`]: Explicit "not yet resolved" / "resolved" wrapper
//! - [`Health`]: Clean / staged-only / dirty classification used for coloring

use crate::core::{error::Result, git_status::GitStatus};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Branch name git reports when HEAD is not on a branch
pub const DETACHED_HEAD: &str = "(detached)";

/// Commit id git reports for a repository without commits
pub const INITIAL_COMMIT: &str = "(initial)";

/// Length of an abbreviated commit id
pub const SHORT_COMMIT_LEN: usize = 7;

/// Counters for one side of the working tree.
///
/// Only ever incremented, once per recognised letter per entry line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChangeArea {
    pub modified: u32,
    pub added: u32,
    pub deleted: u32,
    pub renamed: u32,
    pub copied: u32,
}

impl ChangeArea {
    pub fn record(&mut self, status: GitStatus) {
        log::trace!("Counting {status} change");
        let counter = match status {
            GitStatus::Modified => &mut self.modified,
            GitStatus::Added => &mut self.added,
            GitStatus::Deleted => &mut self.deleted,
            GitStatus::Renamed => &mut self.renamed,
            GitStatus::Copied => &mut self.copied,
        };
        *counter += 1;
    }

    pub fn change_count(&self) -> u32 {
        self.modified + self.added + self.deleted + self.renamed + self.copied
    }

    pub fn has_changed(&self) -> bool {
        self.change_count() > 0
    }
}

/// A value that is computed on first use and then kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum Resolution<T> {
    #[default]
    Pending,
    Resolved(T),
}

impl<T> Resolution<T> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    /// Return the cached value, running `resolve` only if nothing is cached.
    /// A failed resolution leaves the wrapper pending.
    pub fn get_or_try_resolve<F>(&mut self, resolve: F) -> Result<&T>
    where
        F: FnOnce() -> Result<T>,
    {
        if let Resolution::Pending = self {
            *self = Resolution::Resolved(resolve()?);
        }
        match self {
            Resolution::Resolved(value) => Ok(value),
            Resolution::Pending => unreachable!("resolution stored above"),
        }
    }
}

/// Overall cleanliness, drives the tri-state prompt coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Health {
    /// Nothing staged, nothing modified
    Clean,
    /// Staged changes only
    StagedOnly,
    /// Unstaged changes present
    Dirty,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepositoryState {
    pub work_dir: PathBuf,
    pub git_dir: Resolution<PathBuf>,

    // Branch
    pub branch: String,
    pub commit: String,
    pub remote: String,
    pub upstream: String,
    pub ahead: u32,
    pub behind: u32,

    // Totals
    pub untracked: u32,
    pub unmerged: u32,
    pub insertions: u64,
    pub deletions: u64,

    pub staged: ChangeArea,
    pub unstaged: ChangeArea,

    // Probes
    pub stashed: bool,
    pub merging: bool,
}

impl RepositoryState {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            ..Default::default()
        }
    }

    pub fn health(&self) -> Health {
        if self.unstaged.has_changed() {
            Health::Dirty
        } else if self.staged.has_changed() {
            Health::StagedOnly
        } else {
            Health::Clean
        }
    }

    /// Drives the clean/dirty glyph; coloring goes through [`Self::health`]
    pub fn is_dirty(&self) -> bool {
        self.staged.has_changed()
    }

    /// Conflicted entries were reported, or a merge is in progress
    pub fn has_unmerged(&self) -> bool {
        self.unmerged > 0 || self.merging
    }

    pub fn is_detached(&self) -> bool {
        self.branch == DETACHED_HEAD
    }

    /// Commit id cut to seven characters, the no-commits sentinel verbatim
    pub fn short_commit(&self) -> &str {
        if self.commit == INITIAL_COMMIT {
            return &self.commit;
        }
        match self.commit.char_indices().nth(SHORT_COMMIT_LEN) {
            Some((end, _)) => &self.commit[..end],
            None => &self.commit,
        }
    }

    /// Metadata directory, resolved on first call and cached afterwards
    pub fn git_dir_or_resolve<F>(&mut self, resolve: F) -> Result<&Path>
    where
        F: FnOnce(&Path) -> Result<PathBuf>,
    {
        let work_dir = &self.work_dir;
        let dir = self.git_dir.get_or_try_resolve(|| resolve(work_dir))?;
        Ok(dir.as_path())
    }
}
