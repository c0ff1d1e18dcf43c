//! Git collaborators: subprocess calls and repository probes.
//!
//! [`GitRepo`] wraps a discovered `git2` repository. Status text and the diff
//! summary come from the `git` binary (the parser targets its porcelain v2
//! output), while the metadata directory and tag lookup come from `git2`.
//!
//! # Public API
//! - [`GitRepo`]: Repository handle used for one prompt run
//! - [`has_stash`]: Stash presence probe under the common metadata directory
//! - [`is_merging`]: Merge-in-progress probe under the metadata directory

use crate::core::{
    error::{GitPromptError, Result},
    parser::TagResolver,
};
use git2::{DescribeOptions, Repository};
use std::path::{Path, PathBuf};
use std::process::Command;

const GIT_EXE: &str = "git";

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(GitRepo { repo })
    }

    /// Working tree root; bare repositories have none
    pub fn work_dir(&self) -> Result<&Path> {
        self.repo.workdir().ok_or(GitPromptError::NotInGitRepo)
    }

    /// Absolute path of the metadata directory
    pub fn git_dir(&self) -> PathBuf {
        self.repo.path().to_path_buf()
    }

    /// Metadata shared by all worktrees; refs such as `refs/stash` live here
    pub fn common_dir(&self) -> PathBuf {
        self.repo.commondir().to_path_buf()
    }

    /// Remote configured for `branch` through `branch.<name>.remote`
    pub fn upstream_remote(&self, branch: &str) -> Option<String> {
        match self
            .repo
            .branch_upstream_remote(&format!("refs/heads/{branch}"))
        {
            Ok(remote) => remote.as_str().map(str::to_string),
            Err(e) => {
                log::debug!("No upstream remote for {branch}: {e}");
                None
            }
        }
    }

    /// Run `git <args>` in the working tree and return its stdout
    fn run_git(&self, args: &[&str]) -> Result<String> {
        let mut cmd = Command::new(GIT_EXE);
        cmd.args(args)
            .current_dir(self.work_dir()?)
            .env("GIT_OPTIONAL_LOCKS", "0");
        log::debug!("Running {cmd:?}");

        let output = cmd.output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitPromptError::git_command_failed(
                args.join(" "),
                stderr.trim(),
            ));
        }

        String::from_utf8(output.stdout).map_err(|_| GitPromptError::InvalidUtf8Output)
    }

    /// `git status --porcelain=v2 --branch`
    pub fn status_output(&self) -> Result<String> {
        self.run_git(&["status", "--porcelain=v2", "--branch"])
    }

    /// `git diff --numstat`
    pub fn numstat_output(&self) -> Result<String> {
        self.run_git(&["diff", "--numstat"])
    }
}

impl TagResolver for GitRepo {
    fn exact_tag(&self) -> Option<String> {
        let mut opts = DescribeOptions::new();
        opts.describe_tags().max_candidates_tags(0);

        match self
            .repo
            .describe(&opts)
            .and_then(|describe| describe.format(None))
        {
            Ok(tag) => Some(tag),
            Err(e) => {
                log::debug!("No exact tag for HEAD: {e}");
                None
            }
        }
    }
}

/// A stash exists when its ref or its reflog is present
pub fn has_stash(git_dir: &Path) -> bool {
    git_dir.join("refs/stash").exists() || git_dir.join("logs/refs/stash").exists()
}

/// A merge is in progress while `MERGE_HEAD` exists
pub fn is_merging(git_dir: &Path) -> bool {
    git_dir.join("MERGE_HEAD").exists()
}
