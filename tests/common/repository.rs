//! Git repository management and setup utilities
//!
//! Provides functions for creating throwaway repositories and driving the
//! `gitprompt` binary inside them.

#![allow(dead_code)]

use assert_cmd::Command;
use gitprompt::core::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
    /// Empty config home so a user's config file never leaks into tests
    pub config_home: TempDir,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `gitprompt` command running inside this repository
    pub fn prompt(&self) -> Command {
        let mut cmd = Command::cargo_bin("gitprompt").expect("gitprompt binary is built");
        cmd.current_dir(&self.path)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write `config.json` where gitprompt looks for it on Linux
    pub fn write_config(&self, json: &str) -> Result<()> {
        let dir = self.config_home.path().join("gitprompt");
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("config.json"), json)?;
        Ok(())
    }
}

/// Run git inside `repo_path`, ignoring its exit status like the fixtures expect
pub fn git(repo_path: &Path, args: &[&str]) -> Result<()> {
    std::process::Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()?;
    Ok(())
}

/// Sets up a fresh git repository on branch `main`
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let repo_path = temp_dir.path().to_path_buf();

    git(&repo_path, &["init"])?;
    git(&repo_path, &["symbolic-ref", "HEAD", "refs/heads/main"])?;

    // Set git config to avoid prompts during tests
    git(&repo_path, &["config", "user.name", "Test User"])?;
    git(&repo_path, &["config", "user.email", "test@example.com"])?;
    git(&repo_path, &["config", "commit.gpgsign", "false"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
        config_home: TempDir::new()?,
    })
}

/// Sets up a git repository with an initial commit containing "initial.txt"
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git_add(&repo.path, "initial.txt")?;
    git_commit(&repo.path, "Initial commit")?;

    Ok(repo)
}

pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    fs::write(repo_path.join(filename), content)?;
    Ok(())
}

pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    git(repo_path, &["add", filename])
}

pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    git(repo_path, &["commit", "-m", message])
}
