//! Predefined repository scenarios
//!
//! Each function builds a repository in one specific state so the prompt
//! tests can focus on what gets printed.

#![allow(dead_code)]

use super::repository::*;
use gitprompt::core::error::Result;

/// Committed "initial.txt" changed in the working tree: 1 insertion, 1 deletion
pub fn create_modified_repo() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;
    create_file(&repo.path, "initial.txt", "modified content\n")?;
    Ok(repo)
}

/// A new file staged but not committed
pub fn create_staged_repo() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;
    create_file(&repo.path, "staged.txt", "staged content\n")?;
    git_add(&repo.path, "staged.txt")?;
    Ok(repo)
}

/// HEAD detached on the commit tagged `v1.0.0`
pub fn create_detached_tag_repo() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;
    git(&repo.path, &["tag", "v1.0.0"])?;
    git(&repo.path, &["checkout", "--detach"])?;
    Ok(repo)
}

/// A clean working tree with one stash entry
pub fn create_stashed_repo() -> Result<TestRepo> {
    let repo = create_modified_repo()?;
    git(&repo.path, &["stash"])?;
    Ok(repo)
}

/// Modified, staged and untracked files at once
pub fn create_mixed_repo() -> Result<TestRepo> {
    let repo = create_staged_repo()?;
    create_file(&repo.path, "initial.txt", "modified content\nsecond line\n")?;
    create_file(&repo.path, "untracked.txt", "untracked\n")?;
    Ok(repo)
}

/// A clone of a repository, one commit ahead of and one behind `origin/main`
pub fn create_diverged_clone() -> Result<TestRepo> {
    let origin = setup_test_repo_with_initial_commit()?;
    git(&origin.path, &["clone", "--quiet", ".", "clone"])?;
    let clone_path = origin.path.join("clone");

    git(&clone_path, &["config", "user.name", "Test User"])?;
    git(&clone_path, &["config", "user.email", "test@example.com"])?;
    git(&clone_path, &["config", "commit.gpgsign", "false"])?;
    create_file(&clone_path, "local.txt", "local\n")?;
    git_add(&clone_path, "local.txt")?;
    git_commit(&clone_path, "Local commit")?;

    create_file(&origin.path, "upstream.txt", "upstream\n")?;
    git_add(&origin.path, "upstream.txt")?;
    git_commit(&origin.path, "Upstream commit")?;
    git(&clone_path, &["fetch", "--quiet"])?;

    Ok(TestRepo {
        temp_dir: origin.temp_dir,
        path: clone_path,
        config_home: origin.config_home,
    })
}
