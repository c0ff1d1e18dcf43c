//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitPromptError`] which covers every failure mode of a
//! prompt run. It uses `thiserror` for ergonomic error definitions and includes
//! constructors for the errors that carry context.
//!
//! # Public API
//! - [`GitPromptError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitPromptError>`
//! - [`LineOutcome`]: Non-fatal result of feeding one line to a parser
//!
//! # Error Categories
//! - **Repository**: not inside a repository, git2 library errors
//! - **Collaborators**: failing `git` subprocesses, non UTF-8 output, I/O
//! - **Parsing**: malformed ahead/behind counts, malformed diff summaries
//! - **Configuration**: unreadable or invalid config file

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for gitprompt
#[derive(Error, Debug)]
pub enum GitPromptError {
    // Repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    // Collaborator errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("`git {command}` failed: {stderr}")]
    GitCommandFailed { command: String, stderr: String },

    #[error("git produced output that is not valid UTF-8")]
    InvalidUtf8Output,

    // Parse errors
    #[error("Invalid ahead/behind count: '{token}'")]
    InvalidAheadBehind { token: String },

    #[error("Invalid {field} count in diff summary line: '{line}'")]
    InvalidNumstat { line: String, field: &'static str },

    // Configuration errors
    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using GitPromptError
pub type Result<T> = std::result::Result<T, GitPromptError>;

/// What happened to a single line of collaborator output.
///
/// Fatal problems travel as `Err(GitPromptError)`; everything that is merely
/// unrecognised comes back as [`LineOutcome::Ignored`] so callers can log it
/// without mistaking it for an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line changed the repository state.
    Applied,
    /// The line was blank, unknown or otherwise skipped.
    Ignored,
}

impl GitPromptError {
    /// Create a failed git subprocess error
    pub fn git_command_failed(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::GitCommandFailed {
            command: command.into(),
            stderr: stderr.into(),
        }
    }

    /// Create an invalid ahead/behind error for the offending token
    pub fn invalid_ahead_behind(token: impl Into<String>) -> Self {
        Self::InvalidAheadBehind {
            token: token.into(),
        }
    }

    /// Create an invalid numstat error naming the bad field
    pub fn invalid_numstat(line: impl Into<String>, field: &'static str) -> Self {
        Self::InvalidNumstat {
            line: line.into(),
            field,
        }
    }

    /// Create a config parse error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GitPromptError::NotInGitRepo;
        assert_eq!(err.to_string(), "Not in a git repository");
    }

    #[test]
    fn test_invalid_ahead_behind_error() {
        let err = GitPromptError::invalid_ahead_behind("+x");
        assert_eq!(err.to_string(), "Invalid ahead/behind count: '+x'");
    }

    #[test]
    fn test_invalid_numstat_error() {
        let err = GitPromptError::invalid_numstat("x\t2\tfile", "insertion");
        assert!(err.to_string().contains("insertion"));
        assert!(err.to_string().contains("x\t2\tfile"));
    }

    #[test]
    fn test_git_command_failed() {
        let err = GitPromptError::git_command_failed("status", "fatal: bad object");
        assert_eq!(err.to_string(), "`git status` failed: fatal: bad object");
    }

    #[test]
    fn test_config_parse_failed() {
        let path = PathBuf::from("/test/config.json");
        let json_err = serde_json::from_str::<serde_json::Value>("{ invalid json").unwrap_err();
        let err = GitPromptError::config_parse_failed(&path, json_err);
        assert!(err.to_string().contains("/test/config.json"));
        assert!(err.to_string().contains("Failed to parse"));
    }
}
