//! Type-safe change-letter enumeration.
//!
//! This module defines [`GitStatus`], the typed form of one side of a porcelain
//! `XY` status code. Only the five letters that feed the change counters are
//! represented; `.` and every other letter map to `None`.
//!
//! # Public API
//! - [`GitStatus`]: Change type for one side (staged or unstaged) of an entry

use serde::{Deserialize, Serialize};
use std::fmt;

/// Change type carried by one letter of an `XY` status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GitStatus {
    /// Modified file (M)
    Modified,
    /// Added/new file (A)
    Added,
    /// Deleted file (D)
    Deleted,
    /// Renamed file (R)
    Renamed,
    /// Copied file (C)
    Copied,
}

impl GitStatus {
    /// Convert a single status letter, `None` for `.` and unknown letters
    pub fn from_code(code: char) -> Option<GitStatus> {
        match code {
            'M' => Some(GitStatus::Modified),
            'A' => Some(GitStatus::Added),
            'D' => Some(GitStatus::Deleted),
            'R' => Some(GitStatus::Renamed),
            'C' => Some(GitStatus::Copied),
            _ => None,
        }
    }

    /// Split an `XY` code into its staged and unstaged halves
    pub fn from_xy(xy: &str) -> (Option<GitStatus>, Option<GitStatus>) {
        let mut codes = xy.chars();
        let staged = codes.next().and_then(GitStatus::from_code);
        let unstaged = codes.next().and_then(GitStatus::from_code);
        (staged, unstaged)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GitStatus::Modified => "M",
            GitStatus::Added => "A",
            GitStatus::Deleted => "D",
            GitStatus::Renamed => "R",
            GitStatus::Copied => "C",
        }
    }
}

impl fmt::Display for GitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
