//! Parser for `git status --porcelain=v2 --branch` output.
//!
//! The format is treated as a best-effort, forward-compatible wire format:
//! unknown line tags, unknown branch keys and missing values are skipped, and
//! only a malformed `branch.ab` count aborts the parse.
//!
//! # Public API
//! - [`StatusLine`]: One tokenized line, dispatched on its leading tag
//! - [`LineTag`]: The recognised line types
//! - [`StatusParser`]: Turns the full status text into a [`RepositoryState`]
//! - [`TagResolver`]: Collaborator used to name a detached HEAD
//!
//! # Line Types
//! - `# branch.oid|branch.head|branch.upstream|branch.ab ...`: branch header
//! - `1 XY ...`: ordinary changed entry
//! - `2 XY ...`: renamed or copied entry, counted like `1`
//! - `u ...`: unmerged entry
//! - `? path`: untracked entry

use crate::core::{
    error::{GitPromptError, LineOutcome, Result},
    git_status::GitStatus,
    state::{RepositoryState, DETACHED_HEAD},
};
use std::path::PathBuf;
use std::str::SplitWhitespace;

/// Leading token of a porcelain v2 line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTag<'a> {
    Branch,
    Changed,
    RenamedOrCopied,
    Unmerged,
    Untracked,
    Unknown(&'a str),
}

impl<'a> From<&'a str> for LineTag<'a> {
    fn from(token: &'a str) -> Self {
        match token {
            "#" => LineTag::Branch,
            "1" => LineTag::Changed,
            "2" => LineTag::RenamedOrCopied,
            "u" => LineTag::Unmerged,
            "?" => LineTag::Untracked,
            other => LineTag::Unknown(other),
        }
    }
}

/// A whitespace-tokenized status line.
pub struct StatusLine<'a> {
    pub tag: LineTag<'a>,
    tokens: SplitWhitespace<'a>,
}

impl<'a> StatusLine<'a> {
    /// Tokenize a line, `None` if it holds no tokens at all
    pub fn tokenize(line: &'a str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let tag = LineTag::from(tokens.next()?);
        Some(Self { tag, tokens })
    }

    /// Next token, or an empty string once the line is exhausted
    pub fn consume_next(&mut self) -> &'a str {
        self.tokens.next().unwrap_or("")
    }
}

impl<'a> Iterator for StatusLine<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.tokens.next()
    }
}

/// Looks up a tag name for a detached HEAD.
pub trait TagResolver {
    /// Tag pointing exactly at HEAD, `None` if there is none or lookup failed
    fn exact_tag(&self) -> Option<String>;
}

/// Resolver that never finds a tag
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTags;

impl TagResolver for NoTags {
    fn exact_tag(&self) -> Option<String> {
        None
    }
}

/// Builds a [`RepositoryState`] from porcelain v2 status text.
pub struct StatusParser<'r> {
    work_dir: PathBuf,
    tags: &'r dyn TagResolver,
    tag_lookup: bool,
}

impl Default for StatusParser<'static> {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::new(),
            tags: &NoTags,
            tag_lookup: false,
        }
    }
}

impl<'r> StatusParser<'r> {
    pub fn new(work_dir: impl Into<PathBuf>, tags: &'r dyn TagResolver) -> Self {
        Self {
            work_dir: work_dir.into(),
            tags,
            tag_lookup: true,
        }
    }

    /// Enable or suppress replacing a detached HEAD with its tag name
    pub fn tag_lookup(mut self, enabled: bool) -> Self {
        self.tag_lookup = enabled;
        self
    }

    /// Parse the whole status report
    pub fn parse(&self, status: &str) -> Result<RepositoryState> {
        let mut state = RepositoryState::new(self.work_dir.clone());
        for line in status.lines() {
            if let LineOutcome::Ignored = self.parse_line(&mut state, line)? {
                if !line.trim().is_empty() {
                    log::debug!("Ignoring status line: {line:?}");
                }
            }
        }
        Ok(state)
    }

    /// Apply one line to `state`
    pub fn parse_line(&self, state: &mut RepositoryState, line: &str) -> Result<LineOutcome> {
        let Some(mut line) = StatusLine::tokenize(line) else {
            return Ok(LineOutcome::Ignored);
        };

        match line.tag {
            LineTag::Branch => self.parse_branch_info(state, &mut line),
            LineTag::Changed | LineTag::RenamedOrCopied => Ok(parse_entry(state, &mut line)),
            LineTag::Unmerged => {
                state.unmerged += 1;
                Ok(LineOutcome::Applied)
            }
            LineTag::Untracked => {
                state.untracked += 1;
                Ok(LineOutcome::Applied)
            }
            LineTag::Unknown(_) => Ok(LineOutcome::Ignored),
        }
    }

    fn parse_branch_info(
        &self,
        state: &mut RepositoryState,
        line: &mut StatusLine<'_>,
    ) -> Result<LineOutcome> {
        let mut outcome = LineOutcome::Ignored;

        while let Some(key) = line.next() {
            match key {
                "branch.oid" => state.commit = line.consume_next().to_string(),
                "branch.head" => {
                    state.branch = line.consume_next().to_string();
                    if state.branch == DETACHED_HEAD && self.tag_lookup {
                        if let Some(tag) = self.tags.exact_tag() {
                            log::debug!("Detached HEAD resolved to tag {tag}");
                            state.branch = tag;
                        }
                    }
                }
                "branch.upstream" => {
                    state.upstream = line.consume_next().to_string();
                    // First path segment; a configured remote overrides it later
                    if state.remote.is_empty() {
                        if let Some((remote, _)) = state.upstream.split_once('/') {
                            state.remote = remote.to_string();
                        }
                    }
                }
                "branch.ab" => parse_ahead_behind(state, line)?,
                _ => continue,
            }
            outcome = LineOutcome::Applied;
        }

        Ok(outcome)
    }
}

/// `+<ahead> -<behind>`; every remaining token on the line is read
fn parse_ahead_behind(state: &mut RepositoryState, line: &mut StatusLine<'_>) -> Result<()> {
    for token in line.by_ref() {
        let mut chars = token.chars();
        let sign = chars.next();
        let count: u32 = chars
            .as_str()
            .parse()
            .map_err(|_| GitPromptError::invalid_ahead_behind(token))?;

        match sign {
            Some('+') => state.ahead = count,
            Some('-') => state.behind = count,
            _ => log::debug!("Ignoring ahead/behind token {token:?}"),
        }
    }
    Ok(())
}

/// Only the `XY` code is read; modes, object ids and paths are skipped
fn parse_entry(state: &mut RepositoryState, line: &mut StatusLine<'_>) -> LineOutcome {
    let Some(xy) = line.next() else {
        return LineOutcome::Ignored;
    };

    let (staged, unstaged) = GitStatus::from_xy(xy);
    if let Some(status) = staged {
        state.staged.record(status);
    }
    if let Some(status) = unstaged {
        state.unstaged.record(status);
    }
    LineOutcome::Applied
}
