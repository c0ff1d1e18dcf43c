//! Prompt rendering: fixed layout, format strings and raw lines.
//!
//! # Public API
//! - [`PromptRenderer`]: Renders a [`RepositoryState`] under a [`RenderConfig`]
//! - [`RenderMode`]: Which of the three outputs to produce
//!
//! # Format Directives
//! | directive | emits                                                  |
//! |-----------|--------------------------------------------------------|
//! | `%g`      | branch glyph                                           |
//! | `%n`      | `git`                                                  |
//! | `%b`      | branch name                                            |
//! | `%r`      | remote name                                            |
//! | `%c`      | abbreviated commit id                                  |
//! | `%a`      | ahead/behind arrows, when either is non-zero           |
//! | `%u`      | untracked glyph, when untracked files exist            |
//! | `%m`      | modified glyph + unstaged change count, when non-zero  |
//! | `%s`      | modified glyph + staged change count, when non-zero    |
//! | `%d`      | `+I/-D` line stats, when non-zero                      |
//! | `%t`      | stash glyph, when a stash exists                       |
//! | `%%`      | a literal `%`                                          |
//!
//! Any other character after `%` is emitted as itself. Format output is
//! trimmed and whitespace runs collapse to one space, so empty directives
//! leave no gaps.

use crate::core::{
    colors::{paint, Paint},
    config::RenderConfig,
    state::{Health, RepositoryState},
};
use std::fmt::Write;

/// Name emitted by `%n`
pub const VCS_NAME: &str = "git";

/// Third line of raw output, kept for positional compatibility
const RAW_PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderMode {
    /// Glyph, branch@commit, arrows, status cluster, clean/dirty glyph
    Fixed,
    /// User directive string
    Format(String),
    /// One field per line for scripts
    Raw,
}

/// Directive scanner state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Copy,
    AfterPercent,
}

pub struct PromptRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> PromptRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, mode: &RenderMode, state: &RepositoryState) -> String {
        match mode {
            RenderMode::Fixed => self.render_fixed(state),
            RenderMode::Format(format) => self.render_format(format, state),
            RenderMode::Raw => render_raw(state),
        }
    }

    fn paint(&self, text: &str, style: Paint) -> String {
        paint(text, style, self.config.color)
    }

    pub fn render_fixed(&self, state: &RepositoryState) -> String {
        let glyphs = &self.config.glyphs;
        let health = state.health();

        let mut arrows = String::new();
        if state.ahead > 0 {
            let text = format!(" {}{} ", glyphs.ahead, state.ahead);
            arrows.push_str(&self.paint(&text, Paint::Ahead));
        }
        if state.behind > 0 {
            let text = format!(" {}{} ", glyphs.behind, state.behind);
            arrows.push_str(&self.paint(&text, Paint::Behind));
        }

        let mut cluster = String::new();
        for (present, glyph, style) in [
            (state.untracked > 0, &glyphs.untracked, Paint::Untracked),
            (state.has_unmerged(), &glyphs.unmerged, Paint::Unmerged),
            (state.unstaged.has_changed(), &glyphs.modified, Paint::Modified),
        ] {
            if present {
                cluster.push_str(&self.paint(glyph, style));
            } else {
                cluster.push(' ');
            }
        }

        let status = if state.is_dirty() {
            &glyphs.dirty
        } else {
            &glyphs.clean
        };

        format!(
            "{} {}@{} {} {} {}",
            glyphs.branch,
            self.paint(&state.branch, Paint::Health(health)),
            self.paint(state.short_commit(), Paint::Commit(health)),
            arrows,
            cluster,
            self.paint(status, Paint::Health(health)),
        )
    }

    pub fn render_format(&self, format: &str, state: &RepositoryState) -> String {
        let mut output = String::with_capacity(format.len() + 64);
        let mut scan = Scan::Copy;

        for ch in format.chars() {
            scan = match (scan, ch) {
                (Scan::Copy, '%') => Scan::AfterPercent,
                (Scan::Copy, _) => {
                    output.push(ch);
                    Scan::Copy
                }
                (Scan::AfterPercent, directive) => {
                    self.push_directive(&mut output, directive, state);
                    Scan::Copy
                }
            };
        }

        // A lone trailing '%' has no directive to read
        if scan == Scan::AfterPercent {
            output.push('%');
        }

        collapse_whitespace(&output)
    }

    fn push_directive(&self, output: &mut String, directive: char, state: &RepositoryState) {
        let glyphs = &self.config.glyphs;
        let health = state.health();

        match directive {
            'g' => output.push_str(&glyphs.branch),
            'n' => output.push_str(VCS_NAME),
            'b' => output.push_str(&self.paint(&state.branch, Paint::Health(health))),
            'r' => output.push_str(&state.remote),
            'c' => output.push_str(&self.paint(state.short_commit(), Paint::Commit(health))),
            'a' => {
                if state.ahead > 0 {
                    let text = format!("{}{}", glyphs.ahead, state.ahead);
                    output.push_str(&self.paint(&text, Paint::Ahead));
                }
                if state.behind > 0 {
                    let text = format!("{}{}", glyphs.behind, state.behind);
                    output.push_str(&self.paint(&text, Paint::Behind));
                }
            }
            'u' => {
                if state.untracked > 0 {
                    output.push_str(&self.paint(&glyphs.untracked, Paint::Untracked));
                }
            }
            'm' => {
                if state.unstaged.has_changed() {
                    let text = format!("{}{}", glyphs.modified, state.unstaged.change_count());
                    output.push_str(&self.paint(&text, Paint::Health(Health::Dirty)));
                }
            }
            's' => {
                if state.staged.has_changed() {
                    let text = format!("{}{}", glyphs.modified, state.staged.change_count());
                    output.push_str(&self.paint(&text, Paint::Health(Health::StagedOnly)));
                }
            }
            'd' => self.push_diff_stats(output, state),
            't' => {
                if state.stashed {
                    output.push_str(&self.paint(&glyphs.stash, Paint::Stash));
                }
            }
            other => output.push(other),
        }
    }

    fn push_diff_stats(&self, output: &mut String, state: &RepositoryState) {
        let insertions = (state.insertions > 0).then(|| format!("+{}", state.insertions));
        let deletions = (state.deletions > 0).then(|| format!("-{}", state.deletions));

        match (insertions, deletions) {
            (Some(ins), Some(del)) => {
                output.push_str(&self.paint(&ins, Paint::Insertions));
                output.push('/');
                output.push_str(&self.paint(&del, Paint::Deletions));
            }
            (Some(ins), None) => output.push_str(&self.paint(&ins, Paint::Insertions)),
            (None, Some(del)) => output.push_str(&self.paint(&del, Paint::Deletions)),
            (None, None) => {}
        }
    }
}

/// One field per line: branch, remote, placeholder, upstream, staged
/// modifications, conflicts (always 0), unstaged modifications, untracked,
/// stashes (always 0),
/// dirty flag, insertions, deletions
pub fn render_raw(state: &RepositoryState) -> String {
    let mut output = String::with_capacity(128);
    let _ = writeln!(output, "{}", state.branch);
    let _ = writeln!(output, "{}", state.remote);
    let _ = writeln!(output, "{RAW_PLACEHOLDER}");
    let _ = writeln!(output, "{}", state.upstream);
    let _ = writeln!(output, "{}", state.staged.modified);
    let _ = writeln!(output, "0");
    let _ = writeln!(output, "{}", state.unstaged.modified);
    let _ = writeln!(output, "{}", state.untracked);
    let _ = writeln!(output, "0");
    let _ = writeln!(output, "{}", u8::from(state.is_dirty()));
    let _ = writeln!(output, "{}", state.insertions);
    let _ = writeln!(output, "{}", state.deletions);
    output
}

/// Trim and squeeze whitespace runs to a single space
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
