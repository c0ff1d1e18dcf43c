//! Unified color system for prompt segments.
//!
//! Every colored piece of the prompt goes through [`get_paint_style`] so the
//! fixed layout and the format-string directives agree on colors.
//!
//! # Color Scheme
//! - **Branch / commit / clean-dirty glyph**: green when clean, yellow when
//!   only staged changes exist, red when unstaged changes exist
//! - **Ahead**: dimmed black on yellow; **Behind**: dimmed white on red
//! - **Untracked**: dimmed; **Unmerged**: cyan; **Modified**: blue
//! - **Stash**: magenta; **Insertions** green, **Deletions** red

use crate::core::state::Health;
use colored::*;

/// What a piece of prompt text represents, for coloring purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// Text colored by overall repository health
    Health(Health),
    /// Abbreviated commit id, italic on top of the health color
    Commit(Health),
    Ahead,
    Behind,
    Untracked,
    Unmerged,
    Modified,
    Stash,
    Insertions,
    Deletions,
}

/// Single function to apply color styling based on what the text represents
pub fn get_paint_style(paint: Paint) -> Box<dyn Fn(&str) -> ColoredString> {
    match paint {
        Paint::Health(health) => health_style(health),
        Paint::Commit(health) => {
            let color = health_style(health);
            Box::new(move |text: &str| color(text).italic())
        }
        Paint::Ahead => Box::new(|text: &str| text.black().on_yellow().dimmed()),
        Paint::Behind => Box::new(|text: &str| text.white().on_red().dimmed()),
        Paint::Untracked => Box::new(|text: &str| text.dimmed()),
        Paint::Unmerged => Box::new(|text: &str| text.cyan()),
        Paint::Modified => Box::new(|text: &str| text.blue()),
        Paint::Stash => Box::new(|text: &str| text.magenta()),
        Paint::Insertions => Box::new(|text: &str| text.green()),
        Paint::Deletions => Box::new(|text: &str| text.red()),
    }
}

fn health_style(health: Health) -> Box<dyn Fn(&str) -> ColoredString> {
    match health {
        Health::Clean => Box::new(|text: &str| text.green()),
        Health::StagedOnly => Box::new(|text: &str| text.yellow()),
        Health::Dirty => Box::new(|text: &str| text.red()),
    }
}

/// Paint `text`, or return it untouched when color is disabled
pub fn paint(text: &str, paint: Paint, color: bool) -> String {
    if !color || text.is_empty() {
        return text.to_string();
    }
    get_paint_style(paint)(text).to_string()
}

/// Strip ANSI color codes
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next(); // consume '['
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}
