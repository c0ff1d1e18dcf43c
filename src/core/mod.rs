//! Core functionality for the gitprompt tool.
//!
//! This module provides the status parser, the repository state model, the
//! prompt renderer and the git collaborators they are fed by.

pub mod colors;
pub mod config;
pub mod dirs;
pub mod error;
pub mod git;
pub mod git_status;
pub mod numstat;
pub mod output;
pub mod parser;
pub mod render;
pub mod state;

// === Error handling ===
pub use error::{GitPromptError, LineOutcome, Result};

// === Git collaborators ===
pub use git::GitRepo;

// === Git status types ===
// Typed form of one letter of a porcelain XY code
pub use git_status::GitStatus;

// === Repository state ===
pub use state::{ChangeArea, Health, RepositoryState, Resolution};

// === Parsing ===
// Porcelain v2 status text and `git diff --numstat` summaries
pub use numstat::parse_numstat;
pub use parser::{NoTags, StatusParser, TagResolver};

// === Rendering ===
pub use colors::{get_paint_style, strip_ansi_codes, Paint};
pub use config::{Glyphs, PromptConfig, RenderConfig};
pub use render::{PromptRenderer, RenderMode};

// === Output formatting ===
pub use output::print_error;
