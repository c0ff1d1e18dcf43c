//! gitprompt - git status for your shell prompt.
//!
//! This library turns `git status --porcelain=v2 --branch` output (plus an
//! optional `git diff --numstat` summary) into a [`RepositoryState`] and renders
//! it as a compact, glyph-decorated prompt segment.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Status and diff-summary parsing
//! - The repository state model
//! - Prompt rendering (fixed layout, format strings, raw lines)
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use crate::core::{
    parse_numstat,
    strip_ansi_codes,
    ChangeArea,
    // Error handling
    GitPromptError,
    // Git collaborators
    GitRepo,
    GitStatus,
    Glyphs,
    Health,
    LineOutcome,
    NoTags,
    PromptConfig,
    // Rendering
    PromptRenderer,
    RenderConfig,
    RenderMode,
    // Repository state
    RepositoryState,
    Result,
    // Parsing
    StatusParser,
    TagResolver,
};
