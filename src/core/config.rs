//! Prompt configuration: optional JSON file plus command-line overrides.
//!
//! The file lives at `<config dir>/gitprompt/config.json` and is never created
//! by gitprompt. Every field is optional; missing fields keep their defaults.
//!
//! ```json
//! { "format": "%g %b %a%m%u", "no_tag": true, "glyphs": { "dirty": "*" } }
//! ```

use crate::core::dirs::get_config_file;
use crate::core::error::{GitPromptError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Glyph table used by every render mode
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Glyphs {
    pub branch: String,
    pub modified: String,
    pub dirty: String,
    pub clean: String,
    pub untracked: String,
    pub unmerged: String,
    pub ahead: String,
    pub behind: String,
    pub stash: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            branch: "\u{e0a0}".to_string(),
            modified: "Δ".to_string(),
            dirty: "✘".to_string(),
            clean: "✔".to_string(),
            untracked: "?".to_string(),
            unmerged: "‼".to_string(),
            ahead: "↑".to_string(),
            behind: "↓".to_string(),
            stash: "⚑".to_string(),
        }
    }
}

/// Settings read from the config file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PromptConfig {
    pub format: Option<String>,
    pub color: bool,
    pub no_tag: bool,
    pub stash: bool,
    pub glyphs: Glyphs,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            no_tag: false,
            stash: false,
            glyphs: Glyphs::default(),
        }
    }
}

/// Immutable settings handed to every render call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub color: bool,
    pub glyphs: Glyphs,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color: true,
            glyphs: Glyphs::default(),
        }
    }
}

impl RenderConfig {
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Default::default()
        }
    }
}

impl PromptConfig {
    /// Load the user config file, falling back to defaults when there is none
    pub fn load() -> Result<Self> {
        match get_config_file() {
            Ok(path) => Self::load_from(&path),
            Err(GitPromptError::ConfigDirectoryNotFound) => {
                log::debug!("No config directory, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)
            .map_err(|e| GitPromptError::config_parse_failed(path, e))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            color: self.color,
            glyphs: self.glyphs.clone(),
        }
    }
}
