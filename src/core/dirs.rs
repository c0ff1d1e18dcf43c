use crate::core::error::{GitPromptError, Result};
use std::path::PathBuf;

pub fn get_config_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|_| {
                dirs::home_dir()
                    .map(|home| home.join(".config"))
                    .ok_or(GitPromptError::ConfigDirectoryNotFound)
            })?,
        "macos" => dirs::home_dir()
            .ok_or(GitPromptError::ConfigDirectoryNotFound)?
            .join("Library/Application Support"),
        _ => dirs::config_dir().ok_or(GitPromptError::ConfigDirectoryNotFound)?,
    };

    Ok(base.join("gitprompt"))
}

pub fn get_config_file() -> Result<PathBuf> {
    Ok(get_config_directory()?.join("config.json"))
}
