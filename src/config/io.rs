// src/config/io.rs
use std::fs;
use std::path::Path;

use super::types::{Config, SeekerToml};
use crate::error::{Result, SeekerError};

pub const CONFIG_FILE: &str = "seeker.toml";

/// Loads `path` into `config`. A missing file leaves the defaults untouched.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_toml_config(config: &mut Config, path: &Path) -> Result<()> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(());
    }
    let content = fs::read_to_string(path).map_err(|source| SeekerError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse_toml(config, &content)
}

/// Applies TOML `content` to `config`.
///
/// # Errors
/// Returns an error on malformed TOML.
pub fn parse_toml(config: &mut Config, content: &str) -> Result<()> {
    let parsed: SeekerToml = toml::from_str(content)?;
    config.search = parsed.search;
    config.recommend = parsed.recommend;
    config.layout = parsed.layout;
    config.viewport = parsed.viewport;
    Ok(())
}

/// Writes the current settings to `path`.
///
/// # Errors
/// Returns error if serialization or the file write fails.
pub fn save_to_file(config: &Config, path: &Path) -> Result<()> {
    let doc = SeekerToml {
        search: config.search.clone(),
        recommend: config.recommend.clone(),
        layout: config.layout.clone(),
        viewport: config.viewport.clone(),
    };
    let content = toml::to_string_pretty(&doc).map_err(|e| SeekerError::Other(e.to_string()))?;
    fs::write(path, content).map_err(|source| SeekerError::Io {
        source,
        path: path.to_path_buf(),
    })
}
