// src/config/io.rs
use super::types::BiographToml;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Reads and parses a config file that must exist.
///
/// # Errors
/// Returns error if the file doesn't exist or TOML is invalid.
pub fn read_toml(path: &Path) -> Result<BiographToml> {
    if !path.exists() {
        bail!("Config file not found: {}", path.display());
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    parse_toml(&content).with_context(|| format!("Invalid TOML in {}", path.display()))
}

/// Like [`read_toml`], but an absent file is not an error.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn read_toml_if_present(path: &Path) -> Result<Option<BiographToml>> {
    if !path.is_file() {
        return Ok(None);
    }
    read_toml(path).map(Some)
}

/// # Errors
/// Returns error if `content` is not valid TOML for [`BiographToml`].
pub fn parse_toml(content: &str) -> Result<BiographToml> {
    Ok(toml::from_str(content)?)
}

/// Renders a config back to TOML, e.g. to show the effective settings.
///
/// # Errors
/// Returns error if serialization fails.
pub fn to_toml(config: &BiographToml) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize config")
}
