use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_PHOTO_BASE_URL: &str = "https://source.unsplash.com";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// backend_url = "http://127.0.0.1:5000"
/// photo_base_url = "https://source.unsplash.com"
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the server exposing `POST /get-weather`.
    pub backend_url: Option<String>,

    /// Base URL of the featured-photo service.
    pub photo_base_url: Option<String>,
}

impl Config {
    pub fn backend_url(&self) -> &str {
        self.backend_url.as_deref().unwrap_or(DEFAULT_BACKEND_URL)
    }

    pub fn photo_base_url(&self) -> &str {
        self.photo_base_url.as_deref().unwrap_or(DEFAULT_PHOTO_BASE_URL)
    }

    pub fn set_backend_url(&mut self, url: impl Into<String>) -> Result<()> {
        self.backend_url = Some(validate_url(url.into())?);
        Ok(())
    }

    pub fn set_photo_base_url(&mut self, url: impl Into<String>) -> Result<()> {
        self.photo_base_url = Some(validate_url(url.into())?);
        Ok(())
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-widget", "weather-widget")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

fn validate_url(url: String) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(anyhow!(
            "Invalid URL '{url}'.\n\
             Hint: URLs must start with http:// or https://."
        ));
    }
    Ok(trimmed.to_string())
}
