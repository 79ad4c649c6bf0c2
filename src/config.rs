/// API configuration
///
/// The base URL comes from an optional JSON file in the user's config
/// directory and can be overridden by the `HOTEL_API_BASE_URL` environment
/// variable:
/// - Linux: ~/.config/hotel-form/config.json
/// - macOS: ~/Library/Application Support/hotel-form/config.json
/// - Windows: %APPDATA%\hotel-form\config.json

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::ConfigError;

/// Environment variable that overrides the configured base URL
pub const BASE_URL_ENV: &str = "HOTEL_API_BASE_URL";

/// Resource path appended to the base URL
pub const HOTEL_RESOURCE: &str = "hotel";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Base address of the hotel API, e.g. `https://api.example.com/v1`
    #[serde(default)]
    pub api_base_url: Option<String>,
}

impl Config {
    /// Load the config file (if any) and apply environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::config_path() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env(std::env::var(BASE_URL_ENV).ok());
        Ok(config)
    }

    /// Read a config file. A missing file yields the default config.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ConfigError::ReadFile {
                    path: path.to_path_buf(),
                    source: Arc::new(e),
                })
            }
        };

        serde_json::from_str(&raw).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: Arc::new(e),
        })
    }

    /// Override the base URL with a non-empty environment value
    pub fn apply_env(&mut self, value: Option<String>) {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            self.api_base_url = Some(url);
        }
    }

    /// Validated base URL without a trailing slash
    pub fn base_url(&self) -> Result<String, ConfigError> {
        let raw = self
            .api_base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;

        let parsed = reqwest::Url::parse(raw).map_err(|e| ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: raw.to_string(),
                reason: format!("unsupported scheme {:?}", parsed.scheme()),
            });
        }

        Ok(raw.trim_end_matches('/').to_string())
    }

    /// Full URL of the hotel creation endpoint
    pub fn endpoint(&self) -> Result<String, ConfigError> {
        Ok(format!("{}/{}", self.base_url()?, HOTEL_RESOURCE))
    }

    /// Where the config file lives
    fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("hotel-form");
        path.push("config.json");
        Some(path)
    }
}
