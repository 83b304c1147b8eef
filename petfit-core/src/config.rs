//! Configuration management
//!
//! Settings live in `settings.json` in the app directory:
//! ```json
//! {
//!   "api": { "baseUrl": "http://localhost:8000", "timeoutSecs": 30 }
//! }
//! ```
//! Keys the client does not manage are preserved when saving.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::adapters::http::{parse_base_url, DEFAULT_TIMEOUT_SECS};

/// API used when nothing is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Environment variable that overrides the configured API base URL
pub const API_BASE_URL_ENV: &str = "PETFIT_API_BASE_URL";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    api: ApiSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timeout_secs: Option<u64>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL from settings.json (or the default)
    pub api_base_url: String,
    pub timeout_secs: u64,
    /// Base URL from the environment; wins over the file but is never saved
    env_base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            env_base_url: None,
        }
    }
}

impl Config {
    /// Load config from the app directory
    ///
    /// The API base URL can be overridden with `PETFIT_API_BASE_URL`.
    pub fn load(app_dir: &Path) -> Result<Self> {
        let env_base_url = std::env::var(API_BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty());
        Self::load_with_override(app_dir, env_base_url)
    }

    /// Load config, applying an explicit base URL override
    pub fn load_with_override(app_dir: &Path, base_url_override: Option<String>) -> Result<Self> {
        let settings_path = app_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid settings file: {:?}", settings_path))?
        } else {
            SettingsFile::default()
        };

        let config = Self {
            api_base_url: raw
                .api
                .base_url
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            timeout_secs: raw.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            env_base_url: base_url_override,
        };
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        parse_base_url(&self.api_base_url).context("Invalid api.baseUrl in settings")?;
        if let Some(url) = &self.env_base_url {
            parse_base_url(url).with_context(|| format!("Invalid {}", API_BASE_URL_ENV))?;
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("api.timeoutSecs must be at least 1");
        }
        Ok(())
    }

    /// Base URL in effect
    pub fn base_url(&self) -> &str {
        self.env_base_url.as_deref().unwrap_or(&self.api_base_url)
    }

    /// Whether the environment overrides the saved base URL
    pub fn base_url_overridden(&self) -> bool {
        self.env_base_url.is_some()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Change the saved base URL
    pub fn set_api_base_url(&mut self, base_url: &str) -> Result<()> {
        let parsed = parse_base_url(base_url)?;
        self.api_base_url = parsed.as_str().trim_end_matches('/').to_string();
        Ok(())
    }

    /// Save config to the app directory
    /// Preserves other settings that the client doesn't manage
    pub fn save(&self, app_dir: &Path) -> Result<()> {
        let settings_path = app_dir.join("settings.json");

        // Load existing settings to preserve fields we don't manage
        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        // Update only the fields we manage
        settings.api.base_url = Some(self.api_base_url.clone());
        settings.api.timeout_secs = Some(self.timeout_secs);

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}
