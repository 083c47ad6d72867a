use crate::api::DEFAULT_HOST;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_enable_api_calls")]
    pub enable_api_calls: bool,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_enable_api_calls() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            host: default_host(),
            enable_api_calls: default_enable_api_calls(),
        }
    }
}

impl Settings {
    /// Picks the device host: an explicit CLI flag wins over the settings
    /// file, which wins over the built-in default.
    pub fn resolve_host(&self, flag: Option<String>) -> String {
        flag.unwrap_or_else(|| self.host.clone())
    }
}

/// Loads settings from a JSON file. The file is optional; when it does not
/// exist the defaults apply. A file that exists but does not parse is an
/// error, so a typo never silently falls back to the public host.
pub fn load_settings(file_path: &str) -> Result<Settings, SettingsError> {
    if !Path::new(file_path).exists() {
        return Ok(Settings::default());
    }

    let contents = std::fs::read_to_string(file_path)?;
    let settings = serde_json::from_str(&contents)?;
    Ok(settings)
}
