/// Application settings
///
/// Settings are read once at startup from a JSON file in the user's
/// config directory:
/// - Linux: ~/.config/file-previewer/settings.json
/// - macOS: ~/Library/Application Support/file-previewer/settings.json
/// - Windows: %APPDATA%\file-previewer\settings.json
///
/// `FILE_PREVIEWER_CONFIG` overrides the path. Every field is optional.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::ingest::batch::CompletionPolicy;

/// Environment variable that points at an alternative settings file
pub const CONFIG_ENV: &str = "FILE_PREVIEWER_CONFIG";

/// Longest edge of a decoded image preview, in pixels
const DEFAULT_MAX_DIMENSION: u32 = 1280;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub ingest: IngestSettings,
    pub preview: PreviewSettings,
    pub log: LogSettings,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct IngestSettings {
    /// Denominator used to decide when a batch is complete
    pub completion_policy: CompletionPolicy,
    /// Also reject `.JPG`, `.Jpg`, ...
    pub case_insensitive_suffix: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PreviewSettings {
    pub max_dimension: u32,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LogSettings {
    /// `tracing` filter directive, overridden by `RUST_LOG`
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Where the settings file is expected to live
    pub fn path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }

        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("file-previewer");
        path.push("settings.json");
        Some(path)
    }

    /// Load settings from `path`; a missing file means defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
