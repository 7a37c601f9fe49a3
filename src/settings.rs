use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::common::constants::{
    SELECTOR_ISO_DATE_WEEKDAY, SETTINGS_DIR_NAME, SETTINGS_ENV_VAR, SETTINGS_FILE_NAME,
};
use crate::formatter::Selector;

fn default_format() -> String {
    SELECTOR_ISO_DATE_WEEKDAY.to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_format")]
    pub default_format: String,
    #[serde(default)]
    pub strict: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            strict: false,
        }
    }
}

impl Settings {
    pub fn load(settings_file: &str) -> Result<Self> {
        let path = Path::new(settings_file);
        if !path.exists() {
            return Err(anyhow::anyhow!(
                "settings.json not found at '{}'",
                settings_file
            ));
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", settings_file))?;

        let settings: Settings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file: {}", settings_file))?;

        info!("Settings loaded from '{}'.", settings_file);
        Ok(settings)
    }

    /// Pick the settings source: an explicit path, then the environment
    /// variable, then the per-user config file if it exists, then defaults.
    pub fn resolve(explicit: Option<&str>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Ok(path) = std::env::var(SETTINGS_ENV_VAR) {
            if !path.is_empty() {
                info!("Using settings from {}: {}", SETTINGS_ENV_VAR, path);
                return Self::load(&path);
            }
        }

        if let Some(path) = default_settings_path() {
            if path.is_file() {
                return Self::load(&path.to_string_lossy());
            }
            debug!("No settings file at {:?}", path);
        }

        debug!("Using built-in settings");
        Ok(Self::default())
    }

    /// The selector to format with: `requested` if given, else
    /// `default_format`. Unknown selectors are an error when either
    /// `strict` flag is set, otherwise they pass through for the ISO fallback.
    pub fn resolve_format(&self, requested: Option<&str>, strict: bool) -> Result<String> {
        let format = requested.unwrap_or(self.default_format.as_str()).to_string();

        if strict || self.strict {
            format.parse::<Selector>()?;
        } else if Selector::from_literal(&format).is_none() {
            warn!(
                "Format '{}' is not recognized; printing ISO timestamps instead",
                format
            );
        }

        info!("Using format '{}'", format);
        Ok(format)
    }
}

/// `<config dir>/zh-datefmt/settings.json`, when the platform has a config dir
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}
