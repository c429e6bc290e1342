//! Configuration management for icondex.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure for icondex.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the icon catalog (`icons.json`).
    pub catalog_path: PathBuf,

    /// Interactive UI settings.
    pub ui: UiConfig,
}

/// Settings for the interactive finder.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Initial theme. `auto` asks the platform once at startup.
    pub theme: ThemePreference,

    /// How long the "copied" marker stays visible.
    pub copy_feedback_ms: u64,

    /// Maximum gap between two Escape presses that clear the query.
    pub escape_chord_ms: u64,
}

/// Startup theme selection. Never written back; toggles are session-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Auto,
    Light,
    Dark,
}

impl FromStr for ThemePreference {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(crate::Error::Config(format!(
                "unknown theme '{other}' (expected auto, light or dark)"
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: crate::paths::default_catalog_path(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemePreference::Auto,
            copy_feedback_ms: 2000,
            escape_chord_ms: 300,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;

        config.catalog_path = expand_tilde(&config.catalog_path);

        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

fn expand_tilde(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(&raw).into_owned())
}
