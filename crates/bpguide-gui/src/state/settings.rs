//! Viewer settings.
//!
//! Read from `settings.toml` in the platform config directory at startup.
//! The viewer never writes them back.

use std::path::{Path, PathBuf};

use bpguide_model::SIDEBAR_BREAKPOINT;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::theme::ThemeMode;

/// Errors reading the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Viewer settings. Missing sections and keys take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub display: DisplaySettings,
    pub window: WindowSettings,
}

impl Settings {
    /// Load settings from the default path, falling back to defaults.
    pub fn load() -> Self {
        let path = Self::config_path();
        match Self::try_load_from(&path) {
            Ok(settings) => settings,
            Err(SettingsError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                debug!(path = %path.display(), "no settings file, using defaults");
                Self::default()
            }
            Err(error) => {
                warn!(%error, "ignoring unreadable settings");
                Self::default()
            }
        }
    }

    /// Load settings from a specific path.
    pub fn try_load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "UnifierBpGuide", "UnifierBpGuide")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

// =============================================================================
// SECTIONS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub theme_mode: ThemeMode,
    /// Window width (px) below which the sidebar collapses.
    pub sidebar_breakpoint: f32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::Light,
            sidebar_breakpoint: SIDEBAR_BREAKPOINT,
        }
    }
}

/// Initial window size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [display]
            theme_mode = "dark"
            "#,
        )
        .expect("parse settings");
        assert_eq!(settings.display.theme_mode, ThemeMode::Dark);
        assert_eq!(settings.display.sidebar_breakpoint, 1024.0);
        assert_eq!(settings.window, WindowSettings::default());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let error = Settings::try_load_from(&dir.path().join("settings.toml"))
            .expect_err("no file");
        assert!(matches!(error, SettingsError::Io { .. }));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[display]\ntheme_mode = 3\n").expect("write settings");
        let error = Settings::try_load_from(&path).expect_err("bad type");
        assert!(matches!(error, SettingsError::Parse { .. }));
        assert!(error.to_string().contains("settings.toml"));
    }
}
