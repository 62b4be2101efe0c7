/// User settings
///
/// Settings live in an optional JSON file in the user's config directory:
/// - Linux: ~/.config/grade-tracker/settings.json
/// - macOS: ~/Library/Application Support/grade-tracker/settings.json
/// - Windows: %APPDATA%\grade-tracker\settings.json
///
/// Every field is optional. A missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::portrait::ThumbnailSizes;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Colour scheme for the window
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Edge of the thumbnail shown beside the upload button
    pub preview_size: u32,
    /// Edge of the thumbnail shown in the summary report
    pub display_size: u32,
    pub window_width: f32,
    pub window_height: f32,
    pub theme: ThemeChoice,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preview_size: 48,
            display_size: 96,
            window_width: 500.0,
            window_height: 450.0,
            theme: ThemeChoice::Light,
        }
    }
}

impl Settings {
    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Read settings from a specific file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load settings from the default location.
    ///
    /// Never fails: a missing file silently gives defaults, a broken one
    /// is logged and ignored.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            tracing::debug!("no config directory, using default settings");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring settings file");
                Self::default()
            }
        }
    }

    /// Where the settings file is expected
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("grade-tracker");
        path.push("settings.json");
        Some(path)
    }

    pub fn thumbnail_sizes(&self) -> ThumbnailSizes {
        ThumbnailSizes {
            preview: self.preview_size,
            display: self.display_size,
        }
    }

    pub fn window_size(&self) -> iced::Size {
        iced::Size::new(self.window_width, self.window_height)
    }

    pub fn theme(&self) -> iced::Theme {
        match self.theme {
            ThemeChoice::Light => iced::Theme::Light,
            ThemeChoice::Dark => iced::Theme::Dark,
        }
    }

    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.preview_size = self.preview_size.max(1);
        self.display_size = self.display_size.max(1);
        if !(self.window_width.is_finite() && self.window_width > 0.0) {
            self.window_width = defaults.window_width;
        }
        if !(self.window_height.is_finite() && self.window_height > 0.0) {
            self.window_height = defaults.window_height;
        }
        self
    }
}
