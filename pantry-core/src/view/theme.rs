//! Light/dark preference, persisted to a small JSON file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeStoreError {
    #[error("Failed to access preferences file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Preferences file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Pick the theme for a fresh session: the stored choice wins, otherwise
    /// follow the operating system.
    pub fn resolve(stored: Option<Theme>, system_prefers_dark: bool) -> Theme {
        stored.unwrap_or(if system_prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        })
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default)]
    theme: Option<Theme>,
}

/// File-backed theme preference.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `PANTRY_PREFERENCES_FILE`, or `~/.pantry/preferences.json`.
    pub fn from_env() -> Self {
        let path = std::env::var("PANTRY_PREFERENCES_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_path());
        Self::new(path)
    }

    /// Get the default preferences path: ~/.pantry/preferences.json
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".pantry").join("preferences.json"))
            .unwrap_or_else(|| PathBuf::from(".pantry/preferences.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored theme, or `None` if nothing has been saved yet.
    pub fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ThemeStoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let prefs: Preferences =
            serde_json::from_str(&content).map_err(|source| ThemeStoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        Ok(prefs.theme)
    }

    pub fn save(&self, theme: Theme) -> Result<(), ThemeStoreError> {
        let io_err = |source| ThemeStoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let prefs = Preferences { theme: Some(theme) };
        let json = serde_json::to_string_pretty(&prefs).map_err(|source| ThemeStoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(io_err)
    }

    /// The theme to use right now.
    pub fn current(&self, system_prefers_dark: bool) -> Result<Theme, ThemeStoreError> {
        Ok(Theme::resolve(self.load()?, system_prefers_dark))
    }

    /// Flip the current theme and persist the result.
    pub fn toggle(&self, system_prefers_dark: bool) -> Result<Theme, ThemeStoreError> {
        let next = self.current(system_prefers_dark)?.toggled();
        self.save(next)?;
        Ok(next)
    }
}
