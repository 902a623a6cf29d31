//! Theme preferences
//!
//! The only persisted state in the application. Stored as a small JSON
//! file under the platform config directory; everything else lives in
//! memory and is lost on exit.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;

/// Light or dark presentation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Fallback when no preference is stored. Terminals report no
    /// color-scheme preference, so this checks `CRIC_TUI_THEME` and
    /// otherwise defaults to dark.
    pub fn detect() -> Theme {
        match std::env::var("CRIC_TUI_THEME").as_deref() {
            Ok("light") => Theme::Light,
            Ok("dark") => Theme::Dark,
            _ => Theme::Dark,
        }
    }
}

/// Saved preferences.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Prefs {
    pub theme: Theme,
}

impl Prefs {
    /// Default preferences file location: `<config-dir>/cricconnect/prefs.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cricconnect").join("prefs.json"))
    }

    /// Load preferences from a specific file.
    pub fn load_from(path: &Path) -> Result<Prefs> {
        let content = std::fs::read_to_string(path)?;
        let prefs = serde_json::from_str(&content)?;
        Ok(prefs)
    }

    /// Load preferences from the default location, falling back to the
    /// detected theme when nothing is stored or the file is unreadable.
    pub fn load_or_detect() -> Prefs {
        match Self::default_path() {
            Some(path) => match Self::load_from(&path) {
                Ok(prefs) => {
                    debug!(path = %path.display(), "loaded preferences");
                    prefs
                }
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "no stored preferences");
                    Prefs {
                        theme: Theme::detect(),
                    }
                }
            },
            None => Prefs {
                theme: Theme::detect(),
            },
        }
    }

    /// Write preferences to a specific file, creating parent directories.
    pub fn store_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Best-effort store to the default location. Failures are logged
    /// and swallowed; losing a theme preference is never fatal.
    pub fn store(&self) {
        if let Some(path) = Self::default_path() {
            if let Err(e) = self.store_to(&path) {
                warn!(path = %path.display(), error = %e, "failed to store preferences");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggles_both_ways() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_prefs_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let prefs = Prefs { theme: Theme::Light };
        prefs.store_to(&path).unwrap();

        let loaded = Prefs::load_from(&path).unwrap();
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Prefs::load_from(&dir.path().join("absent.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_garbage_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();

        let result = Prefs::load_from(&path);
        assert!(result.is_err());
    }
}
