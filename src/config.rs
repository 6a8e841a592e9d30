//! Application configuration.

use crate::auction::AuctionStatus;
use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// User preferences for the dashboard.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Tab selected when the dashboard opens.
    pub default_tab: AuctionStatus,
    /// Whether to paint the dark background behind the dashboard.
    pub with_background_color: bool,
    /// Whether to show the splash screen on start.
    pub show_splash: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_tab: AuctionStatus::Upcoming,
            with_background_color: false,
            show_splash: true,
        }
    }
}

/// Default location of the config file: `~/.lorri/config.json`.
pub fn get_config_path() -> Result<PathBuf, DashboardError> {
    let home = home::home_dir().ok_or(DashboardError::HomeDirNotFound)?;
    Ok(home.join(".lorri").join("config.json"))
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an error if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, DashboardError> {
        let buf = fs::read(path)?;
        serde_json::from_slice(&buf).map_err(|source| DashboardError::Config {
            path: path.display().to_string(),
            source,
        })
    }

    /// Loads the config at `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, DashboardError> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), DashboardError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|source| DashboardError::Config {
            path: path.display().to_string(),
            source,
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the config file. Missing files are not an error.
    pub fn clear(path: &Path) -> Result<(), DashboardError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config {
            default_tab: AuctionStatus::Paused,
            with_background_color: true,
            show_splash: false,
        };
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let result = Config::default().save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(path.exists());
    }

    #[test]
    // Missing fields fall back to their defaults.
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "default_tab": "closed" }"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.default_tab, AuctionStatus::Closed);
        assert!(config.show_splash);
        assert!(!config.with_background_color);
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(matches!(result, Err(DashboardError::Config { .. })));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("missing.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::default().save(&path).unwrap();

        Config::clear(&path).unwrap();
        assert!(!path.exists());
        Config::clear(&path).unwrap();
    }
}
