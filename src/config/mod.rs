//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Loading is tolerant: a missing file yields defaults, a malformed file
//! yields defaults plus a warning key the caller can surface as a toast.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "SaborGourmet";

/// Auto-dismiss delay for flash alerts, in milliseconds.
pub const ALERT_TIMEOUT_MS: u64 = 5000;

/// Trailing debounce applied to the search field, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u64 = 500;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Preferred display locale in BCP-47 form (e.g. `es-PE`).
    pub language: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self { language: None }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration, falling back to defaults when the file is absent.
///
/// Returns the config plus an optional i18n warning key when the file existed
/// but could not be parsed.
pub fn load() -> (Config, Option<&'static str>) {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(_) => (Config::default(), Some("aviso-config-invalida")),
            };
        }
    }
    (Config::default(), None)
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_language() {
        let config = Config {
            language: Some("es-PE".to_string()),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
    }

    #[test]
    fn load_from_path_errors_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");
        let config = Config {
            language: Some("en".to_string()),
        };

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_has_no_language_override() {
        assert!(Config::default().language.is_none());
    }
}
