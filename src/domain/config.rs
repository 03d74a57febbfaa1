//! Config - Application Configuration
//!
//! Persisted as TOML in the platform config directory. Every section has
//! defaults, so an empty or partial file is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_TITLE, DEFAULT_WINDOW_WIDTH,
    MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Main window settings
    pub window: WindowConfig,
    /// Logging settings
    pub log: LogConfig,
}

/// Main window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            title: DEFAULT_WINDOW_TITLE.to_string(),
        }
    }
}

impl WindowConfig {
    /// Replace non-finite sizes with the defaults and clamp the rest to the minimum
    fn sanitize(&mut self) {
        self.width = clamp_dimension(self.width, MIN_WINDOW_WIDTH, DEFAULT_WINDOW_WIDTH);
        self.height = clamp_dimension(self.height, MIN_WINDOW_HEIGHT, DEFAULT_WINDOW_HEIGHT);
    }
}

fn clamp_dimension(value: f32, min: f32, default: f32) -> f32 {
    if value.is_finite() {
        value.max(min)
    } else {
        default
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. "info", "greeter_gui=debug")
    pub level: String,
    /// Also write daily rolling log files to the data directory
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: false,
        }
    }
}

/// Result of loading the config file, reported once logging is up
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub path: PathBuf,
    /// The file did not exist and was created empty
    pub created: bool,
}

/// Create `path` as an empty file when absent. Returns whether it was created.
pub fn ensure_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    std::fs::write(path, "")?;
    Ok(true)
}

/// Path of the config file in the platform config directory
pub fn config_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(CONFIG_FILE_NAME))
}

impl AppConfig {
    /// Parse a TOML document; blank input yields the defaults
    pub fn from_toml_str(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Self = toml::from_str(value)?;
        config.window.sanitize();
        Ok(config)
    }

    /// Load from `path`, creating it empty first when absent
    pub fn load_from(path: &Path) -> Result<LoadedConfig> {
        let created = ensure_config_file(path)?;
        let value = std::fs::read_to_string(path)?;
        Ok(LoadedConfig {
            config: Self::from_toml_str(&value)?,
            path: path.to_path_buf(),
            created,
        })
    }

    /// Load from the platform config directory
    pub fn try_load() -> Result<LoadedConfig> {
        Self::load_from(&config_path()?)
    }

    /// Write to `path` as TOML
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let value = toml::to_string(self)?;
        std::fs::write(path, value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn blank_file_is_default() {
        assert_eq!(AppConfig::from_toml_str("").expect("parse"), AppConfig::default());
        assert_eq!(AppConfig::from_toml_str("  \n").expect("parse"), AppConfig::default());
    }

    #[test]
    fn defaults_match_constants() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.window.height, 600.0);
        assert_eq!(config.window.title, "Greeter");
        assert_eq!(config.log.level, "info");
        assert!(!config.log.file);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [window]
            width = 1024.0

            [log]
            file = true
            "#,
        )
        .expect("parse");

        assert_eq!(config.window.width, 1024.0);
        assert_eq!(config.window.height, 600.0);
        assert_eq!(config.window.title, "Greeter");
        assert_eq!(config.log.level, "info");
        assert!(config.log.file);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let err = AppConfig::from_toml_str("[window\nwidth = ").expect_err("malformed");
        assert!(matches!(err, Error::TomlDe { .. }));
    }

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("greeter-gui-{name}-{}.toml", std::process::id()))
    }

    #[test]
    fn save_then_load_from_disk() {
        let path = temp_config_path("save");
        let mut config = AppConfig::default();
        config.log.level = "debug".to_string();

        config.save_to(&path).expect("save");
        let loaded = AppConfig::load_from(&path).expect("load");
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.config, config);
        assert!(!loaded.created);
    }

    #[test]
    fn missing_file_is_created_empty_and_loads_defaults() {
        let path = temp_config_path("first-run");
        let _ = std::fs::remove_file(&path);

        let loaded = AppConfig::load_from(&path).expect("load");
        let contents = std::fs::read_to_string(&path).expect("read");
        let created_again = ensure_config_file(&path).expect("ensure");
        let _ = std::fs::remove_file(&path);

        assert!(loaded.created);
        assert_eq!(loaded.path, path);
        assert_eq!(contents, "");
        assert_eq!(loaded.config, AppConfig::default());
        assert!(!created_again);
    }

    #[test]
    fn degenerate_window_sizes_are_corrected() {
        let config = AppConfig::from_toml_str(
            r#"
            [window]
            width = 0.0
            height = -50.0
            "#,
        )
        .expect("parse");
        assert_eq!(config.window.width, MIN_WINDOW_WIDTH);
        assert_eq!(config.window.height, MIN_WINDOW_HEIGHT);

        let config = AppConfig::from_toml_str(
            r#"
            [window]
            width = nan
            height = inf
            "#,
        )
        .expect("parse");
        assert_eq!(config.window.width, DEFAULT_WINDOW_WIDTH);
        assert_eq!(config.window.height, DEFAULT_WINDOW_HEIGHT);
    }
}
