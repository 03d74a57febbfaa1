//! File System Utilities
//!
//! Configuration and data directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "cyenx", "greeter-gui").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/greeter-gui/` or `$XDG_CONFIG_HOME/greeter-gui/`
/// - **macOS**: `~/Library/Application Support/com.cyenx.greeter-gui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\cyenx\greeter-gui\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Get or create the data directory, home of the log files
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/greeter-gui/`
/// - **macOS**: `~/Library/Application Support/com.cyenx.greeter-gui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\cyenx\greeter-gui\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let data_dir = project_dirs.data_dir();

    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }

    Ok(data_dir.to_path_buf())
}
