//! UI Constants
//!
//! Centralized constants for the greeting page and window defaults.

/// Name shown in the greeting heading
pub const DISPLAY_NAME: &str = "Josh";

/// Stylesheet the root view renders against
pub const STYLESHEET_NAME: &str = "index";

/// Base class every button selector starts with
pub const BUTTON_BASE_CLASS: &str = "btn";

/// Class applied to the greeting heading
pub const HEADING_CLASS: &str = "heading";

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 800.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 600.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 240.0;

/// Default window title
pub const DEFAULT_WINDOW_TITLE: &str = "Greeter";

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "greeter-gui.toml";

/// Log file prefix inside the platform data directory
pub const LOG_FILE_NAME: &str = "greeter-gui.log";
