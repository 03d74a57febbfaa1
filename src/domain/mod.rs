//! Domain Models
//!
//! Plain value types the views render from, plus the persisted config.
//! Nothing here touches a window.

pub mod alert;
pub mod button_config;
pub mod config;
pub mod greeting;

pub use alert::Alert;
pub use button_config::{ButtonConfig, StyleClass};
pub use config::{AppConfig, LoadedConfig};
pub use greeting::DisplayName;
