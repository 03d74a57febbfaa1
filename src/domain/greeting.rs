//! Greeting - Display Name and Heading Text

use gpui::SharedString;

use crate::constants::DISPLAY_NAME;

/// The name greeted by the root view, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(SharedString);

impl DisplayName {
    pub fn new(name: impl Into<SharedString>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Heading text, `Hello, {name}!`
    pub fn greeting(&self) -> SharedString {
        format!("Hello, {}!", self.0).into()
    }
}

impl Default for DisplayName {
    fn default() -> Self {
        Self::new(DISPLAY_NAME)
    }
}
