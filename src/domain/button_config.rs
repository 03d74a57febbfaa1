//! ButtonConfig - Per-Button Label, Message and Style Tag

use gpui::SharedString;
use tracing::debug;

use crate::constants::BUTTON_BASE_CLASS;
use crate::domain::alert::Alert;

/// Visual variant parsed from a style tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleClass {
    /// Positive action (green)
    Success,
    /// Destructive action (red)
    Danger,
    /// Plain action (gray)
    Neutral,
    /// Any other tag, kept verbatim
    Custom(SharedString),
}

impl StyleClass {
    /// Parse a style tag. Matching is exact: `"Success"` is a custom tag.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "success" => StyleClass::Success,
            "danger" => StyleClass::Danger,
            "neutral" => StyleClass::Neutral,
            other => StyleClass::Custom(SharedString::from(other.to_string())),
        }
    }
}

/// Immutable configuration of a single button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonConfig {
    /// Visible text of the control
    pub label: SharedString,
    /// Text shown in the alert on activation
    pub message: SharedString,
    /// Modifier class appended to the base `btn` class
    pub style_tag: SharedString,
}

impl ButtonConfig {
    pub fn new(
        label: impl Into<SharedString>,
        message: impl Into<SharedString>,
        style_tag: impl Into<SharedString>,
    ) -> Self {
        Self {
            label: label.into(),
            message: message.into(),
            style_tag: style_tag.into(),
        }
    }

    /// Composed selector, always `"btn " + style_tag`
    pub fn style_selector(&self) -> SharedString {
        format!("{BUTTON_BASE_CLASS} {}", self.style_tag).into()
    }

    /// Run the activation side effect: exactly one alert carrying `message`.
    pub fn activate(&self, alert: &mut dyn Alert) {
        debug!(label = %self.label, "Button activated");
        alert.alert(&self.message);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Alert double that records every message it is asked to show
    #[derive(Default)]
    pub(crate) struct RecordingAlert {
        pub messages: Vec<String>,
    }

    impl Alert for RecordingAlert {
        fn alert(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }
    }

    #[test]
    fn selector_is_base_class_plus_tag() {
        let config = ButtonConfig::new("button 1", "Hello from button 1!", "success");
        assert_eq!(config.style_selector().to_string(), "btn success");

        let config = ButtonConfig::new("x", "y", "primary large");
        assert_eq!(config.style_selector().to_string(), "btn primary large");
    }

    #[test]
    fn empty_tag_keeps_trailing_space() {
        let config = ButtonConfig::new("label", "message", "");
        assert_eq!(config.style_selector().to_string(), "btn ");
        assert_eq!(StyleClass::parse(&config.style_tag), StyleClass::Custom("".into()));
    }

    #[test]
    fn style_class_parse_is_exact() {
        assert_eq!(StyleClass::parse("success"), StyleClass::Success);
        assert_eq!(StyleClass::parse("danger"), StyleClass::Danger);
        assert_eq!(StyleClass::parse("neutral"), StyleClass::Neutral);
        assert_eq!(StyleClass::parse("Success"), StyleClass::Custom("Success".into()));
    }

    #[test]
    fn activation_alerts_once_with_message() {
        let config = ButtonConfig::new("button 2", "Hello from button 2!", "danger");
        let mut alert = RecordingAlert::default();

        config.activate(&mut alert);

        assert_eq!(alert.messages, vec!["Hello from button 2!".to_string()]);
    }

    #[test]
    fn empty_message_still_alerts() {
        let config = ButtonConfig::new("label", "", "neutral");
        let mut alert = RecordingAlert::default();

        config.activate(&mut alert);

        assert_eq!(alert.messages, vec![String::new()]);
    }

    #[test]
    fn activation_leaves_siblings_untouched() {
        let first = ButtonConfig::new("button 1", "Hello from button 1!", "success");
        let second = ButtonConfig::new("button 2", "Hello from button 2!", "danger");
        let second_before = second.clone();
        let mut alert = RecordingAlert::default();

        first.activate(&mut alert);
        first.activate(&mut alert);

        assert_eq!(second, second_before);
        assert_eq!(
            alert.messages,
            vec!["Hello from button 1!".to_string(), "Hello from button 1!".to_string()]
        );
    }
}
