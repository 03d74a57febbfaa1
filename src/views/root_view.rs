//! Root View - Greeting Heading and Button Row
//!
//! The top-level view of the main window. It owns the display name and the
//! button configurations; buttons get their config by value and never report
//! back.

use gpui::{
    div, prelude::*, px, Context, IntoElement, ParentElement, Render, SharedString, Styled, Window,
};

use crate::components::primitives::button::Button;
use crate::constants::HEADING_CLASS;
use crate::domain::{ButtonConfig, DisplayName};
use crate::theme::colors::GreeterColors;
use crate::theme::stylesheet::Stylesheet;

/// Everything the root view renders, as plain comparable data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootLayout {
    /// Heading text, `Hello, {name}!`
    pub heading: SharedString,
    /// Class applied to the heading
    pub heading_class: &'static str,
    /// One entry per rendered button, in order
    pub buttons: Vec<ButtonConfig>,
}

/// Main view: a greeting followed by three buttons
pub struct RootView {
    display_name: DisplayName,
    buttons: Vec<ButtonConfig>,
    stylesheet: Stylesheet,
}

impl RootView {
    pub fn new(stylesheet: Stylesheet) -> Self {
        Self {
            display_name: DisplayName::default(),
            buttons: default_buttons(),
            stylesheet,
        }
    }

    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    pub fn heading(&self) -> SharedString {
        self.display_name.greeting()
    }

    pub fn buttons(&self) -> &[ButtonConfig] {
        &self.buttons
    }

    /// Snapshot of what a render produces
    pub fn layout(&self) -> RootLayout {
        RootLayout {
            heading: self.heading(),
            heading_class: HEADING_CLASS,
            buttons: self.buttons.clone(),
        }
    }
}

impl Default for RootView {
    fn default() -> Self {
        Self::new(Stylesheet::index())
    }
}

fn default_buttons() -> Vec<ButtonConfig> {
    vec![
        ButtonConfig::new("button 1", "Hello from button 1!", "success"),
        ButtonConfig::new("button 2", "Hello from button 2!", "danger"),
        ButtonConfig::new("button 3", "Hello from button 3!", "neutral"),
    ]
}

impl Render for RootView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let layout = self.layout();
        let heading = self.stylesheet.resolve_heading(layout.heading_class);

        div()
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_6()
            .bg(GreeterColors::background())
            .child(
                // Heading
                div()
                    .text_color(heading.text_color)
                    .text_size(heading.font_size)
                    .font_weight(heading.font_weight)
                    .child(layout.heading),
            )
            .child(
                // Buttons
                div().flex().flex_row().gap(px(12.0)).children(
                    layout.buttons.into_iter().enumerate().map(|(ix, config)| {
                        Button::new(("greeter-button", ix), config)
                            .stylesheet(self.stylesheet.clone())
                    }),
                ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::button_config::tests::RecordingAlert;

    #[test]
    fn heading_greets_josh() {
        let view = RootView::default();
        assert_eq!(view.display_name().as_str(), "Josh");
        assert_eq!(view.layout().heading.to_string(), "Hello, Josh!");
        assert_eq!(view.layout().heading_class, "heading");
    }

    #[test]
    fn renders_three_literal_buttons() {
        let layout = RootView::default().layout();
        let triples: Vec<(&str, &str, &str)> = layout
            .buttons
            .iter()
            .map(|b| (b.label.as_ref(), b.message.as_ref(), b.style_tag.as_ref()))
            .collect();

        assert_eq!(
            triples,
            vec![
                ("button 1", "Hello from button 1!", "success"),
                ("button 2", "Hello from button 2!", "danger"),
                ("button 3", "Hello from button 3!", "neutral"),
            ]
        );
    }

    #[test]
    fn selectors_compose_per_button() {
        let selectors: Vec<String> = RootView::default()
            .buttons()
            .iter()
            .map(|config| config.style_selector().to_string())
            .collect();

        assert_eq!(selectors, vec!["btn success", "btn danger", "btn neutral"]);
    }

    #[test]
    fn rerender_is_identical() {
        let view = RootView::default();
        let first = view.layout();
        let second = view.layout();

        assert_eq!(first, second);
        assert_eq!(first, RootView::default().layout());
    }

    #[test]
    fn each_button_alerts_only_its_own_message() {
        let view = RootView::default();
        let before = view.layout();

        for config in view.buttons() {
            let mut alert = RecordingAlert::default();
            config.activate(&mut alert);
            assert_eq!(alert.messages, vec![config.message.to_string()]);
        }

        assert_eq!(view.layout(), before);
    }
}
