//! Button Component
//!
//! Stateless control rendered purely from a [`ButtonConfig`]. Its selector is
//! resolved against the stylesheet and a click shows the configured message
//! through a [`WindowAlert`].

use gpui::{
    div, prelude::*, App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::components::composite::alert::WindowAlert;
use crate::domain::ButtonConfig;
use crate::theme::stylesheet::Stylesheet;

/// A styled button that alerts its message when clicked
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    config: ButtonConfig,
    stylesheet: Stylesheet,
}

impl Button {
    /// Create a new button rendered with the `index` stylesheet
    pub fn new(id: impl Into<ElementId>, config: ButtonConfig) -> Self {
        Self {
            id: id.into(),
            config,
            stylesheet: Stylesheet::index(),
        }
    }

    /// Set the stylesheet the selector is resolved against
    pub fn stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Visible text
    pub fn label(&self) -> &SharedString {
        &self.config.label
    }

    /// Composed class selector, `"btn " + style_tag`
    pub fn selector(&self) -> SharedString {
        self.config.style_selector()
    }

    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let style = self.stylesheet.resolve_button(&self.selector());
        let config = self.config;

        div()
            .id(self.id)
            .px(style.padding_x)
            .py(style.padding_y)
            .bg(style.background)
            .text_color(style.text_color)
            .text_size(style.font_size)
            .rounded_md()
            .cursor_pointer()
            .hover(move |s| s.bg(style.hover_background))
            .child(config.label.clone())
            .on_click(move |_event: &ClickEvent, window, cx| {
                config.activate(&mut WindowAlert::new(window, cx));
            })
    }
}
