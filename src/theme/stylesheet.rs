//! Stylesheet - Class Rules for Composed Selectors
//!
//! Views only compose class names (`"btn success"`, `"heading"`). This module
//! is the one place those names turn into colours and sizes. Rules cascade in
//! selector order, so later classes override earlier ones and unknown classes
//! contribute nothing.

use gpui::{px, FontWeight, Pixels, Rgba};

use crate::constants::{BUTTON_BASE_CLASS, HEADING_CLASS};
use crate::domain::StyleClass;
use crate::error::{Error, Result};
use crate::theme::colors::GreeterColors;
use crate::theme::typography::Typography;

/// Properties a single class may set. `None` leaves the cascaded value alone.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClassRule {
    pub background: Option<Rgba>,
    pub hover_background: Option<Rgba>,
    pub text_color: Option<Rgba>,
    pub padding_x: Option<Pixels>,
    pub padding_y: Option<Pixels>,
    pub font_size: Option<Pixels>,
}

/// Fully resolved button appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub background: Rgba,
    pub hover_background: Rgba,
    pub text_color: Rgba,
    pub padding_x: Pixels,
    pub padding_y: Pixels,
    pub font_size: Pixels,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            background: GreeterColors::button_base_bg(),
            hover_background: GreeterColors::button_base_hover(),
            text_color: GreeterColors::text_primary(),
            padding_x: px(16.0),
            padding_y: px(8.0),
            font_size: px(Typography::TEXT_SM),
        }
    }
}

impl ButtonStyle {
    fn apply(&mut self, rule: &ClassRule) {
        if let Some(bg) = rule.background {
            self.background = bg;
        }
        if let Some(hover) = rule.hover_background {
            self.hover_background = hover;
        }
        if let Some(color) = rule.text_color {
            self.text_color = color;
        }
        if let Some(x) = rule.padding_x {
            self.padding_x = x;
        }
        if let Some(y) = rule.padding_y {
            self.padding_y = y;
        }
        if let Some(size) = rule.font_size {
            self.font_size = size;
        }
    }
}

/// Resolved heading appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingStyle {
    pub text_color: Rgba,
    pub font_size: Pixels,
    pub font_weight: FontWeight,
}

/// A named set of class rules
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    name: &'static str,
    base: ClassRule,
    success: ClassRule,
    danger: ClassRule,
    neutral: ClassRule,
    heading: HeadingStyle,
}

impl Stylesheet {
    /// Look up a stylesheet by name
    pub fn by_name(name: &str) -> Result<Self> {
        match name {
            "index" => Ok(Self::index()),
            other => Err(Error::UnknownStylesheet {
                name: other.to_string(),
            }),
        }
    }

    /// The stylesheet the greeting page ships with
    pub fn index() -> Self {
        Self {
            name: "index",
            base: ClassRule {
                background: Some(GreeterColors::button_base_bg()),
                hover_background: Some(GreeterColors::button_base_hover()),
                text_color: Some(GreeterColors::text_primary()),
                padding_x: Some(px(16.0)),
                padding_y: Some(px(8.0)),
                font_size: Some(px(Typography::TEXT_BASE)),
            },
            success: ClassRule {
                background: Some(GreeterColors::button_success_bg()),
                hover_background: Some(GreeterColors::button_success_hover()),
                text_color: Some(GreeterColors::text_light()),
                ..Default::default()
            },
            danger: ClassRule {
                background: Some(GreeterColors::button_danger_bg()),
                hover_background: Some(GreeterColors::button_danger_hover()),
                text_color: Some(GreeterColors::text_light()),
                ..Default::default()
            },
            neutral: ClassRule {
                background: Some(GreeterColors::button_neutral_bg()),
                hover_background: Some(GreeterColors::button_neutral_hover()),
                text_color: Some(GreeterColors::text_light()),
                ..Default::default()
            },
            heading: HeadingStyle {
                text_color: GreeterColors::text_primary(),
                font_size: px(Typography::TEXT_3XL),
                font_weight: FontWeight::BOLD,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn rule_for(&self, class: &str) -> Option<&ClassRule> {
        if class == BUTTON_BASE_CLASS {
            return Some(&self.base);
        }
        match StyleClass::parse(class) {
            StyleClass::Success => Some(&self.success),
            StyleClass::Danger => Some(&self.danger),
            StyleClass::Neutral => Some(&self.neutral),
            StyleClass::Custom(_) => None,
        }
    }

    /// Cascade every class in `selector` over the default button style
    pub fn resolve_button(&self, selector: &str) -> ButtonStyle {
        selector
            .split_whitespace()
            .filter_map(|class| self.rule_for(class))
            .fold(ButtonStyle::default(), |mut style, rule| {
                style.apply(rule);
                style
            })
    }

    /// Heading style for `class`; unknown classes get the default heading
    pub fn resolve_heading(&self, class: &str) -> HeadingStyle {
        if class != HEADING_CLASS {
            tracing::debug!(class, stylesheet = self.name, "No rule for heading class");
        }
        self.heading
    }
}
