//! Colors - Greeter Theme Colors

use gpui::{rgb, rgba, Rgba};

/// Greeter color palette - All colors are accessed via associated functions
pub struct GreeterColors;

impl GreeterColors {
    // Background colors
    /// Window background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }

    // Text colors
    /// Heading and body text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Light text (on coloured buttons)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Button colors
    /// Base `btn` background, used when no modifier matches
    pub fn button_base_bg() -> Rgba { rgb(0xe5e7eb) }
    /// Base `btn` hover background
    pub fn button_base_hover() -> Rgba { rgba(0xd1d5dbff) }
    /// `success` background - Green
    pub fn button_success_bg() -> Rgba { rgb(0x22c55e) }
    /// `success` hover background
    pub fn button_success_hover() -> Rgba { rgba(0x16a34aff) }
    /// `danger` background - Red
    pub fn button_danger_bg() -> Rgba { rgb(0xef4444) }
    /// `danger` hover background
    pub fn button_danger_hover() -> Rgba { rgba(0xdc2626ff) }
    /// `neutral` background - Slate
    pub fn button_neutral_bg() -> Rgba { rgb(0x6b7280) }
    /// `neutral` hover background
    pub fn button_neutral_hover() -> Rgba { rgba(0x4b5563ff) }
}
