//! Theme
//!
//! Colour palette, typography and the class-rule stylesheet.

pub mod colors;
pub mod stylesheet;
pub mod typography;
