//! Views
//!
//! Stateful GPUI views hosted by application windows.

pub mod root_view;

pub use root_view::{RootLayout, RootView};
