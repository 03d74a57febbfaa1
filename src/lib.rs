//! Greeter GUI Library
//!
//! A greeting heading and a row of buttons that each show a message in a
//! blocking alert. The button component and its class-name composition are
//! the reusable parts; the rest is layout.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod theme;
pub mod views;
