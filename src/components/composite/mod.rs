//! Composite Components

pub mod alert;
