//! Alert - Blocking User Notification

/// A channel that shows a message to the user and blocks until dismissed.
///
/// Buttons only see this trait; the window-backed implementation lives in
/// `components::composite::alert`.
pub trait Alert {
    /// Present `message` to the user
    fn alert(&mut self, message: &str);
}
