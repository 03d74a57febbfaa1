//! Window Alert
//!
//! Shows a message through the window's native prompt, the platform's
//! blocking modal dialog with a single OK answer.

use gpui::{App, PromptLevel, Window};
use tracing::{debug, info};

use crate::domain::Alert;

const OK_ANSWER: &str = "OK";

/// [`Alert`] backed by a GPUI window prompt
pub struct WindowAlert<'a> {
    window: &'a mut Window,
    cx: &'a mut App,
}

impl<'a> WindowAlert<'a> {
    pub fn new(window: &'a mut Window, cx: &'a mut App) -> Self {
        Self { window, cx }
    }
}

impl Alert for WindowAlert<'_> {
    fn alert(&mut self, message: &str) {
        info!(message, "Showing alert");
        let answer = self
            .window
            .prompt(PromptLevel::Info, message, None, &[OK_ANSWER], self.cx);

        self.cx
            .spawn(async move |_cx| {
                if answer.await.is_ok() {
                    debug!("Alert dismissed");
                }
            })
            .detach();
    }
}
