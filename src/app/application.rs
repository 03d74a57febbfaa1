//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, KeyBinding, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};
use tracing::{error, info};

use crate::constants::STYLESHEET_NAME;
use crate::domain::config::WindowConfig;
use crate::error::{Error, Result};
use crate::theme::stylesheet::Stylesheet;
use crate::views::RootView;

actions!(greeter, [Quit]);

/// Run the Greeter application
pub fn run_app(window_config: WindowConfig) {
    Application::new().run(move |cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.bind_keys([
            KeyBinding::new("cmd-q", Quit, None),
            KeyBinding::new("ctrl-q", Quit, None),
        ]);

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        if let Err(e) = open_main_window(&window_config, cx) {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}

fn open_main_window(config: &WindowConfig, cx: &mut App) -> Result<()> {
    let stylesheet = Stylesheet::by_name(STYLESHEET_NAME)?;

    let bounds = Bounds::centered(None, gpui::size(px(config.width), px(config.height)), cx);
    let window_options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some(SharedString::from(config.title.clone())),
            ..Default::default()
        }),
        ..Default::default()
    };

    cx.open_window(window_options, |_window, cx| {
        cx.new(|_| RootView::new(stylesheet))
    })
    .map_err(|e| Error::Window {
        message: e.to_string(),
    })?;

    info!(
        width = config.width,
        height = config.height,
        stylesheet = STYLESHEET_NAME,
        "Main window opened"
    );
    Ok(())
}
