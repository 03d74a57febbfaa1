//! Greeter GUI - Main Entry Point

use greeter_gui::app::application::run_app;
use greeter_gui::domain::AppConfig;
use greeter_gui::helpers::init_logging;

fn main() {
    // Config is read before logging exists; report the outcome afterwards
    let loaded = AppConfig::try_load();
    let config = loaded
        .as_ref()
        .map(|loaded| loaded.config.clone())
        .unwrap_or_default();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(&config.log);

    match &loaded {
        Ok(loaded) if loaded.created => {
            tracing::info!(path = ?loaded.path, "Created empty config file");
        }
        Ok(loaded) => tracing::info!(path = ?loaded.path, "Loaded config file"),
        Err(e) => tracing::warn!(error = %e, "Using default configuration"),
    }

    tracing::info!("Starting Greeter...");

    // Run the GPUI application
    run_app(config.window);
}
