//! ReadPane GUI library entry point.
//!
//! Exposes a `run` helper so the binary stays a thin shim around tracing
//! setup and app construction.

mod app;

use app::ReadPaneApp;
use eframe::egui;
use readpane_core::Config;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("readpane=warn,readpane_gui=info"))
        .unwrap();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

/// Start the ReadPane UI with tracing enabled.
///
/// # Returns
/// The result of `eframe::run_native`.
///
/// # Errors
/// Propagates any `eframe` initialization or runtime error.
pub fn run() -> eframe::Result<()> {
    init_tracing();

    let config = Config::from_env();
    let app = ReadPaneApp::new(&config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(egui::vec2(config.window_width, config.window_height))
            .with_min_inner_size(app::MIN_WINDOW_SIZE)
            .with_title("ReadPane"),
        ..Default::default()
    };

    eframe::run_native("ReadPane", options, Box::new(|_cc| Ok(Box::new(app))))
}
