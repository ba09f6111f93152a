//! Native GUI library entry point.
//!
//! Exposes a `run` helper so the binary can launch the UI without duplicating
//! initialization logic.

mod app;
/// Simulation worker + protocol types used by the GUI and headless tests.
pub mod backend;

use app::TabdeckApp;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("tabdeck=warn,tabdeck_gui=info"))
        .unwrap();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

/// Start the native UI with tracing enabled.
///
/// # Returns
/// The result of `eframe::run_native`.
///
/// # Errors
/// Propagates any `eframe` initialization or runtime error (including app
/// creation failures when the embedded API server cannot start).
pub fn run() -> eframe::Result<()> {
    init_tracing();

    let app = TabdeckApp::new().map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(app::MIN_WINDOW_SIZE)
            .with_title("Tabdeck"),
        ..Default::default()
    };

    eframe::run_native("Tabdeck", options, Box::new(|_cc| Ok(Box::new(app))))
}
