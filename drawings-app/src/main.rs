mod app;
mod app_dir;
mod controller;
mod export;
mod input;
mod preferences;
mod ui;

use eframe::egui;
use tracing::info;

use app::DrawingsApp;
use preferences::AppPreferences;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting Drawings");

    let prefs = AppPreferences::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Drawings")
            .with_inner_size([prefs.window_width, prefs.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        "Drawings",
        options,
        Box::new(move |_cc| Ok(Box::new(DrawingsApp::new(prefs)))),
    )
}
