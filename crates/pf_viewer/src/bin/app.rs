use eframe::egui;
use pf_viewer::app::App;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt()
        .with_target(true)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("Starting VibePortfolio");

    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(1200.0, 800.0)),
        ..Default::default()
    };

    eframe::run_native(
        "VibePortfolio",
        options,
        Box::new(|_cc| Box::new(App::new())),
    )
}
