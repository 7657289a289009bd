mod app;
mod ui;

use std::path::PathBuf;

use app::PenguinDashApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional dataset to open at startup.
    let startup_path = std::env::args_os().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Penguins Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(PenguinDashApp::new(startup_path.as_deref())))),
    )
}
