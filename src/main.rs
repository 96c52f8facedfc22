mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::WayfarerApp;
use eframe::egui;

/// Dataset expected in the working directory on startup.
const DEFAULT_DATASET: &str = "destinations.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Wayfarer – Explore India",
        options,
        Box::new(|cc| {
            // Install image loaders so destination photos render from their URLs.
            egui_extras::install_image_loaders(&cc.egui_ctx);

            let mut app = WayfarerApp::default();
            // A missing file becomes the status message; the user can still
            // open any other CSV through the File menu.
            app.state.load_from(Path::new(DEFAULT_DATASET));
            Ok(Box::new(app))
        }),
    )
}
