mod app;
mod data;
mod ui;

use std::path::Path;

use anyhow::Result;
use app::ArmViewerApp;
use data::loader::{self, DEFAULT_INPUT};
use eframe::egui;

fn main() -> Result<()> {
    env_logger::init();

    let matrix = loader::load_csv(Path::new(DEFAULT_INPUT))?;
    log::info!("Loaded {} time steps from {DEFAULT_INPUT}", matrix.len());
    if matrix.is_empty() {
        log::warn!("{DEFAULT_INPUT} contains no rows; the chart will be empty");
    }

    // Row count goes to stdout before the window opens.
    println!("{}", matrix.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    // Blocks until the user closes the window.
    eframe::run_native(
        "Arm Angle Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(ArmViewerApp::new(matrix)))),
    )
    .map_err(|e| anyhow::anyhow!("running viewer: {e}"))
}
