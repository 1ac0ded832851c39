mod analysis;
mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use app::FlixDashboardApp;
use data::loader::{DATA_PATH, load_csv};
use eframe::egui;

fn main() -> Result<()> {
    env_logger::init();

    // The dataset is read exactly once; a load failure ends the process.
    let dataset = load_csv(Path::new(DATA_PATH))
        .with_context(|| format!("loading dataset from {DATA_PATH}"))
        .inspect_err(|e| log::error!("{e:#}"))?;
    if dataset.is_empty() {
        log::warn!("{DATA_PATH} has no rows; every view will be empty");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Netflix Movie Recommendation System",
        options,
        Box::new(|_cc| Ok(Box::new(FlixDashboardApp::new(dataset)))),
    )
    .map_err(|e| anyhow!("UI error: {e}"))
}
