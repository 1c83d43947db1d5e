//! Military Expenditure Viewer
//!
//! Loads a CSV of military expenditure by country and year and displays an
//! interactive bar chart (per-country, per-year) and a multi-line chart
//! (all countries, linear or log scale).

mod charts;
mod data;
mod gui;

use eframe::egui;
use gui::ViewerApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([1000.0, 600.0])
            .with_title("Military Expenditure Viewer"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Military Expenditure Viewer",
        options,
        Box::new(|cc| Ok(Box::new(ViewerApp::new(cc)))),
    )
}
