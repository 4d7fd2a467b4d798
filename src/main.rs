//! Native entry point
//!
//! Run with: cargo run -- path/to/data.csv

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use xyplot::PlotApp;

fn main() -> eframe::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,xyplot=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/basic.csv"));
    info!(path = %path.display(), "starting");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([770.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "xyplot",
        native_options,
        Box::new(move |cc| Ok(Box::new(PlotApp::new(cc, path)))),
    )
}
