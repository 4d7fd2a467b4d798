//! XY scatterplot renderer
//!
//! A declarative rendering pipeline for scatterplots: load a CSV dataset,
//! build linear scales from fixed or derived domains, compute axis and mark
//! geometry, and paint the result into an egui surface. Optional extras per
//! chart: color encoding of a third numeric column and hover tooltips.
//!
//! The pipeline is a pure transform (data × config → visual output) invoked
//! once per frame; the only mutable UI state is the shared tooltip.

pub mod app;
pub mod core;
pub mod scatter;
pub mod theme;

pub use app::PlotApp;
pub use core::{ColorScale, DataPoint, Dataset, LinearScale};
pub use scatter::{ChartOptions, LayoutConfig, ScatterChart};
