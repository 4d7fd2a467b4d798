//! Application shell: owns the loaded dataset and the tooltip state,
//! renders the chart (or the load failure) each frame.

use std::path::PathBuf;

use eframe::egui;
use tracing::{error, info};

use crate::core::{load_csv, ColorScale, Dataset, LoadError};
use crate::scatter::{ChartOptions, LayoutConfig, ScatterChart, Tooltip};
use crate::theme::{chart_visuals, colors};

pub struct PlotApp {
    source: PathBuf,
    /// Loading happens once, before the first frame; a failure means no
    /// chart is ever drawn for this session.
    dataset: Result<Dataset, LoadError>,
    chart: ScatterChart,
    tooltip: Tooltip,
}

impl PlotApp {
    pub fn new(cc: &eframe::CreationContext<'_>, source: PathBuf) -> Self {
        cc.egui_ctx.set_visuals(chart_visuals());

        let dataset = load_csv(&source);
        match &dataset {
            Ok(data) => info!(path = %source.display(), points = data.len(), "dataset ready"),
            Err(err) => error!(error = %err, "data load failed; nothing will be drawn"),
        }

        // Color-encode only when the data actually carries scores.
        let color = dataset
            .as_ref()
            .ok()
            .and_then(|data| data.score_extent())
            .map(|_| ColorScale::traffic_light());
        let options = ChartOptions {
            color,
            ..ChartOptions::default()
        };

        Self {
            source,
            dataset,
            chart: ScatterChart::new(LayoutConfig::default(), options),
            tooltip: Tooltip::default(),
        }
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(self.source.display().to_string())
                    .color(colors::TEXT_SECONDARY)
                    .monospace()
                    .size(11.0),
            );
            ui.label(
                egui::RichText::new("/")
                    .color(colors::TEXT_MUTED)
                    .size(11.0),
            );
            let status = match &self.dataset {
                Ok(data) => format!("{} points", data.len()),
                Err(_) => "load failed".to_string(),
            };
            let status_color = match &self.dataset {
                Ok(_) => colors::TEXT_MUTED,
                Err(_) => colors::ERROR,
            };
            ui.label(
                egui::RichText::new(status)
                    .color(status_color)
                    .monospace()
                    .size(11.0),
            );
        });
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY).inner_margin(4.0))
            .show(ctx, |ui| {
                self.render_header(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY))
            .show(ctx, |ui| match &self.dataset {
                Ok(data) => {
                    if let Err(err) = self.chart.show(ui, data, &mut self.tooltip) {
                        ui.label(
                            egui::RichText::new(format!("chart configuration error: {err}"))
                                .color(colors::ERROR)
                                .size(13.0),
                        );
                    }
                }
                Err(err) => {
                    ui.label(
                        egui::RichText::new(format!("failed to load data: {err}"))
                            .color(colors::ERROR)
                            .size(13.0),
                    );
                }
            });
    }
}
