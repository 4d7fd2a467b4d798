//! Minimal dark theme for the chart surface.

use egui::Color32;

/// Chart palette: dark background, grey axes, light marks.
pub mod colors {
    use super::Color32;

    // === Backgrounds ===
    pub const BG_PRIMARY: Color32 = Color32::from_rgb(10, 10, 12);
    pub const TOOLTIP_BG: Color32 = Color32::from_rgba_premultiplied(30, 30, 34, 230);

    // === Text ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(235, 235, 235);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 160);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(90, 90, 90);

    // === Chart elements ===
    pub const AXIS: Color32 = Color32::from_rgb(120, 120, 128);
    /// Default mark fill when no color scale is configured.
    pub const MARK: Color32 = Color32::from_rgb(110, 168, 220);
    /// Error banner text.
    pub const ERROR: Color32 = Color32::from_rgb(230, 110, 110);
}

/// Egui visuals matching the chart palette.
pub fn chart_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_PRIMARY;
    visuals.extreme_bg_color = BG_PRIMARY;
    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.noninteractive.bg_fill = BG_PRIMARY;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, TEXT_MUTED);

    // Flat look, no shadows.
    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}
