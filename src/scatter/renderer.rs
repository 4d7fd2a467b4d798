//! Chart geometry and painting.
//!
//! [`build_frame`] is the pure half of the pipeline: dataset × config →
//! scales, tick positions and mark coordinates, all in chart-local pixels.
//! [`ScatterChart::show`] paints a frame into an egui `Ui` with the layering
//! the chart depends on: axes beneath, marks above, tooltip overlay last.

use eframe::egui;
use tracing::debug;

use super::{ChartOptions, LayoutConfig};
use crate::core::{nice_bounds, ColorScale, ConfigError, Dataset, LinearScale, Rgb};
use crate::theme::colors;

/// Tooltip fade timings (seconds): quick in, slower out.
const TOOLTIP_FADE_IN: f32 = 0.2;
const TOOLTIP_FADE_OUT: f32 = 0.5;
/// Extra pixels beyond the mark radius that still count as hovering it.
const HOVER_SLOP: f32 = 4.0;
/// Tick length in pixels.
const TICK_LEN: f32 = 5.0;

/// One visual mark, in chart-local pixels (origin at the inner area's
/// top-left).
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    pub cx: f32,
    pub cy: f32,
    /// Fill from the color scale; `None` means the theme's default mark
    /// color.
    pub color: Option<Rgb>,
    pub label: Option<String>,
}

/// A tick on an axis: pixel position along the axis plus its text.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub pos: f32,
    pub text: String,
}

/// Everything the paint pass needs, computed once per render call and
/// discarded afterwards.
#[derive(Debug, Clone)]
pub struct ChartFrame {
    pub inner_width: f32,
    pub inner_height: f32,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub marks: Vec<Mark>,
}

/// Compute the full chart geometry. Rejects degenerate layouts and domains
/// before any coordinate is produced; on error nothing is drawn.
pub fn build_frame(
    data: &Dataset,
    layout: &LayoutConfig,
    options: &ChartOptions,
) -> Result<ChartFrame, ConfigError> {
    let inner = layout.inner()?;

    let x_domain = resolve_domain("x", options.x_domain, data.x_extent())?;
    let y_domain = resolve_domain("y", options.y_domain, data.y_extent())?;

    let x_scale = LinearScale::new("x", x_domain, (0.0, inner.width as f64))?;
    // Inverted range: larger Y values plot higher on screen.
    let y_scale = LinearScale::new("y", y_domain, (inner.height as f64, 0.0))?;

    let frame = ChartFrame {
        inner_width: inner.width,
        inner_height: inner.height,
        x_ticks: tick_marks(&x_scale, options.tick_count),
        y_ticks: tick_marks(&y_scale, options.tick_count),
        marks: place_marks(data, &x_scale, &y_scale, options.color.as_ref()),
        x_scale,
        y_scale,
    };
    debug!(
        marks = frame.marks.len(),
        x_domain = ?frame.x_scale.domain(),
        y_domain = ?frame.y_scale.domain(),
        "frame built"
    );
    Ok(frame)
}

/// Fixed domains are used as given; derived ones come from the dataset
/// extent, rounded outward to nice boundaries.
fn resolve_domain(
    axis: &'static str,
    fixed: Option<(f64, f64)>,
    data_extent: Option<(f64, f64)>,
) -> Result<(f64, f64), ConfigError> {
    match fixed {
        Some(domain) => Ok(domain),
        None => {
            let (lo, hi) = data_extent.ok_or(ConfigError::EmptyDomain { axis })?;
            Ok(nice_bounds(lo, hi))
        }
    }
}

/// Map every data point through the scales; one mark per point.
pub fn place_marks(
    data: &Dataset,
    x_scale: &LinearScale,
    y_scale: &LinearScale,
    color: Option<&ColorScale>,
) -> Vec<Mark> {
    data.iter()
        .map(|point| Mark {
            cx: x_scale.map(point.x) as f32,
            cy: y_scale.map(point.y) as f32,
            color: match (color, point.score) {
                (Some(scale), Some(score)) => Some(scale.color_at(score)),
                _ => None,
            },
            label: point.label.clone(),
        })
        .collect()
}

fn tick_marks(scale: &LinearScale, count: usize) -> Vec<AxisTick> {
    scale
        .ticks(count)
        .into_iter()
        .map(|value| AxisTick {
            pos: scale.map(value) as f32,
            text: format_tick(value),
        })
        .collect()
}

/// Shortest decimal form, with float dust from the tick stepping rounded
/// away.
fn format_tick(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    format!("{rounded}")
}

/// The chart's single floating label, shared by all hover handlers
/// (last write wins). The renderer itself stays stateless; this is the only
/// mutable UI state.
#[derive(Debug, Default)]
pub struct Tooltip {
    text: String,
    pos: egui::Pos2,
    visible: bool,
}

impl Tooltip {
    pub fn show(&mut self, text: &str, pos: egui::Pos2) {
        self.text.clear();
        self.text.push_str(text);
        self.pos = pos;
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    fn paint(&self, ui: &egui::Ui) {
        let target = if self.visible { 1.0 } else { 0.0 };
        let time = if self.visible {
            TOOLTIP_FADE_IN
        } else {
            TOOLTIP_FADE_OUT
        };
        let alpha = ui
            .ctx()
            .animate_value_with_time(egui::Id::new("scatter_tooltip"), target, time);
        if alpha <= 0.0 || self.text.is_empty() {
            return;
        }

        let painter = ui.painter();
        let galley = painter.layout_no_wrap(
            self.text.clone(),
            egui::FontId::proportional(12.0),
            colors::TEXT_PRIMARY.gamma_multiply(alpha),
        );
        let anchor = self.pos + egui::vec2(12.0, -24.0);
        let rect = egui::Rect::from_min_size(anchor, galley.size() + egui::vec2(12.0, 8.0));
        painter.rect_filled(rect, 4.0, colors::TOOLTIP_BG.gamma_multiply(alpha));
        painter.galley(rect.min + egui::vec2(6.0, 4.0), galley, colors::TEXT_PRIMARY);
    }
}

/// The scatterplot widget: owns layout and options, renders a dataset into
/// an egui `Ui` once per frame.
pub struct ScatterChart {
    pub layout: LayoutConfig,
    pub options: ChartOptions,
}

impl ScatterChart {
    pub fn new(layout: LayoutConfig, options: ChartOptions) -> Self {
        Self { layout, options }
    }

    /// Render the chart. On a configuration error nothing is drawn and the
    /// error is returned to the caller.
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        data: &Dataset,
        tooltip: &mut Tooltip,
    ) -> Result<egui::Response, ConfigError> {
        let frame = build_frame(data, &self.layout, &self.options)?;

        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(self.layout.width, self.layout.height),
            egui::Sense::hover(),
        );
        let origin = rect.min + egui::vec2(self.layout.margins.left, self.layout.margins.top);
        let painter = ui.painter_at(rect);

        self.paint_axes(&painter, origin, &frame);
        self.paint_marks(&painter, origin, &frame);

        if self.options.tooltip {
            self.update_tooltip(&response, origin, &frame, tooltip);
            tooltip.paint(ui);
        }

        Ok(response)
    }

    fn paint_axes(&self, painter: &egui::Painter, origin: egui::Pos2, frame: &ChartFrame) {
        let stroke = egui::Stroke::new(1.0, colors::AXIS);
        let font = egui::FontId::proportional(11.0);
        let baseline = origin.y + frame.inner_height;

        // X axis: line below the inner area, ticks hanging down, label at
        // the far end just above the line.
        painter.line_segment(
            [
                egui::pos2(origin.x, baseline),
                egui::pos2(origin.x + frame.inner_width, baseline),
            ],
            stroke,
        );
        for tick in &frame.x_ticks {
            let x = origin.x + tick.pos;
            painter.line_segment(
                [egui::pos2(x, baseline), egui::pos2(x, baseline + TICK_LEN)],
                stroke,
            );
            painter.text(
                egui::pos2(x, baseline + TICK_LEN + 2.0),
                egui::Align2::CENTER_TOP,
                &tick.text,
                font.clone(),
                colors::TEXT_SECONDARY,
            );
        }
        painter.text(
            egui::pos2(origin.x + frame.inner_width, baseline - 6.0),
            egui::Align2::RIGHT_BOTTOM,
            &self.options.x_label,
            font.clone(),
            colors::TEXT_PRIMARY,
        );

        // Y axis: line on the left, ticks pointing out, label near the top
        // rotated to read along the axis.
        painter.line_segment([origin, egui::pos2(origin.x, baseline)], stroke);
        for tick in &frame.y_ticks {
            let y = origin.y + tick.pos;
            painter.line_segment(
                [egui::pos2(origin.x - TICK_LEN, y), egui::pos2(origin.x, y)],
                stroke,
            );
            painter.text(
                egui::pos2(origin.x - TICK_LEN - 2.0, y),
                egui::Align2::RIGHT_CENTER,
                &tick.text,
                font.clone(),
                colors::TEXT_SECONDARY,
            );
        }
        let galley = painter.layout_no_wrap(
            self.options.y_label.clone(),
            font,
            colors::TEXT_PRIMARY,
        );
        let label_len = galley.size().x;
        let mut label = egui::epaint::TextShape::new(
            egui::pos2(origin.x + 6.0, origin.y + label_len + 4.0),
            galley,
            colors::TEXT_PRIMARY,
        );
        label.angle = -std::f32::consts::FRAC_PI_2;
        painter.add(label);
    }

    fn paint_marks(&self, painter: &egui::Painter, origin: egui::Pos2, frame: &ChartFrame) {
        for mark in &frame.marks {
            let center = egui::pos2(origin.x + mark.cx, origin.y + mark.cy);
            let fill = mark
                .color
                .map(|c| egui::Color32::from_rgb(c.r, c.g, c.b))
                .unwrap_or(colors::MARK);
            painter.circle_filled(center, self.options.point_radius, fill);
        }
    }

    /// Hover handling: find the closest mark under the pointer and drive the
    /// shared tooltip. Marks without a label never show one.
    fn update_tooltip(
        &self,
        response: &egui::Response,
        origin: egui::Pos2,
        frame: &ChartFrame,
        tooltip: &mut Tooltip,
    ) {
        let Some(pointer) = response.hover_pos() else {
            tooltip.hide();
            return;
        };
        let slop = self.options.point_radius + HOVER_SLOP;
        let hit = frame
            .marks
            .iter()
            .map(|m| {
                let center = egui::pos2(origin.x + m.cx, origin.y + m.cy);
                (m, pointer.distance(center))
            })
            .filter(|(_, dist)| *dist <= slop)
            .min_by(|a, b| a.1.total_cmp(&b.1));

        match hit {
            Some((mark, _)) if mark.label.is_some() => {
                tooltip.show(mark.label.as_deref().unwrap_or_default(), pointer);
            }
            _ => tooltip.hide(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ColorStop, DataPoint};
    use crate::scatter::Margins;

    fn sample() -> Dataset {
        Dataset::new(vec![
            DataPoint::new(25.0, 25.0),
            DataPoint::new(50.0, 75.0),
            DataPoint::new(100.0, 150.0),
            DataPoint::new(200.0, 300.0),
        ])
    }

    #[test]
    fn identity_scale_places_marks_exactly() {
        // domain == range, no inversion: marks land on the raw data values.
        let x = LinearScale::new("x", (0.0, 750.0), (0.0, 750.0)).unwrap();
        let y = LinearScale::new("y", (0.0, 750.0), (0.0, 750.0)).unwrap();
        let marks = place_marks(&sample(), &x, &y, None);
        let got: Vec<(f32, f32)> = marks.iter().map(|m| (m.cx, m.cy)).collect();
        assert_eq!(
            got,
            vec![(25.0, 25.0), (50.0, 75.0), (100.0, 150.0), (200.0, 300.0)]
        );
    }

    #[test]
    fn derived_domains_keep_marks_inside_inner_area() {
        let frame = build_frame(&sample(), &LayoutConfig::default(), &ChartOptions::default())
            .unwrap();
        for mark in &frame.marks {
            assert!((0.0..=frame.inner_width).contains(&mark.cx), "{}", mark.cx);
            assert!((0.0..=frame.inner_height).contains(&mark.cy), "{}", mark.cy);
        }
    }

    #[test]
    fn y_axis_is_inverted() {
        let frame = build_frame(&sample(), &LayoutConfig::default(), &ChartOptions::default())
            .unwrap();
        // The point with the largest Y value sits highest (smallest cy).
        assert!(frame.marks[3].cy < frame.marks[0].cy);
        let highest = frame
            .marks
            .iter()
            .min_by(|a, b| a.cy.total_cmp(&b.cy))
            .unwrap();
        assert_eq!((highest.cx, highest.cy), (frame.marks[3].cx, frame.marks[3].cy));
    }

    #[test]
    fn tick_counts_match_options() {
        let options = ChartOptions {
            tick_count: 5,
            ..ChartOptions::default()
        };
        let frame = build_frame(&sample(), &LayoutConfig::default(), &options).unwrap();
        assert_eq!(frame.x_ticks.len(), 6);
        assert_eq!(frame.y_ticks.len(), 6);
    }

    #[test]
    fn fixed_domain_overrides_extent() {
        let options = ChartOptions {
            x_domain: Some((0.0, 1000.0)),
            ..ChartOptions::default()
        };
        let frame = build_frame(&sample(), &LayoutConfig::default(), &options).unwrap();
        assert_eq!(frame.x_scale.domain(), (0.0, 1000.0));
    }

    #[test]
    fn failed_load_leaves_nothing_to_draw() {
        // Same dispatch as the app shell: geometry is built only from a
        // successfully loaded dataset, so a bad file can never put a mark
        // (finite or otherwise) on screen.
        let reader = csv::Reader::from_reader("x,y\n1,2\n9,8\ninf,5\n".as_bytes());
        let frame = crate::core::read_records(reader)
            .ok()
            .map(|data| build_frame(&data, &LayoutConfig::default(), &ChartOptions::default()));
        assert!(frame.is_none());
    }

    #[test]
    fn empty_dataset_without_fixed_domain_is_rejected() {
        let err = build_frame(
            &Dataset::default(),
            &LayoutConfig::default(),
            &ChartOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::EmptyDomain { axis: "x" });
    }

    #[test]
    fn single_point_dataset_is_a_degenerate_domain() {
        let data = Dataset::new(vec![DataPoint::new(5.0, 7.0)]);
        let err =
            build_frame(&data, &LayoutConfig::default(), &ChartOptions::default()).unwrap_err();
        assert!(matches!(err, ConfigError::DegenerateDomain { .. }));
    }

    #[test]
    fn degenerate_layout_rejected_before_scales() {
        let layout = LayoutConfig {
            width: 10.0,
            height: 10.0,
            margins: Margins::default(),
        };
        // Even with a fine dataset the layout error wins.
        let err = build_frame(&sample(), &layout, &ChartOptions::default()).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositiveInner { .. }));
    }

    #[test]
    fn score_drives_mark_color() {
        let mut p1 = DataPoint::new(0.0, 0.0);
        p1.score = Some(0.0);
        let mut p2 = DataPoint::new(10.0, 10.0);
        p2.score = Some(100.0);
        let data = Dataset::new(vec![p1, p2]);
        let options = ChartOptions {
            color: Some(ColorScale::traffic_light()),
            ..ChartOptions::default()
        };
        let frame = build_frame(&data, &LayoutConfig::default(), &options).unwrap();
        assert_eq!(frame.marks[0].color, Some(Rgb::RED));
        assert_eq!(frame.marks[1].color, Some(Rgb::GREEN));
    }

    #[test]
    fn unscored_points_fall_back_to_theme_color() {
        let options = ChartOptions {
            color: Some(ColorScale::new(vec![
                ColorStop::new(0.0, Rgb::RED),
                ColorStop::new(1.0, Rgb::GREEN),
            ])
            .unwrap()),
            ..ChartOptions::default()
        };
        let frame = build_frame(&sample(), &LayoutConfig::default(), &options).unwrap();
        assert!(frame.marks.iter().all(|m| m.color.is_none()));
    }

    #[test]
    fn tick_labels_are_round_numbers() {
        let frame = build_frame(&sample(), &LayoutConfig::default(), &ChartOptions::default())
            .unwrap();
        // Derived domains are niced, so boundary ticks format cleanly.
        assert!(frame.x_ticks.iter().all(|t| !t.text.contains("00000")));
    }

    #[test]
    fn format_tick_strips_float_dust() {
        assert_eq!(format_tick(30.000000000000004), "30");
        assert_eq!(format_tick(0.5), "0.5");
        assert_eq!(format_tick(-12.0), "-12");
    }
}
