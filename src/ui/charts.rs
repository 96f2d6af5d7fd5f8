use eframe::egui::{
    CornerRadius, Pos2, RichText, Sense, Shape, Ui, Vec2, epaint::Mesh,
};
use egui_plot::{Axis, AxisHints, Bar, BarChart, GridInput, GridMark, Line, Plot, PlotPoints, VPlacement};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::config::CHART;
use crate::models::ChartSeries;
use crate::ui::styles::section_heading;
use crate::ui::ui_config::{UI_CONFIG, UI_TEXT};

/// The three views bound to the shared series. All render the same
/// labels/values with distinct static styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
enum ChartKind {
    Bar,
    Pie,
    Line,
}

impl ChartKind {
    fn title(self) -> &'static str {
        match self {
            Self::Bar => UI_TEXT.bar_title,
            Self::Pie => UI_TEXT.pie_title,
            Self::Line => UI_TEXT.line_title,
        }
    }
}

/// Render all three chart views. An empty series is a valid state: every
/// view draws its empty frame without data points.
pub fn render_charts(ui: &mut Ui, series: &ChartSeries) {
    for kind in ChartKind::iter() {
        ui.add_space(12.0);
        section_heading(ui, kind.title());
        ui.add_space(4.0);
        match kind {
            ChartKind::Bar => bar_view(ui, series),
            ChartKind::Pie => pie_view(ui, series),
            ChartKind::Line => line_view(ui, series),
        }
    }
    ui.add_space(12.0);
}

// --- BAR ---

fn bar_view(ui: &mut Ui, series: &ChartSeries) {
    let bars: Vec<Bar> = series
        .values
        .iter()
        .enumerate()
        .map(|(i, &price)| Bar::new(i as f64, price).width(CHART.bar_width))
        .collect();
    let fill = CHART.bar_fill.linear_multiply(CHART.bar_fill_opacity);

    locked_plot("bar_view", series)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(UI_TEXT.bar_dataset, bars).color(fill));
        });
}

// --- LINE ---

fn line_view(ui: &mut Ui, series: &ChartSeries) {
    let points = smoothed_points(
        &series.values,
        CHART.line_tension,
        CHART.line_smoothing_steps,
    );

    locked_plot("line_view", series)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(UI_TEXT.line_dataset, PlotPoints::new(points))
                    .color(CHART.line_color)
                    .width(CHART.line_width),
            );
        });
}

/// A non-interactive plot with product titles on the x-axis. The panel is a
/// read-only dashboard: no drag, no zoom, no reset gestures.
fn locked_plot<'a>(id: &'static str, series: &ChartSeries) -> Plot<'a> {
    Plot::new(id)
        .height(CHART.plot_height)
        .custom_x_axes(vec![label_axis(series.labels.clone())])
        .x_grid_spacer(index_grid_spacer(series.len()))
        .include_y(0.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_double_click_reset(false)
        .label_formatter(|_, _| String::new())
}

/// X axis shows the product title for each integer mark; the formatter owns
/// its copy of the labels.
fn label_axis(labels: Vec<String>) -> AxisHints<'static> {
    AxisHints::new(Axis::X)
        .formatter(move |mark: GridMark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 0.001 || idx < 0.0 {
                return String::new();
            }
            match labels.get(idx as usize) {
                Some(label) => truncate_label(label),
                None => String::new(),
            }
        })
        .placement(VPlacement::Bottom)
}

/// One grid mark per series index, none of the fractional marks the default
/// spacer would produce.
fn index_grid_spacer(len: usize) -> impl Fn(GridInput) -> Vec<GridMark> {
    move |_input| {
        (0..len)
            .map(|i| GridMark {
                value: i as f64,
                step_size: 1.0,
            })
            .collect()
    }
}

fn truncate_label(label: &str) -> String {
    let max = CHART.axis_label_max_chars;
    if label.chars().count() <= max {
        label.to_string()
    } else {
        let kept: String = label.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}

/// Sample a Catmull-Rom style curve through the (index, value) points.
/// `tension` scales the tangents (0.0 = straight polyline). Endpoints and
/// knots are preserved exactly.
fn smoothed_points(values: &[f64], tension: f64, steps: usize) -> Vec<[f64; 2]> {
    let n = values.len();
    if n < 3 || steps == 0 {
        return values
            .iter()
            .enumerate()
            .map(|(i, &v)| [i as f64, v])
            .collect();
    }

    let at = |i: isize| values[i.clamp(0, n as isize - 1) as usize];

    let mut out = Vec::with_capacity((n - 1) * steps + 1);
    for i in 0..n - 1 {
        let p1 = at(i as isize);
        let p2 = at(i as isize + 1);
        let m1 = tension * (p2 - at(i as isize - 1));
        let m2 = tension * (at(i as isize + 2) - p1);
        for s in 0..steps {
            let t = s as f64 / steps as f64;
            let t2 = t * t;
            let t3 = t2 * t;
            let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
            let h10 = t3 - 2.0 * t2 + t;
            let h01 = -2.0 * t3 + 3.0 * t2;
            let h11 = t3 - t2;
            out.push([i as f64 + t, h00 * p1 + h10 * m1 + h01 * p2 + h11 * m2]);
        }
    }
    out.push([(n - 1) as f64, values[n - 1]]);
    out
}

// --- PIE ---

fn pie_view(ui: &mut Ui, series: &ChartSeries) {
    let fractions = slice_fractions(&series.values);
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(CHART.pie_diameter), Sense::hover());

    if !fractions.is_empty() && ui.is_rect_visible(rect) {
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let radius = rect.width().min(rect.height()) * 0.5 - 4.0;

        // 12 o'clock start, clockwise
        let mut start_angle = -std::f64::consts::FRAC_PI_2;
        for (i, fraction) in fractions.iter().enumerate() {
            let sweep = fraction * std::f64::consts::TAU;
            let color = CHART.pie_palette[i % CHART.pie_palette.len()];
            painter.add(Shape::mesh(slice_mesh(center, radius, start_angle, sweep, color)));
            start_angle += sweep;
        }
    }

    swatch_legend(ui, series);
}

/// Each value's share of the total. Empty when there is nothing to draw.
fn slice_fractions(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }
    values.iter().map(|v| v / total).collect()
}

/// Triangle fan from the center. Arc resolution scales with the sweep so a
/// full circle stays smooth and a sliver does not waste vertices.
fn slice_mesh(center: Pos2, radius: f32, start: f64, sweep: f64, color: eframe::egui::Color32) -> Mesh {
    let segments = ((sweep / std::f64::consts::TAU * 96.0).ceil() as usize).max(1);

    let mut mesh = Mesh::default();
    mesh.colored_vertex(center, color);
    for s in 0..=segments {
        let angle = start + sweep * s as f64 / segments as f64;
        let dir = Vec2::new(angle.cos() as f32, angle.sin() as f32);
        mesh.colored_vertex(center + dir * radius, color);
    }
    for s in 0..segments as u32 {
        mesh.add_triangle(0, s + 1, s + 2);
    }
    mesh
}

fn swatch_legend(ui: &mut Ui, series: &ChartSeries) {
    ui.horizontal_wrapped(|ui| {
        for (i, label) in series.labels.iter().enumerate() {
            let color = CHART.pie_palette[i % CHART.pie_palette.len()];
            let (swatch, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
            ui.painter().rect_filled(swatch, CornerRadius::same(2), color);
            ui.label(
                RichText::new(label)
                    .small()
                    .color(UI_CONFIG.colors.label),
            );
            ui.add_space(8.0);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothing_preserves_endpoints_and_knots() {
        let values = [2.0, 8.0, 3.0, 5.0];
        let points = smoothed_points(&values, 0.3, 10);

        assert_eq!(points.first().unwrap(), &[0.0, 2.0]);
        assert_eq!(points.last().unwrap(), &[3.0, 5.0]);
        // every knot appears exactly at its integer x with its own value
        for (i, &v) in values.iter().enumerate() {
            assert!(
                points
                    .iter()
                    .any(|p| p[0] == i as f64 && (p[1] - v).abs() < 1e-12)
            );
        }
        assert_eq!(points.len(), (values.len() - 1) * 10 + 1);
    }

    #[test]
    fn short_series_fall_back_to_straight_points() {
        assert!(smoothed_points(&[], 0.3, 10).is_empty());
        assert_eq!(smoothed_points(&[4.0], 0.3, 10), vec![[0.0, 4.0]]);
        assert_eq!(
            smoothed_points(&[4.0, 6.0], 0.3, 10),
            vec![[0.0, 4.0], [1.0, 6.0]]
        );
    }

    #[test]
    fn zero_tension_is_a_polyline() {
        let values = [1.0, 5.0, 2.0];
        let points = smoothed_points(&values, 0.0, 4);
        // with no tangents the Hermite basis reduces to linear interpolation
        assert!((points[2][1] - 3.0).abs() < 1e-12); // midpoint of 1..5
    }

    #[test]
    fn fractions_partition_the_whole() {
        let fractions = slice_fractions(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(fractions.len(), 4);
        assert!((fractions.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!((fractions[3] - 0.4).abs() < 1e-12);
    }

    #[test]
    fn empty_or_zero_values_draw_no_slices() {
        assert!(slice_fractions(&[]).is_empty());
        assert!(slice_fractions(&[0.0, 0.0]).is_empty());
    }

    #[test]
    fn slice_mesh_is_a_closed_fan() {
        let mesh = slice_mesh(
            Pos2::new(0.0, 0.0),
            10.0,
            0.0,
            std::f64::consts::TAU,
            eframe::egui::Color32::RED,
        );
        // center + (segments + 1) rim vertices, 3 indices per triangle
        assert_eq!(mesh.vertices.len(), 98);
        assert_eq!(mesh.indices.len(), 96 * 3);
    }

    #[test]
    fn long_titles_are_truncated_for_the_axis() {
        assert_eq!(truncate_label("Short"), "Short");
        let truncated = truncate_label("Essence Mascara Lash Princess");
        assert_eq!(truncated.chars().count(), CHART.axis_label_max_chars);
        assert!(truncated.ends_with('…'));
    }
}
