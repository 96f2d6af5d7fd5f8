//! Chart visualization configuration

use eframe::egui::Color32;

pub struct ChartConfig {
    /// Max points in any derived series (first N survivors in catalog order)
    pub series_cap: usize,

    // --- BAR VIEW ---
    pub bar_fill: Color32,
    /// Applied to `bar_fill` via linear_multiply at render time
    pub bar_fill_opacity: f32,
    /// Bar width in plot units (1.0 = touching neighbours)
    pub bar_width: f64,

    // --- PIE VIEW ---
    /// Fixed palette, cycled/truncated to the series length
    pub pie_palette: [Color32; 10],
    pub pie_diameter: f32,

    // --- LINE VIEW ---
    pub line_color: Color32,
    pub line_width: f32,
    /// Curve smoothing factor: tangent scale of the interpolated spline.
    /// 0.0 draws straight segments between points.
    pub line_tension: f64,
    /// Interpolated samples inserted per segment when smoothing
    pub line_smoothing_steps: usize,

    // --- SHARED PLOT GEOMETRY ---
    pub plot_height: f32,
    /// Long product titles are truncated to this many chars on the x-axis
    pub axis_label_max_chars: usize,
}

pub const CHART: ChartConfig = ChartConfig {
    series_cap: 10,

    bar_fill: Color32::from_rgb(54, 162, 235),
    bar_fill_opacity: 0.6,
    bar_width: 0.6,

    pie_palette: [
        Color32::from_rgb(255, 99, 132),
        Color32::from_rgb(54, 162, 235),
        Color32::from_rgb(255, 206, 86),
        Color32::from_rgb(75, 192, 192),
        Color32::from_rgb(153, 102, 255),
        Color32::from_rgb(255, 159, 64),
        Color32::from_rgb(233, 30, 99),
        Color32::from_rgb(0, 188, 212),
        Color32::from_rgb(139, 195, 74),
        Color32::from_rgb(255, 193, 7),
    ],
    pie_diameter: 280.0,

    line_color: Color32::from_rgb(75, 192, 192),
    line_width: 2.0,
    line_tension: 0.3,
    line_smoothing_steps: 12,

    plot_height: 240.0,
    axis_label_max_chars: 12,
};
