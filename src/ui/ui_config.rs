use eframe::egui::{Color32, Frame, Margin, Stroke};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub central_panel: Color32,
    pub top_panel: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(235, 235, 235),
        central_panel: Color32::from_rgb(24, 26, 30),
        top_panel: Color32::from_rgb(16, 18, 21),
    },
};

impl UiConfig {
    /// Frame for the heading bar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.top_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }
}

/// Static UI strings, kept in one place like the color theme
pub struct UiText {
    pub app_heading: &'static str,
    pub label_category: &'static str,
    pub label_brand: &'static str,
    pub bar_title: &'static str,
    pub pie_title: &'static str,
    pub line_title: &'static str,
    pub bar_dataset: &'static str,
    pub line_dataset: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_heading: "Product Dashboard",
    label_category: "Category:",
    label_brand: "Brand:",
    bar_title: "Bar Chart",
    pie_title: "Pie Chart",
    line_title: "Line Chart",
    bar_dataset: "Product Prices",
    line_dataset: "Price Trend",
};
