mod charts;
mod panels;
mod styles;
mod ui_config;

pub(crate) use charts::render_charts;
pub(crate) use panels::{FilterEvent, FilterPanel, Panel};
pub(crate) use styles::install_visuals;
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
