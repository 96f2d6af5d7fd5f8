mod panel;
mod root;

pub use panel::ChartPanel;
pub use root::App;
