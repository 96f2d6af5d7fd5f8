#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod models;
mod ui;

// Re-export commonly used types outside of crate (for catalog_probe.rs)
pub use app::App;
pub use data::DummyJsonProvider;
pub use models::{ChartSeries, FilterOptions, FilterSelection, Product};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Override the product listing endpoint (for development stub servers)
    #[arg(long)]
    pub products_url: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
