use anyhow::{Context, Result};
use clap::Parser;
use tabled::{Table, Tabled};

use product_pulse::data::{CatalogProvider, DummyJsonProvider};
use product_pulse::{ChartSeries, Cli, FilterOptions, FilterSelection, Product};

#[derive(Tabled)]
struct DimensionRow {
    dimension: &'static str,
    value: String,
    products: usize,
}

#[derive(Tabled)]
struct SeriesRow {
    label: String,
    price: String,
}

/// Operator tool: fetch the catalog once and print what the dashboard
/// would see, without starting the GUI. Useful for checking the endpoint
/// and for reproducing fetch failures outside the panel.
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Cli::parse();
    let provider = DummyJsonProvider::new(args.products_url.as_deref());
    let products = provider
        .fetch_catalog()
        .await
        .context("Catalog fetch failed. Check the endpoint (see --products-url).")?;

    let options = FilterOptions::scan(&products);
    let rows = dimension_rows(&products, &options);
    println!("{}", Table::new(rows));

    let series = ChartSeries::derive(&products, &FilterSelection::default());
    log::info!(
        "default series: {} of {} products",
        series.len(),
        products.len()
    );
    let preview: Vec<SeriesRow> = series
        .labels
        .iter()
        .zip(&series.values)
        .map(|(label, value)| SeriesRow {
            label: label.clone(),
            price: format!("{value:.2}"),
        })
        .collect();
    println!("{}", Table::new(preview));

    Ok(())
}

fn dimension_rows(products: &[Product], options: &FilterOptions) -> Vec<DimensionRow> {
    let mut rows = Vec::new();
    // skip the "all" sentinel in both dimensions
    for category in options.categories.iter().skip(1) {
        rows.push(DimensionRow {
            dimension: "category",
            value: category.clone(),
            products: products.iter().filter(|p| &p.category == category).count(),
        });
    }
    for brand in options.brands.iter().skip(1) {
        rows.push(DimensionRow {
            dimension: "brand",
            value: brand.clone(),
            products: products.iter().filter(|p| &p.brand == brand).count(),
        });
    }
    rows
}
