mod product;
mod series;

pub use product::{CatalogPage, Product};
pub use series::{ALL, ChartSeries, FilterOptions, FilterSelection};
