use itertools::Itertools;

use crate::config::CHART;
use crate::models::Product;

/// No-filter sentinel for both selector dimensions.
pub const ALL: &str = "all";

/// The user-chosen (category, brand) pair. Both dimensions default to the
/// sentinel and are only ever changed by the selector controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub category: String,
    pub brand: String,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            category: ALL.to_string(),
            brand: ALL.to_string(),
        }
    }
}

impl FilterSelection {
    /// Category predicate then brand predicate, conjunctive. A sentinel
    /// dimension skips its predicate.
    pub fn matches(&self, product: &Product) -> bool {
        (self.category == ALL || product.category == self.category)
            && (self.brand == ALL || product.brand == self.brand)
    }
}

/// Selectable values per filter dimension: sentinel-prefixed, deduplicated,
/// in first-seen catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub brands: Vec<String>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            categories: vec![ALL.to_string()],
            brands: vec![ALL.to_string()],
        }
    }
}

impl FilterOptions {
    /// One scan per dimension over the FULL product set. Never derived from
    /// a filtered subset: narrowing one dimension must not shrink the
    /// other's options.
    pub fn scan(products: &[Product]) -> Self {
        Self {
            categories: distinct_prefixed(products.iter().map(|p| p.category.as_str())),
            brands: distinct_prefixed(products.iter().map(|p| p.brand.as_str())),
        }
    }
}

fn distinct_prefixed<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    std::iter::once(ALL)
        .chain(values.unique())
        .map(str::to_owned)
        .collect()
}

/// Index-aligned labels/values shared by all three chart views.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// Pure derivation shared by the initial load and every filter change:
    /// filter, keep at most the first `CHART.series_cap` survivors in
    /// catalog order, title -> label and price -> value. An empty subset
    /// derives an empty series, which every chart view renders as "no
    /// data" rather than an error.
    pub fn derive(products: &[Product], selection: &FilterSelection) -> Self {
        let mut labels = Vec::new();
        let mut values = Vec::new();
        for product in products
            .iter()
            .filter(|p| selection.matches(p))
            .take(CHART.series_cap)
        {
            labels.push(product.title.clone());
            values.push(product.price);
        }
        Self { labels, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
