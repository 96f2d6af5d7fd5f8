use thiserror::Error;
use web_time::Instant;

use crate::config::CATALOG;
use crate::models::{CatalogPage, Product};

/// Failure taxonomy for the catalog boundary. Either way the panel stays in
/// its empty pre-load state; the distinction only matters to the operator
/// reading the log.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network failure or non-2xx status
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Body arrived but does not match the expected listing shape
    #[error("catalog response shape mismatch: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

/// Abstract interface for fetching the product catalog.
#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch up to the configured page limit of products.
    async fn fetch_catalog(&self) -> anyhow::Result<Vec<Product>>;
}

pub struct DummyJsonProvider {
    client: reqwest::Client,
    url: String,
}

impl DummyJsonProvider {
    pub fn new(override_url: Option<&str>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: CATALOG.request_url(override_url),
        }
    }

    /// One GET against the listing endpoint. Non-2xx is an error, and the
    /// body is parsed into the explicit listing schema so that a shape
    /// mismatch surfaces as `CatalogError::InvalidResponse` instead of a
    /// fault later, mid-derivation.
    pub async fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
        let started = Instant::now();
        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let page: CatalogPage = serde_json::from_str(&body)?;
        log::info!(
            "catalog fetch: {} products in {:.0}ms",
            page.products.len(),
            started.elapsed().as_secs_f64() * 1000.0
        );
        Ok(page.products)
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait]
impl CatalogProvider for DummyJsonProvider {
    async fn fetch_catalog(&self) -> anyhow::Result<Vec<Product>> {
        Ok(self.fetch().await?)
    }
}
