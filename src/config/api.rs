/// Remote catalog endpoint. One GET per session, no auth, no extra headers.
/// No client timeout: a pending fetch just leaves the panel in its empty
/// default state until the response lands.
pub struct CatalogApiConfig {
    pub products_url: &'static str,
    /// Upper bound on items requested per listing call
    pub page_limit: u32,
}

pub const CATALOG: CatalogApiConfig = CatalogApiConfig {
    products_url: "https://dummyjson.com/products",
    page_limit: 100,
};

impl CatalogApiConfig {
    /// Full request URL, with an optional base override from the CLI.
    pub fn request_url(&self, override_url: Option<&str>) -> String {
        let base = override_url.unwrap_or(self.products_url);
        format!("{}?limit={}", base, self.page_limit)
    }
}
