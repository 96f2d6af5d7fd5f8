use serde::Deserialize;

/// One product record from the catalog listing.
///
/// The upstream payload carries more fields (stock, rating, thumbnails...);
/// only what the dashboard consumes is modelled and the rest is ignored.
/// `brand` is absent on some upstream records and defaults to the empty
/// string, which the selector layer displays as "unknown".
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub brand: String,
}

/// Listing response shape: `{ "products": [...] }` plus paging fields we
/// don't read. Parsing into this schema is what turns an unexpected
/// response shape into a typed error at the boundary.
#[derive(Debug, Deserialize)]
pub struct CatalogPage {
    pub products: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "products": [
            {
                "id": 1,
                "title": "Essence Mascara Lash Princess",
                "price": 9.99,
                "category": "beauty",
                "brand": "Essence",
                "rating": 4.94,
                "stock": 5,
                "thumbnail": "https://cdn.dummyjson.com/1.png"
            },
            {
                "id": 2,
                "title": "Powder Canister",
                "price": 14.99,
                "category": "beauty"
            }
        ],
        "total": 194,
        "skip": 0,
        "limit": 100
    }"#;

    #[test]
    fn parses_listing_and_ignores_extra_fields() {
        let page: CatalogPage = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(page.products.len(), 2);
        assert_eq!(page.products[0].title, "Essence Mascara Lash Princess");
        assert_eq!(page.products[0].price, 9.99);
        assert_eq!(page.products[0].brand, "Essence");
    }

    #[test]
    fn absent_brand_defaults_to_empty() {
        let page: CatalogPage = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(page.products[1].brand, "");
        assert_eq!(page.products[1].category, "beauty");
    }

    #[test]
    fn rejects_wrong_top_level_shape() {
        let err = serde_json::from_str::<CatalogPage>(r#"{"items": []}"#);
        assert!(err.is_err());
    }

    #[test]
    fn rejects_wrong_field_type() {
        let body = r#"{"products": [{"id": "one", "title": "x", "price": 1.0, "category": "c"}]}"#;
        assert!(serde_json::from_str::<CatalogPage>(body).is_err());
    }
}
