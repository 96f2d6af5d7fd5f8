mod provider;

pub use provider::{CatalogError, DummyJsonProvider};

#[cfg(not(target_arch = "wasm32"))]
pub use provider::CatalogProvider;

/// What the background fetch hands back to the UI thread.
pub type FetchOutcome = Result<Vec<crate::models::Product>, CatalogError>;
