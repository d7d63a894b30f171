//! Remote catalog collaborator.

use async_trait::async_trait;

use crate::types::Product;
use crate::{BodegaError, Result};

/// The remote product catalog.
///
/// Both operations are single-shot, non-cancellable calls that may fail;
/// the cache layer above performs no retries.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Full-collection scan of all product records. No pagination or
    /// filtering is pushed down.
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// Point read of one product record. `Ok(None)` when the identifier
    /// has no record (deleted product).
    async fn fetch_product(&self, id: &str) -> Result<Option<Product>>;
}

/// HTTP/JSON catalog source.
///
/// Expects `GET <base>/products` to return the full record array and
/// `GET <base>/products/<id>` a single record. Records are schema-loose;
/// deserialization coerces per [`Product`]'s contract.
pub struct HttpCatalog {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalog {
    /// Create a source against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn list_products(&self) -> Result<Vec<Product>> {
        let url = format!("{}/products", self.base_url);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(BodegaError::FetchStatus {
                status: response.status().as_u16(),
            });
        }
        let products = response.json::<Vec<Product>>().await?;
        Ok(products)
    }

    async fn fetch_product(&self, id: &str) -> Result<Option<Product>> {
        let url = format!("{}/products/{id}", self.base_url);
        let response = self.client.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(BodegaError::FetchStatus {
                status: response.status().as_u16(),
            });
        }
        let product = response.json::<Product>().await?;
        Ok(Some(product))
    }
}
