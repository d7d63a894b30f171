//! Builder for configuring store instances.

use std::sync::Arc;
use std::time::Duration;

use crate::cart::CartStore;
use crate::catalog::{CatalogCache, CatalogSource, HttpCatalog};
use crate::storage::{FileStorage, Storage};
use crate::{BodegaError, Result};

/// The storefront core: cart store plus catalog cache, constructed once
/// per application start.
pub struct Bodega {
    cart: CartStore,
    catalog: CatalogCache,
}

impl Bodega {
    /// Create a new builder for configuring the store.
    pub fn builder() -> BodegaBuilder {
        BodegaBuilder::new()
    }

    /// The shopper's cart.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Mutable access to the cart for UI actions.
    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// The product-catalog cache.
    pub fn catalog(&self) -> &CatalogCache {
        &self.catalog
    }
}

/// Builder for configuring store instances.
pub struct BodegaBuilder {
    storage: Option<Arc<dyn Storage>>,
    source: Option<Arc<dyn CatalogSource>>,
    catalog_url: Option<String>,
    cache_ttl: Option<Duration>,
}

impl BodegaBuilder {
    pub fn new() -> Self {
        Self {
            storage: None,
            source: None,
            catalog_url: None,
            cache_ttl: None,
        }
    }

    /// Use the given storage backend. Defaults to the file-backed
    /// default profile when not set.
    pub fn storage(mut self, storage: impl Storage + 'static) -> Self {
        self.storage = Some(Arc::new(storage));
        self
    }

    /// Point the catalog at an HTTP/JSON source at the given base URL.
    pub fn catalog_url(mut self, url: impl Into<String>) -> Self {
        self.catalog_url = Some(url.into());
        self
    }

    /// Use a custom catalog source. Takes precedence over
    /// [`catalog_url`](Self::catalog_url).
    pub fn catalog_source(mut self, source: impl CatalogSource + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// Override the catalog snapshot TTL (default: 5 minutes).
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    /// Build the store, hydrating the cart from durable storage.
    ///
    /// Fails when no catalog source is configured, or when the persisted
    /// cart record cannot be read.
    pub fn build(self) -> Result<Bodega> {
        let storage = self
            .storage
            .unwrap_or_else(|| Arc::new(FileStorage::default_profile()));

        let source: Arc<dyn CatalogSource> = match (self.source, self.catalog_url) {
            (Some(source), _) => source,
            (None, Some(url)) => Arc::new(HttpCatalog::new(url)),
            (None, None) => {
                return Err(BodegaError::Configuration(
                    "no catalog source configured".to_string(),
                ));
            }
        };

        let cart = CartStore::open(storage.clone())?;
        let mut catalog = CatalogCache::new(storage, source);
        if let Some(ttl) = self.cache_ttl {
            catalog = catalog.with_ttl(ttl);
        }

        Ok(Bodega { cart, catalog })
    }
}

impl Default for BodegaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn build_without_catalog_source_is_rejected() {
        let result = Bodega::builder().storage(MemoryStorage::new()).build();
        assert!(matches!(result, Err(BodegaError::Configuration(_))));
    }

    #[test]
    fn build_with_url_starts_empty() {
        let bodega = Bodega::builder()
            .storage(MemoryStorage::new())
            .catalog_url("http://localhost:9/api")
            .build()
            .unwrap();
        assert!(bodega.cart().is_empty());
    }

    #[test]
    fn ttl_override_is_applied() {
        let bodega = Bodega::builder()
            .storage(MemoryStorage::new())
            .catalog_url("http://localhost:9/api")
            .cache_ttl(Duration::from_secs(30))
            .build()
            .unwrap();
        assert_eq!(bodega.catalog().ttl(), Duration::from_secs(30));
    }
}
