//! Bodega - client-side storefront core
//!
//! This crate provides the invariant-preserving state of an e-commerce
//! storefront client: a durable shopping-cart store with merge-on-insert
//! semantics, a read-through product-catalog cache with time-based
//! invalidation, and a pure order-totals utility. Everything network- or
//! render-facing stays outside; the remote catalog and the durable
//! key-value substrate are injected collaborators.
//!
//! # Example
//!
//! ```rust,no_run
//! use bodega::{Bodega, CartItem, compute_summary};
//!
//! #[tokio::main]
//! async fn main() -> bodega::Result<()> {
//!     let mut store = Bodega::builder()
//!         .catalog_url("https://shop.example/api")
//!         .build()?;
//!
//!     store.cart_mut().add_item(CartItem::new("ring-1", "size-7", 1, 1299.0))?;
//!
//!     let products = store.catalog().get_catalog().await?;
//!     let lines = bodega::resolve_lines(store.cart().items(), &products);
//!     let summary = compute_summary(store.cart().items());
//!
//!     println!("{} lines, total {}", lines.len(), summary.total);
//!     Ok(())
//! }
//! ```

pub mod cart;
pub mod catalog;
pub mod display;
pub mod error;
pub mod storage;
pub mod store;
pub mod summary;
pub mod telemetry;
pub mod types;

// Re-export main types at crate root
pub use cart::CartStore;
pub use catalog::{CatalogCache, CatalogSource, DEFAULT_TTL, HttpCatalog};
pub use display::{CartLine, resolve_lines};
pub use error::{BodegaError, Result};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{Bodega, BodegaBuilder};
pub use summary::{FLAT_SHIPPING, OrderSummary, TAX_RATE, compute_summary};
pub use types::{CartItem, CartState, Product};
