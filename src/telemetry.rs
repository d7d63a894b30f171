//! Telemetry metric name constants.
//!
//! Centralised metric names for bodega operations. Consumers install
//! their own `metrics` recorder; without a recorder installed, all
//! metric calls are no-ops.
//!
//! All metrics are prefixed with `bodega_`. Counters end in `_total`.

/// Catalog cache reads served from the persisted snapshot.
pub const CATALOG_CACHE_HITS_TOTAL: &str = "bodega_catalog_cache_hits_total";

/// Catalog cache reads that required a remote fetch (absent or stale).
pub const CATALOG_CACHE_MISSES_TOTAL: &str = "bodega_catalog_cache_misses_total";

/// Completed full catalog refreshes (remote fetch + persisted replacement).
pub const CATALOG_REFRESHES_TOTAL: &str = "bodega_catalog_refreshes_total";
