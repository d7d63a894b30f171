//! Read-through product-catalog cache.
//!
//! [`CatalogCache`] serves the full product listing from a persisted
//! local snapshot while it is younger than the TTL, and otherwise
//! re-fetches the whole collection from the remote source, replacing the
//! snapshot atomically. There is no per-entry invalidation: a refresh
//! always swaps the entire entry set and its timestamp together.
//!
//! A fetch failure on a stale or absent cache surfaces as an error; the
//! stale snapshot is never served as a fallback, so "failed" and "empty
//! catalog" stay distinct, observable outcomes.

mod source;

pub use source::{CatalogSource, HttpCatalog};

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::{info, warn};

use crate::storage::{CATALOG_KEY, CATALOG_TIME_KEY, Storage};
use crate::telemetry;
use crate::types::Product;
use crate::Result;

/// Default snapshot time-to-live: 5 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Time-bounded local snapshot of the remote product catalog.
pub struct CatalogCache {
    storage: Arc<dyn Storage>,
    source: Arc<dyn CatalogSource>,
    ttl: Duration,
}

impl CatalogCache {
    /// Create a cache over the given storage and remote source, with the
    /// default 5-minute TTL.
    pub fn new(storage: Arc<dyn Storage>, source: Arc<dyn CatalogSource>) -> Self {
        Self {
            storage,
            source,
            ttl: DEFAULT_TTL,
        }
    }

    /// Override the snapshot time-to-live.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// The configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the full product listing, from the local snapshot when
    /// fresh, else via a full remote re-fetch.
    ///
    /// On a miss the fresh entry set and its fetch timestamp are
    /// persisted together before returning.
    pub async fn get_catalog(&self) -> Result<Vec<Product>> {
        if let Some(entries) = self.load_fresh(now_ms())? {
            metrics::counter!(telemetry::CATALOG_CACHE_HITS_TOTAL).increment(1);
            return Ok(entries);
        }
        metrics::counter!(telemetry::CATALOG_CACHE_MISSES_TOTAL).increment(1);

        let entries = self.source.list_products().await?;
        self.persist(&entries, now_ms())?;
        metrics::counter!(telemetry::CATALOG_REFRESHES_TOTAL).increment(1);
        info!(count = entries.len(), "refreshed product catalog");
        Ok(entries)
    }

    /// Resolve a single product, preferring the fresh local snapshot and
    /// falling back to a remote point read.
    ///
    /// `Ok(None)` means the identifier has no record anywhere — a normal
    /// outcome for a deleted product, not an error.
    pub async fn get_product(&self, id: &str) -> Result<Option<Product>> {
        if let Some(entries) = self.load_fresh(now_ms())? {
            if let Some(product) = entries.iter().find(|p| p.matches_id(id)) {
                return Ok(Some(product.clone()));
            }
        }
        self.source.fetch_product(id).await
    }

    /// Drop the persisted snapshot so the next read re-fetches.
    ///
    /// Used after catalog writes (e.g. an admin product update) to avoid
    /// serving a listing known to be outdated for up to a full TTL.
    pub fn invalidate(&self) -> Result<()> {
        self.storage.remove(CATALOG_KEY)?;
        self.storage.remove(CATALOG_TIME_KEY)
    }

    /// Load the persisted entries if the snapshot exists and is fresh.
    ///
    /// An unparseable timestamp is treated as stale (the snapshot
    /// self-heals on the next refresh); an unparseable entry set is a
    /// fault and propagates.
    fn load_fresh(&self, now_ms: u64) -> Result<Option<Vec<Product>>> {
        let Some(raw_time) = self.storage.get(CATALOG_TIME_KEY)? else {
            return Ok(None);
        };
        let Some(raw_entries) = self.storage.get(CATALOG_KEY)? else {
            return Ok(None);
        };
        let fetched_at: u64 = match raw_time.trim().parse() {
            Ok(ms) => ms,
            Err(_) => {
                warn!(raw = %raw_time, "unparseable catalog cache timestamp, treating as stale");
                return Ok(None);
            }
        };
        if !is_fresh(fetched_at, now_ms, self.ttl) {
            return Ok(None);
        }
        let entries: Vec<Product> = serde_json::from_str(&raw_entries)?;
        Ok(Some(entries))
    }

    /// Replace the persisted snapshot. Entries are written before the
    /// timestamp, so an interruption between the two leaves a snapshot
    /// that still reads as stale rather than one that reads as fresh with
    /// old entries.
    fn persist(&self, entries: &[Product], now_ms: u64) -> Result<()> {
        self.storage
            .set(CATALOG_KEY, &serde_json::to_string(entries)?)?;
        self.storage.set(CATALOG_TIME_KEY, &now_ms.to_string())
    }
}

/// Freshness predicate: a snapshot fetched at `fetched_at_ms` is fresh at
/// `now_ms` while its age is strictly below the TTL. Age exactly equal to
/// the TTL is stale.
pub(crate) fn is_fresh(fetched_at_ms: u64, now_ms: u64, ttl: Duration) -> bool {
    now_ms.saturating_sub(fetched_at_ms) < ttl.as_millis() as u64
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(5 * 60);

    #[test]
    fn fresh_strictly_inside_ttl() {
        let fetched = 1_000_000;
        assert!(is_fresh(fetched, fetched, TTL));
        assert!(is_fresh(fetched, fetched + TTL.as_millis() as u64 - 1, TTL));
    }

    #[test]
    fn stale_at_and_past_ttl() {
        let fetched = 1_000_000;
        assert!(!is_fresh(fetched, fetched + TTL.as_millis() as u64, TTL));
        assert!(!is_fresh(fetched, fetched + TTL.as_millis() as u64 + 1, TTL));
    }

    #[test]
    fn clock_regression_reads_as_fresh() {
        // A timestamp from the future (clock stepped back) must not
        // underflow; it simply reads as age zero.
        let fetched = 2_000_000;
        assert!(is_fresh(fetched, 1_000_000, TTL));
    }
}
