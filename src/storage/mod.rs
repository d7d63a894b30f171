//! Durable key-value persistence substrate.
//!
//! The cart and the catalog cache each own one logical record in an
//! origin-scoped key-value store, rewritten wholesale on every write.
//! The two records are independent keys with no cross-key transaction:
//! an interrupted process may leave one updated and not the other, which
//! is acceptable because they are never read jointly.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::Result;

/// Key holding the serialized cart record.
pub const CART_KEY: &str = "cart-storage";

/// Key holding the serialized catalog entry set.
pub const CATALOG_KEY: &str = "products-cache";

/// Sidecar key holding the catalog fetch timestamp (milliseconds, as a
/// decimal string).
pub const CATALOG_TIME_KEY: &str = "products-cache-time";

/// String-valued durable key-value storage.
///
/// Implementations are whole-record: `set` replaces the full value for a
/// key, there is no partial update. A missing key reads as `Ok(None)`;
/// an unreadable backend is a [`BodegaError::Storage`](crate::BodegaError::Storage)
/// surfaced to the caller rather than swallowed.
pub trait Storage: Send + Sync {
    /// Read the value for `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value for `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Deleting an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<()>;
}
