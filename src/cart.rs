//! Durable shopping-cart store.
//!
//! [`CartStore`] owns the canonical line-item collection for one shopper
//! profile. It hydrates from the `cart-storage` record on open and
//! rewrites that record after every mutation; the in-memory collection
//! is authoritative as soon as a mutator returns, with the storage write
//! completing synchronously before it does.
//!
//! Mutations are total over well-formed input: the only failure channel
//! is the durable-storage write, which propagates to the caller
//! unhandled (quota and corruption faults are UI-layer concerns).

use std::sync::Arc;

use tracing::debug;

use crate::storage::{CART_KEY, Storage};
use crate::types::{CartItem, CartState};
use crate::Result;

/// The shopper's in-progress selection, persisted across sessions.
///
/// Construct one per application start via [`CartStore::open`] (or
/// through [`Bodega::builder`](crate::Bodega::builder)) and pass it by
/// reference to consumers; there is no global singleton.
pub struct CartStore {
    storage: Arc<dyn Storage>,
    items: Vec<CartItem>,
}

impl CartStore {
    /// Open the cart, hydrating from durable storage.
    ///
    /// A missing record means a first use in this profile and yields an
    /// empty cart. A corrupt record is a storage fault and propagates.
    pub fn open(storage: Arc<dyn Storage>) -> Result<Self> {
        let items = match storage.get(CART_KEY)? {
            Some(raw) => serde_json::from_str::<CartState>(&raw)?.items,
            None => Vec::new(),
        };
        debug!(count = items.len(), "hydrated cart from storage");
        Ok(Self { storage, items })
    }

    /// Add a line item, merging on identity.
    ///
    /// An existing entry with the same `(product_id, variant_id)` has its
    /// quantity incremented by `item.quantity` in place; otherwise the
    /// item is appended. No upper bound on quantity is enforced. A
    /// zero-quantity item is normalized away: adding it to an absent
    /// identity stores nothing, and merging it changes nothing.
    pub fn add_item(&mut self, item: CartItem) -> Result<()> {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.is_identity(&item.product_id, &item.variant_id))
        {
            existing.quantity += item.quantity;
        } else if item.quantity > 0 {
            self.items.push(item);
        } else {
            return Ok(());
        }
        self.persist()
    }

    /// Remove the line item with the given identity.
    ///
    /// Removing an absent identity is a no-op, not an error.
    pub fn remove_item(&mut self, product_id: &str, variant_id: &str) -> Result<()> {
        let before = self.items.len();
        self.items.retain(|i| !i.is_identity(product_id, variant_id));
        if self.items.len() == before {
            return Ok(());
        }
        self.persist()
    }

    /// Set the quantity of the line item with the given identity.
    ///
    /// A quantity of 0 removes the item — the cart never retains a
    /// zero-quantity entry. An absent identity is a no-op.
    pub fn update_quantity(
        &mut self,
        product_id: &str,
        variant_id: &str,
        quantity: u32,
    ) -> Result<()> {
        if quantity == 0 {
            return self.remove_item(product_id, variant_id);
        }
        let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.is_identity(product_id, variant_id))
        else {
            return Ok(());
        };
        existing.quantity = quantity;
        self.persist()
    }

    /// Empty the cart unconditionally. Used after a successful order
    /// placement.
    pub fn clear(&mut self) -> Result<()> {
        self.items.clear();
        self.persist()
    }

    /// The current line items, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no line items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all line items.
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// A by-value copy of the current state, as persisted.
    pub fn state(&self) -> CartState {
        CartState {
            items: self.items.clone(),
        }
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string(&self.state())?;
        self.storage.set(CART_KEY, &json)
    }
}
