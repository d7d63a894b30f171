//! Cart line-item types.

use serde::{Deserialize, Serialize};

/// A single line item in the shopping cart.
///
/// Identity is the `(product_id, variant_id)` pair — the cart never holds
/// two entries sharing both fields. An empty `variant_id` is a valid
/// "no variant" value, not an absent one.
///
/// `price` is a snapshot of the unit price captured when the item was
/// added. It is deliberately not a live reference to the catalog price;
/// cart display and checkout totals use this snapshot even when the
/// catalog has since changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Catalog product identifier. Not required to currently exist in
    /// the catalog cache.
    pub product_id: String,
    /// Variant identifier within the product. Empty string means "no variant".
    pub variant_id: String,
    /// Units of this line item. Always >= 1 once stored.
    pub quantity: u32,
    /// Unit price snapshot taken at add time.
    pub price: f64,
}

impl CartItem {
    /// Create a new line item.
    pub fn new(
        product_id: impl Into<String>,
        variant_id: impl Into<String>,
        quantity: u32,
        price: f64,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            variant_id: variant_id.into(),
            quantity,
            price,
        }
    }

    /// Whether this line item has the given `(product_id, variant_id)` identity.
    pub fn is_identity(&self, product_id: &str, variant_id: &str) -> bool {
        self.product_id == product_id && self.variant_id == variant_id
    }
}

/// The persisted cart record: the full line-item collection.
///
/// Rewritten wholesale under the `cart-storage` key on every mutation.
/// Insertion order is preserved but carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    /// Line items, in insertion order.
    pub items: Vec<CartItem>,
}
