//! Order-total computation.
//!
//! Pure and stateless: no persistence, no side effects, and the same
//! input always yields bit-identical output.

use serde::{Deserialize, Serialize};

use crate::types::CartItem;

/// Flat tax rate applied to the subtotal.
pub const TAX_RATE: f64 = 0.10;

/// Flat shipping charge, independent of distance and weight.
pub const FLAT_SHIPPING: f64 = 99.0;

/// Totals derived from a cart line-item collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Sum of `price * quantity` over all line items.
    pub subtotal: f64,
    /// `subtotal * TAX_RATE`.
    pub tax: f64,
    /// [`FLAT_SHIPPING`].
    pub shipping: f64,
    /// `subtotal + tax + shipping`.
    pub total: f64,
}

/// Compute order totals from the given line items.
///
/// Uses each item's price snapshot, never a live catalog price.
pub fn compute_summary(items: &[CartItem]) -> OrderSummary {
    let subtotal: f64 = items
        .iter()
        .map(|item| item.price * f64::from(item.quantity))
        .sum();
    let tax = subtotal * TAX_RATE;
    let shipping = FLAT_SHIPPING;
    OrderSummary {
        subtotal,
        tax,
        shipping,
        total: subtotal + tax + shipping,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vector() {
        let items = vec![
            CartItem::new("p1", "", 2, 500.0),
            CartItem::new("p2", "", 1, 1000.0),
        ];
        let summary = compute_summary(&items);
        assert_eq!(summary.subtotal, 2000.0);
        assert_eq!(summary.tax, 200.0);
        assert_eq!(summary.shipping, FLAT_SHIPPING);
        assert_eq!(summary.total, 2000.0 + 200.0 + FLAT_SHIPPING);
    }

    #[test]
    fn empty_cart_still_charges_shipping() {
        let summary = compute_summary(&[]);
        assert_eq!(summary.subtotal, 0.0);
        assert_eq!(summary.tax, 0.0);
        assert_eq!(summary.total, FLAT_SHIPPING);
    }

    #[test]
    fn idempotent_and_non_mutating() {
        let items = vec![CartItem::new("p1", "v1", 3, 19.99)];
        let before = items.clone();
        let first = compute_summary(&items);
        let second = compute_summary(&items);
        assert_eq!(first, second);
        assert_eq!(items, before);
    }
}
