//! Cart display resolution: joining line items with catalog entries.
//!
//! The join is best-effort by identifier. A line item whose product is
//! missing from the catalog (deleted product, stale cache, cart carried
//! over from another device) still resolves: it keeps its own price
//! snapshot and simply has no name or image. A miss never fails the
//! render and never produces NaN in totals.

use crate::types::{CartItem, Product};

/// A cart line item joined with its catalog entry, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// The underlying line item.
    pub item: CartItem,
    /// Catalog display name, when the product was found.
    pub name: Option<String>,
    /// Catalog image URL, when the product was found and has one.
    pub image: Option<String>,
    /// Unit price used for display and totals. Always the line item's
    /// snapshot, even when the catalog entry carries a newer price.
    pub unit_price: f64,
}

impl CartLine {
    /// `unit_price * quantity` for this line.
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.item.quantity)
    }
}

/// Resolve cart line items against the given catalog entries.
///
/// Output order matches the input line-item order.
pub fn resolve_lines(items: &[CartItem], catalog: &[Product]) -> Vec<CartLine> {
    items
        .iter()
        .map(|item| {
            let entry = catalog.iter().find(|p| p.matches_id(&item.product_id));
            CartLine {
                name: entry.map(|p| p.name.clone()),
                image: entry.and_then(|p| p.display_image().map(str::to_string)),
                unit_price: item.price,
                item: item.clone(),
            }
        })
        .collect()
}
