//! Public types for the Bodega API.

mod cart;
mod product;

pub use cart::{CartItem, CartState};
pub use product::Product;
