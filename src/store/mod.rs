//! Store assembly: the explicit application-level handle.
//!
//! One [`Bodega`] is constructed at application start and passed by
//! reference to consumers. It owns the cart store and the catalog cache,
//! which share a storage backend but keep independent records.

mod builder;

pub use builder::{Bodega, BodegaBuilder};
