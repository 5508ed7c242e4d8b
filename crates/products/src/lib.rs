//! Products domain module.
//!
//! Catalog entries as the assortment ledger sees them: identity, name and
//! price, validated once at construction (no IO).

pub mod product;

pub use product::{Product, ProductId, RawProduct};
