//! Inventory domain module.
//!
//! The quantity ledger used both for catalog-wide stock ("available") and for
//! the in-progress order ("selected").

pub mod assortment;

pub use assortment::{Assortment, AssortmentEntry};
