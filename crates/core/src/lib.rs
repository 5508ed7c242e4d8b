//! `shopcheck-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the assortment,
//! selection and order crates (no IO).

pub mod entity;
pub mod error;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use money::Price;
pub use value_object::ValueObject;
