//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity; two instances with the same attributes are
/// interchangeable. They are immutable: "changing" one means building a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Price { cents: u64 }
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price { cents: 1599 }, Price { cents: 1599 });
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
