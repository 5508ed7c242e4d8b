//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Identifier used to find the entity inside a ledger.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;

    /// True when both entities carry the same identifier, whatever their
    /// other attributes.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
