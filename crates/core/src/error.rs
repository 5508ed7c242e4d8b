//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on caller contract violations (malformed input, stock
/// limits, missing references). Receipt I/O is reported separately and never
/// surfaces through this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed or missing input supplied by the caller.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested amount is larger than the tracked stock.
    #[error("insufficient stock: {available} available")]
    InsufficientStock { available: u32 },

    /// The cumulative selected amount would exceed the tracked stock.
    #[error("selection exceeds stock: {available} available")]
    SelectionExceedsStock { available: u32 },

    /// A required reference was not supplied at all.
    #[error("null reference: {0}")]
    NullReference(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn null_reference(msg: impl Into<String>) -> Self {
        Self::NullReference(msg.into())
    }

    pub fn insufficient_stock(available: u32) -> Self {
        Self::InsufficientStock { available }
    }

    pub fn selection_exceeds_stock(available: u32) -> Self {
        Self::SelectionExceedsStock { available }
    }

    /// Whether this error belongs to the invalid-argument class.
    ///
    /// Stock-limit violations are invalid arguments too; they only carry the
    /// available amount so the caller can show it.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_)
                | Self::InsufficientStock { .. }
                | Self::SelectionExceedsStock { .. }
        )
    }

    /// Stock level carried by stock-limit violations.
    pub fn available(&self) -> Option<u32> {
        match self {
            Self::InsufficientStock { available } | Self::SelectionExceedsStock { available } => {
                Some(*available)
            }
            _ => None,
        }
    }
}
