//! Sales selection module.
//!
//! Moves chosen quantities from the available stock ledger into the order
//! being assembled, enforcing stock limits (no IO).

pub mod selection;

pub use selection::SelectionService;
