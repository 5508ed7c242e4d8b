//! Order pricing and receipts.
//!
//! Turns a selected assortment into a formatted total, an order number and a
//! plain-text receipt file. Writing the receipt is the only IO in the domain
//! crates.

pub mod config;
pub mod order;
pub mod receipt;

pub use config::ReceiptConfig;
pub use order::OrderService;
pub use receipt::{ReceiptOutcome, render_receipt};
