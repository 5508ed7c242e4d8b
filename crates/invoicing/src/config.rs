//! Receipt settings.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Where receipts go and how totals are labelled.
///
/// Every field has a default, so a host can deserialize a partial table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReceiptConfig {
    /// Directory receipts are written into; created on first write.
    pub directory: PathBuf,
    /// Prefix of the final total line.
    pub total_label: String,
    pub decimal_separator: char,
}

impl Default for ReceiptConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("checks"),
            total_label: "Total: ".to_string(),
            decimal_separator: ',',
        }
    }
}

impl ReceiptConfig {
    pub fn in_directory(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            ..Self::default()
        }
    }
}
