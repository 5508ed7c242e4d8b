//! `shopcheck-till` — command-line host for the checkout flow.
//!
//! Loads the available stock from a JSON catalog, applies `name=qty`
//! selections, prices the order and writes its receipt.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};

use shopcheck_inventory::{Assortment, AssortmentEntry};
use shopcheck_invoicing::{OrderService, ReceiptConfig, ReceiptOutcome};
use shopcheck_sales::SelectionService;

/// Environment variable naming the receipt directory.
pub const RECEIPT_DIR_VAR: &str = "SHOPCHECK_RECEIPT_DIR";

/// Result of one checkout run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    pub order_number: String,
    pub total: String,
    pub receipt: ReceiptOutcome,
}

/// Receipt settings from the environment, falling back to defaults.
pub fn receipt_config_from_env() -> ReceiptConfig {
    receipt_config_from_dir(std::env::var(RECEIPT_DIR_VAR).ok())
}

/// Receipt settings for an optional directory. Missing or blank logs a
/// warning and uses the default directory.
pub fn receipt_config_from_dir(dir: Option<String>) -> ReceiptConfig {
    match dir {
        Some(dir) if !dir.trim().is_empty() => ReceiptConfig::in_directory(dir),
        _ => {
            let config = ReceiptConfig::default();
            tracing::warn!(
                "{RECEIPT_DIR_VAR} not set; writing receipts to {}",
                config.directory.display()
            );
            config
        }
    }
}

/// Parse a `name=qty` argument. The last `=` splits, so names may contain `=`.
pub fn parse_selection(arg: &str) -> anyhow::Result<(String, i64)> {
    let Some((name, qty)) = arg.rsplit_once('=') else {
        bail!("expected <name>=<qty>, got {arg:?}");
    };
    let qty = qty
        .trim()
        .parse::<i64>()
        .with_context(|| format!("invalid quantity in {arg:?}"))?;
    Ok((name.trim().to_string(), qty))
}

/// Load the available stock from a JSON array of `{product, quantity}` entries.
pub fn load_catalog(path: &Path) -> anyhow::Result<Assortment> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let entries: Vec<AssortmentEntry> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse catalog {}", path.display()))?;
    Ok(Assortment::from_entries(entries)?)
}

/// Run the whole checkout for `selections` against `available`.
pub fn checkout(
    available: &Assortment,
    selections: &[(String, i64)],
    config: &ReceiptConfig,
) -> anyhow::Result<Checkout> {
    let mut selected = Assortment::new();
    for (name, qty) in selections {
        SelectionService::fill_assortment_with_selected_product(
            Some(name.as_str()),
            *qty,
            Some(available),
            Some(&mut selected),
        )
        .with_context(|| format!("cannot select {qty} x {name}"))?;
    }

    let total = OrderService::get_order_price_with(Some(&selected), config)?;
    let order_number = OrderService::get_order_number();
    let receipt = OrderService::create_order_check_with(Some(&selected), Some(&order_number), config)?;

    Ok(Checkout {
        order_number,
        total,
        receipt,
    })
}

/// Parse command-line arguments: `<catalog.json> <name=qty>...`.
pub fn parse_args(args: &[String]) -> anyhow::Result<(PathBuf, Vec<(String, i64)>)> {
    let Some((catalog, selections)) = args.split_first() else {
        bail!("usage: shopcheck-till <catalog.json> <name=qty>...");
    };
    let selections = selections
        .iter()
        .map(|s| parse_selection(s))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok((PathBuf::from(catalog), selections))
}
