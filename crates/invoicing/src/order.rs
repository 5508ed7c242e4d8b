use chrono::{DateTime, Local, TimeZone};

use shopcheck_core::{DomainError, DomainResult};
use shopcheck_inventory::Assortment;

use crate::config::ReceiptConfig;
use crate::receipt::{ReceiptOutcome, render_receipt, write_receipt};

const ORDER_NUMBER_FORMAT: &str = "%Y%m%d%H%M%S";

/// Stateless order operations: pricing, numbering and receipts.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderService;

impl OrderService {
    /// Order total with two decimals and a comma separator (`137,97`).
    pub fn get_order_price(assortment: Option<&Assortment>) -> DomainResult<String> {
        Self::get_order_price_with(assortment, &ReceiptConfig::default())
    }

    pub fn get_order_price_with(
        assortment: Option<&Assortment>,
        config: &ReceiptConfig,
    ) -> DomainResult<String> {
        let assortment =
            assortment.ok_or_else(|| DomainError::null_reference("assortment is missing"))?;
        Ok(assortment.total()?.format_fixed(config.decimal_separator))
    }

    /// `yyyyMMddHHmmss` for the current local time.
    ///
    /// Two calls within the same second return the same number.
    pub fn get_order_number() -> String {
        Self::order_number_at(&Local::now())
    }

    pub fn order_number_at<Tz>(at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: core::fmt::Display,
    {
        at.format(ORDER_NUMBER_FORMAT).to_string()
    }

    /// Validate the order and write `checks/<digits of order number>.txt`.
    pub fn create_order_check(
        selected: Option<&Assortment>,
        order_number: Option<&str>,
    ) -> DomainResult<ReceiptOutcome> {
        Self::create_order_check_with(selected, order_number, &ReceiptConfig::default())
    }

    /// Same as [`OrderService::create_order_check`], writing under
    /// `config.directory`.
    ///
    /// Checks run in a fixed order: blank order number, empty selection,
    /// missing selection, order number without digits. Any failure returns
    /// before the filesystem is touched.
    pub fn create_order_check_with(
        selected: Option<&Assortment>,
        order_number: Option<&str>,
        config: &ReceiptConfig,
    ) -> DomainResult<ReceiptOutcome> {
        let order_number = order_number
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| DomainError::invalid_argument("order number cannot be empty"))?;

        if selected.is_some_and(Assortment::is_empty) {
            return Err(DomainError::invalid_argument("selected assortment is empty"));
        }
        let selected =
            selected.ok_or_else(|| DomainError::invalid_argument("selected assortment is missing"))?;

        let digits: String = order_number.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(DomainError::invalid_argument("order number contains no digits"));
        }

        let text = render_receipt(selected, order_number, config)?;
        let path = config.directory.join(format!("{digits}.txt"));
        Ok(write_receipt(path, &text))
    }
}
