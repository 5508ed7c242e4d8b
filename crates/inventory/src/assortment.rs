use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use shopcheck_core::{DomainError, DomainResult, Entity, Price};
use shopcheck_products::{Product, ProductId};

/// One ledger line as exchanged with catalog files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssortmentEntry {
    pub product: Product,
    pub quantity: u32,
}

/// Quantity ledger: product -> non-negative quantity.
///
/// A product with quantity 0 is still tracked and is distinct from an absent
/// product. Entries iterate in product order (`id`, then `name`, then
/// `price`), so every rendering of the same ledger is identical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assortment {
    entries: BTreeMap<Product, u32>,
}

impl Assortment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from catalog entries; repeated products accumulate.
    pub fn from_entries(entries: impl IntoIterator<Item = AssortmentEntry>) -> DomainResult<Self> {
        let mut assortment = Self::new();
        for entry in entries {
            assortment.add(entry.product, entry.quantity)?;
        }
        Ok(assortment)
    }

    /// Add `amount` units of `product`, accumulating onto any tracked quantity.
    ///
    /// Fails with `InvalidArgument` when the product is missing or the amount
    /// is negative; the ledger is left untouched in that case.
    pub fn add_product(&mut self, product: Option<&Product>, amount: i64) -> DomainResult<u32> {
        let product = product.ok_or_else(|| DomainError::invalid_argument("product is missing"))?;
        if amount < 0 {
            return Err(DomainError::invalid_argument("amount cannot be negative"));
        }
        let amount = u32::try_from(amount)
            .map_err(|_| DomainError::invalid_argument(format!("amount {amount} is too large")))?;
        self.add(product.clone(), amount)
    }

    /// Typed form of [`Assortment::add_product`]. Returns the new quantity.
    pub fn add(&mut self, product: Product, amount: u32) -> DomainResult<u32> {
        let current = self.entries.get(&product).copied().unwrap_or(0);
        let updated = current.checked_add(amount).ok_or_else(|| {
            DomainError::invalid_argument(format!("quantity of {} would overflow", product.name()))
        })?;
        self.entries.insert(product, updated);
        Ok(updated)
    }

    /// Overwrite the tracked quantity of `product`.
    ///
    /// Used by the selection flow, which computes the cumulative amount itself.
    pub fn set_quantity(&mut self, product: Product, quantity: u32) {
        self.entries.insert(product, quantity);
    }

    /// Remove the first entry whose product carries `product_id`.
    ///
    /// A missing id is not an error; the outcome is logged either way.
    pub fn remove_product_by_product_id(&mut self, product_id: ProductId) -> Option<(Product, u32)> {
        let key = self.entries.keys().find(|p| p.id() == product_id).cloned();
        match key.and_then(|product| self.entries.remove_entry(&product)) {
            Some(removed) => {
                info!(%product_id, "product removed from assortment");
                Some(removed)
            }
            None => {
                warn!(%product_id, "product not found in assortment");
                None
            }
        }
    }

    /// True when nothing is tracked; zero-quantity entries still count.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, product: &Product) -> bool {
        self.entries.contains_key(product)
    }

    pub fn get(&self, product: &Product) -> Option<u32> {
        self.entries.get(product).copied()
    }

    /// Tracked quantity, 0 when the product is absent.
    pub fn quantity_of(&self, product: &Product) -> u32 {
        self.get(product).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Product, u32)> + '_ {
        self.entries.iter().map(|(p, q)| (p, *q))
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> + '_ {
        self.entries.keys()
    }

    /// First product (in ledger order) with exactly this name.
    pub fn product_by_name(&self, name: &str) -> Option<(&Product, u32)> {
        self.iter().find(|(p, _)| p.name() == name)
    }

    /// Entries whose name contains `text`, ignoring case. Empty text matches
    /// everything.
    pub fn filter_by_name(&self, text: &str) -> Vec<(&Product, u32)> {
        let needle = text.to_lowercase();
        self.iter()
            .filter(|(p, _)| p.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Names in ledger order, as a product chooser lists them.
    pub fn product_names(&self) -> Vec<&str> {
        self.products().map(Product::name).collect()
    }

    /// Exact sum of `price x quantity` over all entries.
    pub fn total(&self) -> DomainResult<Price> {
        self.iter().try_fold(Price::ZERO, |acc, (product, quantity)| {
            product
                .price()
                .checked_times(quantity)
                .and_then(|line| acc.checked_add(line))
                .ok_or_else(|| DomainError::invalid_argument("order total overflows"))
        })
    }

    pub fn to_entries(&self) -> Vec<AssortmentEntry> {
        self.iter()
            .map(|(product, quantity)| AssortmentEntry {
                product: product.clone(),
                quantity,
            })
            .collect()
    }
}

impl core::fmt::Display for Assortment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Assortment:")?;
        for (product, amount) in self.iter() {
            write!(f, "{product}amount: {amount}\n-----------\n")?;
        }
        Ok(())
    }
}
