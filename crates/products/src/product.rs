use serde::{Deserialize, Serialize};

use shopcheck_core::{DomainError, DomainResult, Entity, Price};

/// Catalog identifier of a product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Validate a raw catalog id (catalog rows carry signed integers).
    pub fn try_from_raw(raw: i64) -> DomainResult<Self> {
        if raw < 0 {
            return Err(DomainError::invalid_argument("product id cannot be negative"));
        }
        u32::try_from(raw)
            .map(Self)
            .map_err(|_| DomainError::invalid_argument(format!("product id {raw} is out of range")))
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A product as supplied by the catalog.
///
/// Equality, hashing and ordering use the whole `(id, name, price)` triple:
/// two records with the same id but a different price are different ledger
/// keys. Fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawProduct")]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
}

/// Unvalidated product record, as it arrives from a catalog file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawProduct {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl Product {
    /// Build a product from raw catalog values.
    ///
    /// Fails with `InvalidArgument` for a negative id, an empty name or a
    /// negative price.
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> DomainResult<Self> {
        let id = ProductId::try_from_raw(id)?;
        let price = Price::from_decimal(price)?;
        Self::with_price(id, name, price)
    }

    pub fn with_price(id: ProductId, name: impl Into<String>, price: Price) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::invalid_argument("product name cannot be empty"));
        }
        Ok(Self { id, name, price })
    }

    /// Duplicate an existing product; fails with `NullReference` when there is
    /// none to copy.
    pub fn copy_from(other: Option<&Product>) -> DomainResult<Self> {
        other
            .cloned()
            .ok_or_else(|| DomainError::null_reference("no product to copy"))
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl TryFrom<RawProduct> for Product {
    type Error = DomainError;

    fn try_from(raw: RawProduct) -> Result<Self, Self::Error> {
        Product::new(raw.id, raw.name, raw.price)
    }
}

/// Diagnostic form, one attribute per line.
impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "productID: {}", self.id)?;
        writeln!(f, "name: {}", self.name)?;
        writeln!(f, "price: {}", self.price)
    }
}
