use serde::{Deserialize, Serialize};

use stockly_core::{DomainError, DomainResult, Entity};

/// Stock level relative to the product's minimum stock.
///
/// Derived on read from `stock` and `min_stock`; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    /// No units left. Negative counts also land here.
    Out,
    /// At or below the minimum, but not empty.
    Low,
    /// Above the minimum.
    Safe,
}

impl StockStatus {
    /// Classify a `(stock, min_stock)` pair.
    pub fn of(stock: i64, min_stock: i64) -> Self {
        if stock <= 0 {
            StockStatus::Out
        } else if stock > min_stock {
            StockStatus::Safe
        } else {
            StockStatus::Low
        }
    }
}

/// Catalog product with its stock counters.
///
/// Fields are plain and mutable; validity is checked on demand by
/// [`crate::validation`] before a product is admitted to a repository.
/// Equality and hashing use `code` only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Product {
    pub code: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: f64,
    pub stock: i64,
    pub min_stock: i64,
    pub active: bool,
}

impl Product {
    /// Create an active product.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        stock: i64,
        min_stock: i64,
    ) -> Self {
        Self {
            code: Some(code.into()),
            name: Some(name.into()),
            category: Some(category.into()),
            price,
            stock,
            min_stock,
            active: true,
        }
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn stock_status(&self) -> StockStatus {
        StockStatus::of(self.stock, self.min_stock)
    }

    pub fn is_stock_out(&self) -> bool {
        self.stock_status() == StockStatus::Out
    }

    pub fn is_stock_low(&self) -> bool {
        self.stock_status() == StockStatus::Low
    }

    pub fn is_stock_safe(&self) -> bool {
        self.stock_status() == StockStatus::Safe
    }

    /// Remove `quantity` units from stock.
    ///
    /// Does not look at `active`; gating inactive products is the caller's job.
    pub fn reduce_stock(&mut self, quantity: i64) -> DomainResult<()> {
        ensure_positive(quantity)?;
        if quantity > self.stock {
            return Err(DomainError::insufficient_stock());
        }
        self.stock -= quantity;
        Ok(())
    }

    /// Add `quantity` units to stock.
    pub fn increase_stock(&mut self, quantity: i64) -> DomainResult<()> {
        ensure_positive(quantity)?;
        self.stock = self
            .stock
            .checked_add(quantity)
            .ok_or_else(|| DomainError::invalid_argument("stock overflow"))?;
        Ok(())
    }

    /// Price of `quantity` units.
    pub fn compute_total_price(&self, quantity: i64) -> DomainResult<f64> {
        ensure_positive(quantity)?;
        Ok(self.price * quantity as f64)
    }
}

fn ensure_positive(quantity: i64) -> DomainResult<()> {
    if quantity <= 0 {
        return Err(DomainError::quantity_must_be_positive());
    }
    Ok(())
}

impl Entity for Product {
    type Id = Option<String>;

    fn id(&self) -> &Self::Id {
        &self.code
    }
}

stockly_core::impl_identity_eq!(Product);

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Product{{code={}, name={}, category={}, price={}, stock={}, min_stock={}, active={}}}",
            quoted(self.code()),
            quoted(self.name()),
            quoted(self.category()),
            self.price,
            self.stock,
            self.min_stock,
            self.active
        )
    }
}

/// Render an optional string as `'value'`, or `null` when absent.
pub(crate) fn quoted(value: Option<&str>) -> String {
    match value {
        Some(v) => format!("'{v}'"),
        None => "null".to_string(),
    }
}
