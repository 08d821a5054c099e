//! Domain error model.

use thiserror::Error;

/// Message carried when a stock movement quantity is zero or negative.
pub const QUANTITY_MUST_BE_POSITIVE: &str = "quantity must be positive";

/// Message carried when a withdrawal exceeds the available stock.
pub const INSUFFICIENT_STOCK: &str = "insufficient stock";

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// These are contract violations raised by entity methods (e.g. a stock
/// mutation with a non-positive quantity). Business outcomes such as "product
/// not found" are not errors; services report them through return values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument violated the method contract. `Display` is the bare message.
    #[error("{0}")]
    InvalidArgument(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn quantity_must_be_positive() -> Self {
        Self::invalid_argument(QUANTITY_MUST_BE_POSITIVE)
    }

    pub fn insufficient_stock() -> Self {
        Self::invalid_argument(INSUFFICIENT_STOCK)
    }

    /// The human-readable message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            DomainError::InvalidArgument(msg) => msg,
        }
    }
}
