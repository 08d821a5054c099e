//! Inventory module.
//!
//! Stock-keeping business rules over a pluggable product repository: admitting
//! products, stock movements, guarded deletion, queries and aggregate totals.

pub mod repository;
pub mod service;

#[cfg(test)]
pub(crate) mod test_utils;

pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::InventoryService;
