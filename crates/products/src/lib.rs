//! Products domain module.
//!
//! Catalog entities and their validation rules, implemented purely as
//! deterministic domain logic (no IO, no storage).

pub mod category;
pub mod product;
pub mod validation;

pub use category::Category;
pub use product::{Product, StockStatus};
