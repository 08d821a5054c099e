//! Inventory service: business rules on top of a [`ProductRepository`].
//!
//! Business-rule failures (invalid input, unknown or duplicate code, inactive
//! product, insufficient stock, stock left on delete) are reported as `false`,
//! `None` or an empty list. Nothing here returns an error or panics.
//!
//! Stock movements read the product, compute the new absolute count and push
//! it with `update_stock`. The read and the write are separate repository
//! calls; concurrent movements on one product can race between them.

use stockly_products::Product;
use stockly_products::validation::{is_valid_product, is_valid_product_code, is_valid_quantity};

use crate::repository::ProductRepository;

/// Product inventory operations over an injected repository.
#[derive(Debug)]
pub struct InventoryService<R> {
    repository: R,
}

impl<R: ProductRepository> InventoryService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Admit a new product. Returns the repository's `save` outcome.
    pub fn add_product(&self, product: &Product) -> bool {
        if !is_valid_product(product) {
            tracing::debug!(code = ?product.code(), "add_product rejected: invalid product");
            return false;
        }
        // Validation guarantees a code.
        let Some(code) = product.code() else {
            return false;
        };
        if self.repository.find_by_code(code).is_some() {
            tracing::debug!(code, "add_product rejected: code already exists");
            return false;
        }

        let saved = self.repository.save(product);
        if saved {
            tracing::info!(code, stock = product.stock, "product added");
        }
        saved
    }

    /// Delete a product. Only products with no stock left can be removed.
    pub fn remove_product(&self, code: &str) -> bool {
        if !is_valid_product_code(code) {
            tracing::debug!(code, "remove_product rejected: invalid code");
            return false;
        }
        let Some(product) = self.repository.find_by_code(code) else {
            tracing::debug!(code, "remove_product rejected: not found");
            return false;
        };
        if product.stock != 0 {
            tracing::debug!(code, stock = product.stock, "remove_product rejected: stock remaining");
            return false;
        }

        let deleted = self.repository.delete(code);
        if deleted {
            tracing::info!(code, "product removed");
        }
        deleted
    }

    /// Take `quantity` units out of an active product's stock.
    pub fn withdraw_stock(&self, code: &str, quantity: i64) -> bool {
        let Some(product) = self.movable_product(code, quantity, "withdraw_stock") else {
            return false;
        };
        if quantity > product.stock {
            tracing::debug!(
                code,
                quantity,
                stock = product.stock,
                "withdraw_stock rejected: insufficient stock"
            );
            return false;
        }

        self.push_stock(code, product.stock - quantity)
    }

    /// Put `quantity` units into an active product's stock.
    pub fn deposit_stock(&self, code: &str, quantity: i64) -> bool {
        let Some(product) = self.movable_product(code, quantity, "deposit_stock") else {
            return false;
        };
        let Some(new_stock) = product.stock.checked_add(quantity) else {
            tracing::debug!(code, quantity, "deposit_stock rejected: stock overflow");
            return false;
        };

        self.push_stock(code, new_stock)
    }

    /// Overwrite the stock count. Applies to inactive products too.
    pub fn set_stock(&self, code: &str, new_stock: i64) -> bool {
        if new_stock < 0 {
            tracing::debug!(code, new_stock, "set_stock rejected: negative stock");
            return false;
        }
        if self.repository.find_by_code(code).is_none() {
            tracing::debug!(code, "set_stock rejected: not found");
            return false;
        }

        self.push_stock(code, new_stock)
    }

    /// Σ `price × stock` over active products.
    pub fn total_inventory_value(&self) -> f64 {
        self.repository
            .find_all()
            .iter()
            .filter(|p| p.active)
            .map(|p| p.price * p.stock as f64)
            .sum()
    }

    /// Σ `stock` over active products, saturating at `i64::MAX`.
    pub fn total_stock_count(&self) -> i64 {
        self.repository
            .find_all()
            .iter()
            .filter(|p| p.active)
            .fold(0i64, |total, p| total.saturating_add(p.stock))
    }

    pub fn low_stock_products(&self) -> Vec<Product> {
        self.repository.find_low_stock()
    }

    pub fn out_of_stock_products(&self) -> Vec<Product> {
        self.repository.find_out_of_stock()
    }

    /// Look up a product. Invalid codes short-circuit to `None` without a
    /// repository call.
    pub fn find_by_code(&self, code: &str) -> Option<Product> {
        if !is_valid_product_code(code) {
            return None;
        }
        self.repository.find_by_code(code)
    }

    pub fn find_by_category(&self, category: &str) -> Vec<Product> {
        self.repository.find_by_category(category)
    }

    pub fn find_by_name(&self, name: &str) -> Vec<Product> {
        self.repository.find_by_name(name)
    }

    /// Shared gate for stock movements: valid code and quantity, product
    /// present and active.
    fn movable_product(&self, code: &str, quantity: i64, op: &'static str) -> Option<Product> {
        if !is_valid_product_code(code) || !is_valid_quantity(quantity) {
            tracing::debug!(op, code, quantity, "stock movement rejected: invalid input");
            return None;
        }
        let Some(product) = self.repository.find_by_code(code) else {
            tracing::debug!(op, code, "stock movement rejected: not found");
            return None;
        };
        if !product.active {
            tracing::debug!(op, code, "stock movement rejected: product inactive");
            return None;
        }
        Some(product)
    }

    fn push_stock(&self, code: &str, new_stock: i64) -> bool {
        let updated = self.repository.update_stock(code, new_stock);
        if updated {
            tracing::info!(code, new_stock, "stock updated");
        } else {
            tracing::debug!(code, new_stock, "repository refused stock update");
        }
        updated
    }
}
