//! Recording test double for [`ProductRepository`].
//!
//! Lookups answer from a stubbed product table that never changes; mutations
//! return configured outcomes. Every call is recorded so tests can assert what
//! the service did (and did not) ask the repository to do.

use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

use stockly_products::Product;

use crate::repository::ProductRepository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryCall {
    FindByCode(String),
    Save(String),
    UpdateStock(String, i64),
    Delete(String),
    FindAll,
    FindLowStock,
    FindOutOfStock,
    FindByCategory(String),
    FindByName(String),
}

#[derive(Debug, Default)]
pub struct MockProductRepository {
    by_code: RwLock<HashMap<String, Product>>,
    all: RwLock<Vec<Product>>,
    low_stock: RwLock<Vec<Product>>,
    out_of_stock: RwLock<Vec<Product>>,
    by_category: RwLock<HashMap<String, Vec<Product>>>,
    by_name: RwLock<HashMap<String, Vec<Product>>>,
    save_result: RwLock<bool>,
    update_result: RwLock<bool>,
    delete_result: RwLock<bool>,
    calls: Mutex<Vec<RepositoryCall>>,
}

impl MockProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stub `find_by_code` to return this product for its code.
    pub fn with_product(self, product: Product) -> Self {
        let code = product.code().unwrap_or_default().to_string();
        self.by_code.write().unwrap().insert(code, product);
        self
    }

    pub fn with_all(self, products: Vec<Product>) -> Self {
        *self.all.write().unwrap() = products;
        self
    }

    pub fn with_low_stock(self, products: Vec<Product>) -> Self {
        *self.low_stock.write().unwrap() = products;
        self
    }

    pub fn with_out_of_stock(self, products: Vec<Product>) -> Self {
        *self.out_of_stock.write().unwrap() = products;
        self
    }

    pub fn with_category(self, category: &str, products: Vec<Product>) -> Self {
        self.by_category
            .write()
            .unwrap()
            .insert(category.to_string(), products);
        self
    }

    pub fn with_name(self, name: &str, products: Vec<Product>) -> Self {
        self.by_name.write().unwrap().insert(name.to_string(), products);
        self
    }

    pub fn save_returns(self, result: bool) -> Self {
        *self.save_result.write().unwrap() = result;
        self
    }

    pub fn update_returns(self, result: bool) -> Self {
        *self.update_result.write().unwrap() = result;
        self
    }

    pub fn delete_returns(self, result: bool) -> Self {
        *self.delete_result.write().unwrap() = result;
        self
    }

    pub fn calls(&self) -> Vec<RepositoryCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn was_called(&self, call: &RepositoryCall) -> bool {
        self.calls.lock().unwrap().contains(call)
    }

    pub fn saves(&self) -> usize {
        self.count(|c| matches!(c, RepositoryCall::Save(_)))
    }

    pub fn stock_updates(&self) -> usize {
        self.count(|c| matches!(c, RepositoryCall::UpdateStock(..)))
    }

    pub fn lookups(&self) -> usize {
        self.count(|c| matches!(c, RepositoryCall::FindByCode(_)))
    }

    pub fn deletes(&self) -> usize {
        self.count(|c| matches!(c, RepositoryCall::Delete(_)))
    }

    fn count(&self, predicate: impl Fn(&RepositoryCall) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| predicate(c)).count()
    }

    fn record(&self, call: RepositoryCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl ProductRepository for MockProductRepository {
    fn find_by_code(&self, code: &str) -> Option<Product> {
        self.record(RepositoryCall::FindByCode(code.to_string()));
        self.by_code.read().unwrap().get(code).cloned()
    }

    fn save(&self, product: &Product) -> bool {
        let code = product.code().unwrap_or_default().to_string();
        self.record(RepositoryCall::Save(code));
        *self.save_result.read().unwrap()
    }

    fn update_stock(&self, code: &str, new_stock: i64) -> bool {
        self.record(RepositoryCall::UpdateStock(code.to_string(), new_stock));
        *self.update_result.read().unwrap()
    }

    fn delete(&self, code: &str) -> bool {
        self.record(RepositoryCall::Delete(code.to_string()));
        *self.delete_result.read().unwrap()
    }

    fn find_all(&self) -> Vec<Product> {
        self.record(RepositoryCall::FindAll);
        self.all.read().unwrap().clone()
    }

    fn find_low_stock(&self) -> Vec<Product> {
        self.record(RepositoryCall::FindLowStock);
        self.low_stock.read().unwrap().clone()
    }

    fn find_out_of_stock(&self) -> Vec<Product> {
        self.record(RepositoryCall::FindOutOfStock);
        self.out_of_stock.read().unwrap().clone()
    }

    fn find_by_category(&self, category: &str) -> Vec<Product> {
        self.record(RepositoryCall::FindByCategory(category.to_string()));
        self.by_category
            .read()
            .unwrap()
            .get(category)
            .cloned()
            .unwrap_or_default()
    }

    fn find_by_name(&self, name_pattern: &str) -> Vec<Product> {
        self.record(RepositoryCall::FindByName(name_pattern.to_string()));
        self.by_name
            .read()
            .unwrap()
            .get(name_pattern)
            .cloned()
            .unwrap_or_default()
    }
}
