use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use stockly_products::Product;

/// Code-addressed product store consumed by the inventory service.
///
/// Calls return a definite outcome (`bool`, `Option`, `Vec`); storage failures
/// surface as `false` or an empty result rather than as errors.
pub trait ProductRepository: Send + Sync {
    fn find_by_code(&self, code: &str) -> Option<Product>;
    /// Persist a new product. `true` on success.
    fn save(&self, product: &Product) -> bool;
    /// Replace the stock count of an existing product.
    fn update_stock(&self, code: &str, new_stock: i64) -> bool;
    fn delete(&self, code: &str) -> bool;
    fn find_all(&self) -> Vec<Product>;
    fn find_low_stock(&self) -> Vec<Product>;
    fn find_out_of_stock(&self) -> Vec<Product>;
    fn find_by_category(&self, category: &str) -> Vec<Product>;
    fn find_by_name(&self, name_pattern: &str) -> Vec<Product>;
}

impl<S> ProductRepository for Arc<S>
where
    S: ProductRepository + ?Sized,
{
    fn find_by_code(&self, code: &str) -> Option<Product> {
        (**self).find_by_code(code)
    }

    fn save(&self, product: &Product) -> bool {
        (**self).save(product)
    }

    fn update_stock(&self, code: &str, new_stock: i64) -> bool {
        (**self).update_stock(code, new_stock)
    }

    fn delete(&self, code: &str) -> bool {
        (**self).delete(code)
    }

    fn find_all(&self) -> Vec<Product> {
        (**self).find_all()
    }

    fn find_low_stock(&self) -> Vec<Product> {
        (**self).find_low_stock()
    }

    fn find_out_of_stock(&self) -> Vec<Product> {
        (**self).find_out_of_stock()
    }

    fn find_by_category(&self, category: &str) -> Vec<Product> {
        (**self).find_by_category(category)
    }

    fn find_by_name(&self, name_pattern: &str) -> Vec<Product> {
        (**self).find_by_name(name_pattern)
    }
}

/// In-memory product store keyed by code.
///
/// Each method takes the lock once, so individual calls are atomic. `save` is
/// insert-if-absent: a second product with an existing code is refused.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    inner: RwLock<BTreeMap<String, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store. Products without a code, or repeating a code, are skipped.
    pub fn with_products(self, products: impl IntoIterator<Item = Product>) -> Self {
        for product in products {
            self.save(&product);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn select(&self, predicate: impl Fn(&Product) -> bool) -> Vec<Product> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        map.values().filter(|p| predicate(p)).cloned().collect()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn find_by_code(&self, code: &str) -> Option<Product> {
        let map = self.inner.read().ok()?;
        map.get(code).cloned()
    }

    fn save(&self, product: &Product) -> bool {
        let Some(code) = product.code() else {
            return false;
        };
        let Ok(mut map) = self.inner.write() else {
            return false;
        };
        if map.contains_key(code) {
            tracing::debug!(code, "refusing to save duplicate product code");
            return false;
        }
        map.insert(code.to_string(), product.clone());
        true
    }

    fn update_stock(&self, code: &str, new_stock: i64) -> bool {
        let Ok(mut map) = self.inner.write() else {
            return false;
        };
        match map.get_mut(code) {
            Some(product) => {
                product.stock = new_stock;
                true
            }
            None => false,
        }
    }

    fn delete(&self, code: &str) -> bool {
        match self.inner.write() {
            Ok(mut map) => map.remove(code).is_some(),
            Err(_) => false,
        }
    }

    fn find_all(&self) -> Vec<Product> {
        self.select(|_| true)
    }

    fn find_low_stock(&self) -> Vec<Product> {
        self.select(Product::is_stock_low)
    }

    fn find_out_of_stock(&self) -> Vec<Product> {
        self.select(Product::is_stock_out)
    }

    fn find_by_category(&self, category: &str) -> Vec<Product> {
        let wanted = category.to_lowercase();
        self.select(|p| p.category().is_some_and(|c| c.to_lowercase() == wanted))
    }

    fn find_by_name(&self, name_pattern: &str) -> Vec<Product> {
        let needle = name_pattern.to_lowercase();
        self.select(|p| p.name().is_some_and(|n| n.to_lowercase().contains(&needle)))
    }
}
