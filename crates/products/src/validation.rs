//! Field and entity validation rules.
//!
//! Every predicate is pure and total: absent, empty or malformed input yields
//! `false`, never a panic. Length bounds are inclusive and count characters,
//! not bytes.

use crate::category::Category;
use crate::product::Product;

pub const CODE_MIN_LEN: usize = 3;
pub const CODE_MAX_LEN: usize = 10;
pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 100;
pub const CATEGORY_MIN_LEN: usize = 3;
pub const DESCRIPTION_MAX_LEN: usize = 500;

fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

fn trimmed_len_within(value: Option<&str>, min: usize, max: usize) -> bool {
    value.is_some_and(|v| (min..=max).contains(&trimmed_len(v)))
}

/// Product (and category) codes: 3 to 10 characters after trimming.
pub fn is_valid_product_code<'a>(code: impl Into<Option<&'a str>>) -> bool {
    trimmed_len_within(code.into(), CODE_MIN_LEN, CODE_MAX_LEN)
}

/// Names: 3 to 100 characters after trimming.
pub fn is_valid_name<'a>(name: impl Into<Option<&'a str>>) -> bool {
    trimmed_len_within(name.into(), NAME_MIN_LEN, NAME_MAX_LEN)
}

pub fn is_valid_price(price: f64) -> bool {
    price > 0.0
}

pub fn is_valid_stock(stock: i64) -> bool {
    stock >= 0
}

pub fn is_valid_min_stock(min_stock: i64) -> bool {
    min_stock >= 0
}

/// Stock movement amount. Distinct from a stock level: zero is not a movement.
pub fn is_valid_quantity(quantity: i64) -> bool {
    quantity > 0
}

pub fn is_valid_percentage(percentage: f64) -> bool {
    (0.0..=100.0).contains(&percentage)
}

/// Whether a product may be admitted to a repository.
pub fn is_valid_product<'a>(product: impl Into<Option<&'a Product>>) -> bool {
    let Some(p) = product.into() else {
        return false;
    };

    is_valid_product_code(p.code())
        && is_valid_name(p.name())
        && p.category().is_some_and(|c| trimmed_len(c) >= CATEGORY_MIN_LEN)
        && is_valid_price(p.price)
        && is_valid_stock(p.stock)
        && is_valid_min_stock(p.min_stock)
}

/// Whether a category is well formed. The description is optional and is
/// measured untrimmed.
pub fn is_valid_category<'a>(category: impl Into<Option<&'a Category>>) -> bool {
    let Some(c) = category.into() else {
        return false;
    };

    is_valid_product_code(c.code())
        && is_valid_name(c.name())
        && c.description()
            .is_none_or(|d| d.chars().count() <= DESCRIPTION_MAX_LEN)
}
