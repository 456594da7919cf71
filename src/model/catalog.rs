//! Product catalog: a fixed product set seen through a filter and a sort key.
//!
//! Nothing here is cached. [`derive`] runs on every read, which is fine for a
//! product list that never grows at runtime.

use super::ids::ProductId;
use feruca::Collator;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub in_stock: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Named(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Name,
    PriceLow,
    PriceHigh,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::PriceLow, SortKey::PriceHigh];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Name (A-Z)",
            SortKey::PriceLow => "Price (Low to High)",
            SortKey::PriceHigh => "Price (High to Low)",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SortKey::Name => SortKey::PriceLow,
            SortKey::PriceLow => SortKey::PriceHigh,
            SortKey::PriceHigh => SortKey::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SortKey::Name => SortKey::PriceHigh,
            SortKey::PriceLow => SortKey::Name,
            SortKey::PriceHigh => SortKey::PriceLow,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::Name => "name",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub in_stock_only: bool,
    /// Inclusive upper bound on price.
    pub price_range: f64,
}

/// A partial filter change. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct FilterUpdate {
    pub category: Option<CategoryFilter>,
    pub in_stock_only: Option<bool>,
    pub price_range: Option<f64>,
}

impl FilterState {
    pub fn new(price_range: f64) -> Self {
        Self {
            category: CategoryFilter::All,
            in_stock_only: false,
            price_range,
        }
    }

    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(in_stock_only) = update.in_stock_only {
            self.in_stock_only = in_stock_only;
        }
        if let Some(price_range) = update.price_range {
            self.price_range = price_range;
        }
    }

    fn keeps(&self, product: &Product) -> bool {
        self.category.matches(&product.category)
            && (!self.in_stock_only || product.in_stock)
            && product.price <= self.price_range
    }
}

/// Filter then stable-sort the products.
pub fn derive<'a>(
    products: &'a [Product],
    filter: &FilterState,
    sort: SortKey,
) -> Vec<&'a Product> {
    let mut out: Vec<&Product> = products.iter().filter(|p| filter.keeps(p)).collect();
    match sort {
        SortKey::Name => {
            let mut collator = Collator::default();
            out.sort_by(|a, b| collator.collate(a.name.as_str(), b.name.as_str()));
        }
        SortKey::PriceLow => out.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceHigh => out.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
    out
}

/// `All` followed by each distinct category in first-seen order.
pub fn category_options(products: &[Product]) -> Vec<CategoryFilter> {
    let mut options = vec![CategoryFilter::All];
    for product in products {
        let seen = options
            .iter()
            .any(|o| matches!(o, CategoryFilter::Named(c) if *c == product.category));
        if !seen {
            options.push(CategoryFilter::Named(product.category.clone()));
        }
    }
    options
}

#[derive(Debug)]
pub struct CatalogView {
    products: Vec<Product>,
    filter: FilterState,
    sort: SortKey,
    price_max: f64,
}

impl CatalogView {
    pub fn new(products: Vec<Product>, price_max: f64, sort: SortKey) -> Self {
        Self {
            products,
            filter: FilterState::new(price_max),
            sort,
            price_max,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    pub fn price_max(&self) -> f64 {
        self.price_max
    }

    pub fn set_filter(&mut self, update: FilterUpdate) {
        self.filter.merge(update);
        debug!(filter = ?self.filter, "catalog filter changed");
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort = key;
        debug!(sort = %key, "catalog sort changed");
    }

    pub fn visible(&self) -> Vec<&Product> {
        derive(&self.products, &self.filter, self.sort)
    }

    pub fn category_options(&self) -> Vec<CategoryFilter> {
        category_options(&self.products)
    }

    /// Step the category selector forward or backward, wrapping around.
    pub fn cycle_category(&mut self, forward: bool) {
        let options = self.category_options();
        let current = options
            .iter()
            .position(|o| *o == self.filter.category)
            .unwrap_or(0);
        let len = options.len();
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.set_filter(FilterUpdate {
            category: Some(options[next].clone()),
            ..Default::default()
        });
    }

    /// Move the price slider by `delta`, clamped to `0..=price_max`. A
    /// non-positive `price_max` pins the slider at zero.
    pub fn nudge_price(&mut self, delta: f64) {
        let price_range = (self.filter.price_range + delta)
            .min(self.price_max)
            .max(0.0);
        self.set_filter(FilterUpdate {
            price_range: Some(price_range),
            ..Default::default()
        });
    }
}
