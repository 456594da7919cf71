//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box,
//! and the default seed data is what the widgets start with.

use crate::app::view::View;
use crate::model::catalog::{Product, SortKey};
use crate::model::directory::{Person, Role};
use crate::model::ids::RecordId;
use crate::model::tasks::Task;
use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Reject values the price filter cannot work with.
    pub fn validate(&self) -> Result<()> {
        let ui = &self.ui;
        ensure!(
            ui.price_max.is_finite() && ui.price_max > 0.0,
            "ui.price_max must be a positive number, got {}",
            ui.price_max
        );
        ensure!(
            ui.price_step.is_finite() && ui.price_step > 0.0,
            "ui.price_step must be a positive number, got {}",
            ui.price_step
        );
        for product in &self.seed.products {
            ensure!(
                product.price.is_finite() && product.price >= 0.0,
                "product {} ({}) has invalid price {}",
                product.id,
                product.name,
                product.price
            );
        }
        Ok(())
    }
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub start_view: View,
    #[serde(default)]
    pub default_sort: SortKey,
    /// Upper bound of the price slider, also the initial max-price filter.
    #[serde(default = "default_price_max")]
    pub price_max: f64,
    #[serde(default = "default_price_step")]
    pub price_step: f64,
    #[serde(default = "default_true")]
    pub bell_on_reject: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_view: View::default(),
            default_sort: SortKey::default(),
            price_max: default_price_max(),
            price_step: default_price_step(),
            bell_on_reject: true,
        }
    }
}

/// Diagnostic log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

/// Records each widget starts with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_tasks")]
    pub tasks: Vec<Task>,
    #[serde(default = "default_people")]
    pub people: Vec<Person>,
    #[serde(default = "default_products")]
    pub products: Vec<Product>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            tasks: default_tasks(),
            people: default_people(),
            products: default_products(),
        }
    }
}

impl SeedConfig {
    /// Drop records whose id was already seen so every list starts with
    /// unique ids. The first occurrence wins.
    pub fn dedup_ids(&mut self) {
        dedup_by_id(&mut self.tasks, |t| t.id, "task");
        dedup_by_id(&mut self.people, |p| p.id, "person");
        dedup_by_id(&mut self.products, |p| p.id, "product");
    }
}

fn dedup_by_id<T>(records: &mut Vec<T>, id: impl Fn(&T) -> RecordId, kind: &str) {
    let mut seen = HashSet::new();
    records.retain(|r| {
        let id = id(r);
        let fresh = seen.insert(id);
        if !fresh {
            warn!(%id, kind, "dropping seeded record with duplicate id");
        }
        fresh
    });
}

fn default_true() -> bool {
    true
}
fn default_price_max() -> f64 {
    1000.0
}
fn default_price_step() -> f64 {
    10.0
}
fn default_log_dir() -> String {
    "~/.local/share/statedeck/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

fn default_tasks() -> Vec<Task> {
    let task = |id, text: &str, completed| Task {
        id: RecordId(id),
        text: text.into(),
        completed,
    };
    vec![
        task(1, "Learn React Basics", true),
        task(2, "Practice useState Hook", false),
        task(3, "Build Todo App", false),
    ]
}

fn default_people() -> Vec<Person> {
    let person = |id, name: &str, email: &str, role| Person {
        id: RecordId(id),
        name: name.into(),
        email: email.into(),
        role,
    };
    vec![
        person(1, "John Doe", "john@example.com", Role::Admin),
        person(2, "Jane Smith", "jane@example.com", Role::User),
        person(3, "Bob Johnson", "bob@example.com", Role::Editor),
    ]
}

fn default_products() -> Vec<Product> {
    let product = |id, name: &str, category: &str, price, in_stock| Product {
        id: RecordId(id),
        name: name.into(),
        category: category.into(),
        price,
        in_stock,
    };
    vec![
        product(1, "Laptop", "Electronics", 999.99, true),
        product(2, "Smartphone", "Electronics", 699.99, true),
        product(3, "Headphones", "Accessories", 149.99, false),
        product(4, "Monitor", "Electronics", 249.99, true),
        product(5, "Keyboard", "Accessories", 59.99, true),
        product(6, "Mouse", "Accessories", 29.99, false),
    ]
}
