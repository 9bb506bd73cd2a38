//! Product catalog over the `products` key of a [`PersistedStore`].
//!
//! Products are kept in insertion order. There is no update operation:
//! products are created by seeding or by [`Catalog::add_product`] and live
//! until [`Catalog::delete_product`] removes them.

pub mod seed;

use crate::config;
use crate::models::{Category, NewProduct, Product};
use crate::store::PersistedStore;
use rand::Rng;
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Catalog operations bound to a store.
pub struct Catalog<'a> {
    store: &'a PersistedStore,
}

impl<'a> Catalog<'a> {
    /// Create a new `Catalog` bound to the given store.
    pub fn new(store: &'a PersistedStore) -> Self {
        Self { store }
    }

    /// All products in insertion order.
    pub fn list_products(&self) -> Vec<Product> {
        self.store.read_list(config::PRODUCTS_KEY)
    }

    /// The product with `id`, if it is in the catalog.
    pub fn get(&self, id: &str) -> Option<Product> {
        self.list_products().into_iter().find(|p| p.id == id)
    }

    /// Products of one category, in insertion order.
    pub fn by_category(&self, category: Category) -> Vec<Product> {
        self.list_products()
            .into_iter()
            .filter(|p| p.category() == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.list_products().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Assign a fresh id to `candidate` and append it to the catalog.
    ///
    /// No validation happens here; see [`crate::admin::ProductForm`].
    /// Stored entries that do not decode as products are carried over as-is.
    pub fn add_product(&self, candidate: NewProduct) -> Product {
        let mut entries = self.store.read_entries(config::PRODUCTS_KEY);
        let id = fresh_id(&entries);
        let product = Product::from_new(id, candidate);
        match serde_json::to_value(&product) {
            Ok(entry) => {
                entries.push(entry);
                self.store.write(config::PRODUCTS_KEY, &entries);
                tracing::info!(id = %product.id, name = %product.name, "product added");
            }
            Err(e) => {
                tracing::warn!(id = %product.id, error = %e, "product could not be serialized; not saved");
            }
        }
        product
    }

    /// Remove the product with `id`. Removing an unknown id does nothing.
    pub fn delete_product(&self, id: &str) {
        let mut entries = self.store.read_entries(config::PRODUCTS_KEY);
        let before = entries.len();
        entries.retain(|entry| entry_id(entry) != Some(id));
        if entries.len() == before {
            tracing::debug!(id, "delete of unknown product ignored");
            return;
        }
        self.store.write(config::PRODUCTS_KEY, &entries);
        tracing::info!(id, "product deleted");
    }

    /// Populate an empty catalog with the reference products.
    ///
    /// Catalog data in the retired shape is discarded first. Returns `true`
    /// if the seed was written.
    pub fn ensure_seeded(&self) -> bool {
        self.discard_legacy();

        if !self.store.read_entries(config::PRODUCTS_KEY).is_empty() {
            return false;
        }

        let products = seed::reference_catalog();
        self.store.write(config::PRODUCTS_KEY, &products);
        tracing::info!(count = products.len(), "catalog seeded");
        true
    }

    fn discard_legacy(&self) {
        // `read` already drops text that is not JSON at all.
        if let Some(value) = self.store.read(config::PRODUCTS_KEY) {
            if is_legacy(&value) {
                tracing::info!("discarding catalog stored in the retired format");
                self.store.remove(config::PRODUCTS_KEY);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Whether stored catalog JSON predates the booster/bundle split.
///
/// Anything other than an array counts as unusable too.
fn is_legacy(value: &Value) -> bool {
    let Some(entries) = value.as_array() else {
        return true;
    };
    entries.iter().any(|entry| {
        entry.get(config::LEGACY_PRODUCT_FIELD).is_some()
            || entry.get("category").and_then(|c| c.as_str()) == Some(config::LEGACY_CATEGORY)
    })
}

fn entry_id(entry: &Value) -> Option<&str> {
    entry.get("id").and_then(Value::as_str)
}

/// Millisecond timestamp id, with a random suffix if that id is taken.
fn fresh_id(existing: &[Value]) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();

    let mut id = millis.to_string();
    let mut rng = rand::thread_rng();
    while existing.iter().any(|entry| entry_id(entry) == Some(id.as_str())) {
        id = format!("{}-{:04x}", millis, rng.gen::<u16>());
    }
    id
}
