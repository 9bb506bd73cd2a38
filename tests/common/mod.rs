//! Shared fixtures for the storefront integration tests.
//!
//! Most tests run against a [`MemoryStorage`] so they can inspect the raw
//! stored text next to the typed view the services expose.

#![allow(dead_code)]

use pockecards::store::MemoryStorage;
use pockecards::{NewProduct, PersistedStore, Product, ProductKind, Rarity};

/// A store over a fresh in-memory medium, plus a handle to that medium.
pub fn memory_store() -> (PersistedStore, MemoryStorage) {
    let storage = MemoryStorage::new();
    (PersistedStore::new(storage.clone()), storage)
}

/// A store whose catalog already holds the reference products.
pub fn seeded_store() -> (PersistedStore, MemoryStorage) {
    let (store, storage) = memory_store();
    pockecards::Catalog::new(&store).ensure_seeded();
    (store, storage)
}

pub fn single(id: &str, price: f64) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Single {}", id),
        price,
        image: format!("https://img.example/{}.png", id),
        description: None,
        kind: ProductKind::Single {
            rarity: Some(Rarity::Rare),
        },
    }
}

pub fn booster(id: &str, price: f64, cards: u32) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Booster {}", id),
        price,
        image: format!("https://img.example/{}.png", id),
        description: Some("Sealed pack".to_string()),
        kind: ProductKind::Booster {
            cards_count: Some(cards),
        },
    }
}

pub fn new_bundle(name: &str, price: f64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        price,
        image: "https://img.example/bundle.png".to_string(),
        description: None,
        kind: ProductKind::Bundle {
            cards_count: Some(15),
        },
    }
}
