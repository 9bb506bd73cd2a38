//! Shopping cart held in memory and written through to the `cart` key.

use crate::config;
use crate::models::{CartItem, OrderSummary, Product};
use crate::store::PersistedStore;

/// The cart of the current session.
///
/// Every mutation writes the whole cart back to the store before returning.
/// Loading does not write, so an empty cart persisted by another context is
/// never overwritten by a default.
#[derive(Debug)]
pub struct Cart {
    store: PersistedStore,
    items: Vec<CartItem>,
}

impl Cart {
    /// Load the persisted cart, or start empty if there is none.
    pub fn load(store: PersistedStore) -> Self {
        let items: Vec<CartItem> = store.read_list(config::CART_KEY);
        tracing::debug!(lines = items.len(), "cart loaded");
        Self { store, items }
    }

    /// Cart lines in the order they were first added.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Add one unit of `product`.
    ///
    /// A product already in the cart only gets its quantity bumped; the
    /// snapshot taken on the first add is kept.
    pub fn add_to_cart(&mut self, product: &Product) {
        match self.items.iter_mut().find(|i| i.product.id == product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => self.items.push(CartItem::new(product.clone())),
        }
        self.persist();
    }

    /// Drop the whole line for `product_id`, whatever its quantity.
    pub fn remove_from_cart(&mut self, product_id: &str) {
        self.items.retain(|i| i.product.id != product_id);
        self.persist();
    }

    pub fn clear_cart(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Sum of `price * quantity` over all lines.
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over all lines.
    pub fn cart_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Replace the in-memory cart with what is currently persisted.
    pub fn reload(&mut self) {
        self.items = self.store.read_list(config::CART_KEY);
    }

    /// Complete the purchase: empty the cart and return what it held.
    ///
    /// Returns `None` and changes nothing when the cart is empty.
    pub fn checkout(&mut self) -> Option<OrderSummary> {
        if self.items.is_empty() {
            return None;
        }
        let summary = OrderSummary {
            item_count: self.cart_count(),
            total_price: self.total_price(),
            items: std::mem::take(&mut self.items),
        };
        self.persist();
        tracing::info!(
            items = summary.item_count,
            total = summary.total_price,
            "checkout completed"
        );
        Some(summary)
    }

    fn persist(&self) {
        self.store.write(config::CART_KEY, &self.items);
    }
}
