use serde::{Deserialize, Serialize};

use super::product::Product;

// ---------------------------------------------------------------------------
// CartItem — A product snapshot plus how many of it are in the cart
// ---------------------------------------------------------------------------

/// One cart line.
///
/// `product` is a copy taken when the product was first added; later catalog
/// changes do not reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

// ---------------------------------------------------------------------------
// OrderSummary — What a completed checkout contained
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub items: Vec<CartItem>,
    pub item_count: u32,
    pub total_price: f64,
}
