use std::path::PathBuf;

/// Storage key holding the JSON array of catalog products.
pub const PRODUCTS_KEY: &str = "products";
/// Storage key holding the JSON array of cart items.
pub const CART_KEY: &str = "cart";
/// Storage key holding the admin session flag.
pub const AUTH_KEY: &str = "adminAuth";
/// The only stored value that counts as an active admin session.
pub const AUTH_TRUE: &str = "true";

/// Field carried by catalog entries written before boosters and bundles
/// shared a single `cardsCount` field.
pub const LEGACY_PRODUCT_FIELD: &str = "cardsInPack";
/// Category value that was split into `booster` and `bundle`.
pub const LEGACY_CATEGORY: &str = "pack";

pub fn default_storage_dir() -> PathBuf {
    if let Some(data) = dirs::data_local_dir() {
        data.join("pockecards")
    } else {
        PathBuf::from(".pockecards-data")
    }
}
