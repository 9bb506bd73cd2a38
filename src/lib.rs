//! Storefront state for a trading-card shop.
//!
//! Holds the product catalog, the shopping cart and the admin session flag
//! in a local key-value store. There is no server: every operation reads and
//! writes the store directly, and the store degrades to empty reads and
//! dropped writes when no medium is available.
//!
//! # Quick start
//!
//! ```no_run
//! use pockecards::Storefront;
//!
//! let mut shop = Storefront::builder().in_memory().build().unwrap();
//!
//! let charizard = shop.catalog().get("1").unwrap();
//! shop.cart_mut().add_to_cart(&charizard);
//! assert_eq!(shop.cart().cart_count(), 1);
//! ```

pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use admin::{AdminPanel, ProductForm, ValidationErrors};
pub use auth::AuthGate;
pub use cart::Cart;
pub use catalog::Catalog;
pub use error::{Result, StorefrontError};
pub use models::{CartItem, Category, NewProduct, OrderSummary, Product, ProductKind, Rarity};
pub use store::{PersistedStore, Storage};

use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use store::{DuckDbStorage, FileStorage, MemoryStorage};

// ---------------------------------------------------------------------------
// StorefrontBuilder
// ---------------------------------------------------------------------------

enum Backend {
    Directory(PathBuf),
    Database(PathBuf),
    Memory,
    Null,
    Custom(Rc<dyn Storage>),
}

/// Builder for configuring and constructing a [`Storefront`].
///
/// Use [`Storefront::builder()`] to obtain a builder, pick a storage medium,
/// and call [`build()`](StorefrontBuilder::build).
pub struct StorefrontBuilder {
    backend: Backend,
    seed: bool,
}

impl Default for StorefrontBuilder {
    fn default() -> Self {
        Self {
            backend: Backend::Directory(config::default_storage_dir()),
            seed: true,
        }
    }
}

impl StorefrontBuilder {
    /// Persist each key as a JSON file inside `path`.
    ///
    /// This is the default, using [`config::default_storage_dir`]. If the
    /// directory cannot be created the storefront runs without a medium.
    pub fn storage_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.backend = Backend::Directory(path.as_ref().to_path_buf());
        self
    }

    /// Persist into the DuckDB database file at `path`.
    pub fn database<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.backend = Backend::Database(path.as_ref().to_path_buf());
        self
    }

    /// Keep state in process memory only.
    pub fn in_memory(mut self) -> Self {
        self.backend = Backend::Memory;
        self
    }

    /// Run without any persistence medium.
    pub fn no_storage(mut self) -> Self {
        self.backend = Backend::Null;
        self
    }

    /// Use a caller-provided medium, possibly shared with other storefronts.
    pub fn storage(mut self, storage: Rc<dyn Storage>) -> Self {
        self.backend = Backend::Custom(storage);
        self
    }

    /// Whether `build()` seeds an empty catalog. Defaults to `true`.
    pub fn seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    /// Open the medium, seed the catalog if enabled, and load the cart.
    pub fn build(self) -> Result<Storefront> {
        let store = match self.backend {
            Backend::Directory(dir) => match FileStorage::new(&dir) {
                Ok(storage) => PersistedStore::new(storage),
                Err(e) => {
                    tracing::warn!(
                        dir = %dir.display(),
                        error = %e,
                        "storage directory unavailable; running without persistence"
                    );
                    PersistedStore::null()
                }
            },
            Backend::Database(path) => PersistedStore::new(DuckDbStorage::open(&path)?),
            Backend::Memory => PersistedStore::new(MemoryStorage::new()),
            Backend::Null => PersistedStore::null(),
            Backend::Custom(storage) => PersistedStore::from_shared(storage),
        };

        if self.seed {
            Catalog::new(&store).ensure_seeded();
        }

        let cart = Cart::load(store.clone());
        tracing::debug!(storage = %store.describe(), "storefront ready");
        Ok(Storefront { store, cart })
    }
}

// ---------------------------------------------------------------------------
// Storefront
// ---------------------------------------------------------------------------

/// The main entry point: one session's view of the shop.
///
/// Owns the store and the loaded cart, and hands out lightweight borrowing
/// wrappers for the catalog, the auth gate and the admin panel.
pub struct Storefront {
    store: PersistedStore,
    cart: Cart,
}

impl Storefront {
    /// Create a new builder for configuring the storefront.
    pub fn builder() -> StorefrontBuilder {
        StorefrontBuilder::default()
    }

    pub fn catalog(&self) -> Catalog<'_> {
        Catalog::new(&self.store)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn auth(&self) -> AuthGate<'_> {
        AuthGate::new(&self.store)
    }

    pub fn admin(&self) -> AdminPanel<'_> {
        AdminPanel::new(&self.store)
    }

    pub fn store(&self) -> &PersistedStore {
        &self.store
    }

    /// Look up a catalog product by id and add it to the cart.
    pub fn add_product_to_cart(&mut self, product_id: &str) -> Result<()> {
        let product = self.catalog().get(product_id).ok_or_else(|| {
            StorefrontError::InvalidArgument(format!("Unknown product: {}", product_id))
        })?;
        self.cart.add_to_cart(&product);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Storefront {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Storefront(storage={}, products={}, cart_items={}, admin={})",
            self.store.describe(),
            self.catalog().len(),
            self.cart.cart_count(),
            self.auth().is_authenticated()
        )
    }
}
