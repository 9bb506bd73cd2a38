//! Admin product management: form validation and guarded catalog writes.

use crate::auth::AuthGate;
use crate::catalog::Catalog;
use crate::error::{Result, StorefrontError};
use crate::models::{Category, NewProduct, Product, ProductKind, Rarity};
use crate::store::PersistedStore;
use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// ValidationErrors
// ---------------------------------------------------------------------------

/// Per-field messages from [`ProductForm::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    /// Message recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .fields
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

// ---------------------------------------------------------------------------
// ProductForm
// ---------------------------------------------------------------------------

/// Raw input of the new-product form.
///
/// Text fields hold exactly what was typed; [`validate`](Self::validate)
/// turns them into a [`NewProduct`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub image: String,
    pub description: String,
    pub category: Category,
    /// Used only when `category` is `Single`.
    pub rarity: Rarity,
    /// Used only for boosters and bundles.
    pub cards_count: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            image: String::new(),
            description: String::new(),
            category: Category::Single,
            rarity: Rarity::Rare,
            cards_count: "10".to_string(),
        }
    }
}

impl ProductForm {
    pub fn validate(&self) -> std::result::Result<NewProduct, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", "Name is required");
        }

        let price = match self.price.trim().parse::<f64>() {
            Ok(p) if p.is_finite() && p > 0.0 => Some(p),
            _ => {
                errors.add("price", "Price must be a number greater than zero");
                None
            }
        };

        let image = self.image.trim();
        if image.is_empty() {
            errors.add("image", "Image URL is required");
        }

        let cards_count = match self.category {
            Category::Single => None,
            Category::Booster | Category::Bundle => {
                match self.cards_count.trim().parse::<u32>() {
                    Ok(n) if n > 0 => Some(n),
                    _ => {
                        errors.add("cardsCount", "Card count must be a positive whole number");
                        None
                    }
                }
            }
        };

        let Some(price) = price else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        let kind = match self.category {
            Category::Single => ProductKind::Single {
                rarity: Some(self.rarity),
            },
            Category::Booster => ProductKind::Booster { cards_count },
            Category::Bundle => ProductKind::Bundle { cards_count },
        };

        let description = self.description.trim();
        Ok(NewProduct {
            name: name.to_string(),
            price,
            image: image.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            kind,
        })
    }
}

// ---------------------------------------------------------------------------
// AdminPanel
// ---------------------------------------------------------------------------

/// Catalog management that requires an active admin session.
pub struct AdminPanel<'a> {
    store: &'a PersistedStore,
}

impl<'a> AdminPanel<'a> {
    pub fn new(store: &'a PersistedStore) -> Self {
        Self { store }
    }

    fn authorize(&self) -> Result<Catalog<'a>> {
        AuthGate::new(self.store).require_admin()?;
        Ok(Catalog::new(self.store))
    }

    pub fn products(&self) -> Result<Vec<Product>> {
        Ok(self.authorize()?.list_products())
    }

    /// Validate `form` and add the product it describes.
    ///
    /// The catalog is left untouched when validation fails.
    pub fn create_product(&self, form: &ProductForm) -> Result<Product> {
        let catalog = self.authorize()?;
        let candidate = form.validate().map_err(StorefrontError::Validation)?;
        Ok(catalog.add_product(candidate))
    }

    pub fn delete_product(&self, id: &str) -> Result<()> {
        self.authorize()?.delete_product(id);
        Ok(())
    }
}
