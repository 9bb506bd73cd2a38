use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Category / Rarity — Closed value sets
// ---------------------------------------------------------------------------

/// Product category as stored in the `category` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Single,
    Booster,
    Bundle,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Single, Category::Booster, Category::Bundle];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Single => "single",
            Category::Booster => "booster",
            Category::Bundle => "bundle",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rarity tier of a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rarity {
    Rare,
    UltraRare,
    Secret,
}

impl Rarity {
    /// Human-readable badge text.
    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Rare => "Rare",
            Rarity::UltraRare => "Ultra Rare",
            Rarity::Secret => "Secret Rare",
        }
    }
}

// ---------------------------------------------------------------------------
// ProductKind — Category plus the one optional field that belongs to it
// ---------------------------------------------------------------------------

/// The category-specific part of a product.
///
/// Serialized as an internally tagged object and flattened into [`Product`],
/// so a single reads `{"category": "single", "rarity": "secret"}` and a
/// booster reads `{"category": "booster", "cardsCount": 10}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum ProductKind {
    Single {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rarity: Option<Rarity>,
    },
    Booster {
        #[serde(rename = "cardsCount", default, skip_serializing_if = "Option::is_none")]
        cards_count: Option<u32>,
    },
    Bundle {
        #[serde(rename = "cardsCount", default, skip_serializing_if = "Option::is_none")]
        cards_count: Option<u32>,
    },
}

impl ProductKind {
    pub fn category(&self) -> Category {
        match self {
            ProductKind::Single { .. } => Category::Single,
            ProductKind::Booster { .. } => Category::Booster,
            ProductKind::Bundle { .. } => Category::Bundle,
        }
    }

    pub fn rarity(&self) -> Option<Rarity> {
        match self {
            ProductKind::Single { rarity } => *rarity,
            _ => None,
        }
    }

    pub fn cards_count(&self) -> Option<u32> {
        match self {
            ProductKind::Booster { cards_count } | ProductKind::Bundle { cards_count } => {
                *cards_count
            }
            ProductKind::Single { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Product — A catalog entry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub kind: ProductKind,
}

impl Product {
    /// Attach an id to a candidate product.
    pub fn from_new(id: impl Into<String>, new: NewProduct) -> Self {
        Self {
            id: id.into(),
            name: new.name,
            price: new.price,
            image: new.image,
            description: new.description,
            kind: new.kind,
        }
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// Badge text shown on a product card: the rarity for singles, the card
    /// count for boosters and bundles.
    pub fn label(&self) -> Option<String> {
        match &self.kind {
            ProductKind::Single { rarity } => rarity.map(|r| r.label().to_string()),
            ProductKind::Booster { cards_count } | ProductKind::Bundle { cards_count } => {
                cards_count.map(|n| format!("{} cards", n))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// NewProduct — A product that has not been assigned an id yet
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub kind: ProductKind,
}
