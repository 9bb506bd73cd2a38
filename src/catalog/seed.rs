//! The reference catalog written into an empty store.

use crate::models::{Product, ProductKind, Rarity};

const ARTWORK_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

fn artwork(dex_number: u32) -> String {
    format!("{}/{}.png", ARTWORK_BASE, dex_number)
}

fn product(
    id: &str,
    name: &str,
    price: f64,
    dex_number: u32,
    description: &str,
    kind: ProductKind,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        image: artwork(dex_number),
        description: Some(description.to_string()),
        kind,
    }
}

fn single(rarity: Rarity) -> ProductKind {
    ProductKind::Single {
        rarity: Some(rarity),
    }
}

fn booster(cards: u32) -> ProductKind {
    ProductKind::Booster {
        cards_count: Some(cards),
    }
}

fn bundle(cards: u32) -> ProductKind {
    ProductKind::Bundle {
        cards_count: Some(cards),
    }
}

/// Ten products with ids `"1"` to `"10"`: four singles, three boosters and
/// three bundles.
pub fn reference_catalog() -> Vec<Product> {
    vec![
        product(
            "1",
            "Charizard VMAX",
            450.00,
            6,
            "Carta ultra rara com acabamento holográfico premium",
            single(Rarity::UltraRare),
        ),
        product(
            "2",
            "Mewtwo Secret",
            380.00,
            150,
            "Edição secreta com numeração especial",
            single(Rarity::Secret),
        ),
        product(
            "3",
            "Rayquaza GX",
            320.00,
            384,
            "Carta rara com arte alternativa exclusiva",
            single(Rarity::Rare),
        ),
        product(
            "4",
            "Lugia Rainbow",
            290.00,
            249,
            "Rainbow rare com brilho holográfico",
            single(Rarity::UltraRare),
        ),
        product(
            "5",
            "Booster Elétrico",
            45.00,
            25,
            "Pacote com 10 cartas aleatórias de Pokémon elétricos",
            booster(10),
        ),
        product(
            "6",
            "Booster Fogo",
            45.00,
            6,
            "Pacote com 10 cartas de Pokémon de fogo",
            booster(10),
        ),
        product(
            "7",
            "Booster Água",
            45.00,
            9,
            "Pacote com 10 cartas de Pokémon aquáticos",
            booster(10),
        ),
        product(
            "8",
            "Bundle Starter",
            120.00,
            25,
            "Kit inicial com 10 cartas selecionadas para começar sua coleção",
            bundle(10),
        ),
        product(
            "9",
            "Bundle Premium",
            250.00,
            150,
            "Coleção premium com 15 cartas incluindo raras garantidas",
            bundle(15),
        ),
        product(
            "10",
            "Bundle Elite",
            480.00,
            6,
            "Bundle exclusivo com 20 cartas incluindo ultra raras",
            bundle(20),
        ),
    ]
}
