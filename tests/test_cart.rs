//! Cart tests: quantities, snapshots, totals, persistence and checkout.

mod common;

use pockecards::store::Storage;
use pockecards::{Cart, CartItem, Catalog};

// ---------------------------------------------------------------------------
// add_to_cart
// ---------------------------------------------------------------------------

#[test]
fn repeated_adds_bump_quantity() {
    let (store, _) = common::memory_store();
    let mut cart = Cart::load(store);
    let product = common::single("a", 10.0);

    for _ in 0..5 {
        cart.add_to_cart(&product);
    }

    assert_eq!(cart.line_count(), 1);
    assert_eq!(cart.items()[0].quantity, 5);
    assert_eq!(cart.cart_count(), 5);
}

#[test]
fn first_snapshot_is_kept() {
    let (store, _) = common::memory_store();
    let mut cart = Cart::load(store);
    let original = common::single("a", 10.0);
    let mut repriced = original.clone();
    repriced.price = 99.0;
    repriced.name = "Renamed".to_string();

    cart.add_to_cart(&original);
    cart.add_to_cart(&repriced);

    assert_eq!(cart.items()[0].product, original);
    assert_eq!(cart.items()[0].quantity, 2);
    assert_eq!(cart.total_price(), 20.0);
}

#[test]
fn distinct_products_get_distinct_lines() {
    let (store, _) = common::memory_store();
    let mut cart = Cart::load(store);

    cart.add_to_cart(&common::single("a", 1.0));
    cart.add_to_cart(&common::booster("b", 2.0, 10));
    cart.add_to_cart(&common::single("a", 1.0));

    let ids: Vec<&str> = cart.items().iter().map(|i| i.product.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

// ---------------------------------------------------------------------------
// remove / clear
// ---------------------------------------------------------------------------

#[test]
fn remove_drops_whole_line() {
    let (store, _) = common::memory_store();
    let mut cart = Cart::load(store);
    let product = common::single("a", 4.0);
    cart.add_to_cart(&product);
    cart.add_to_cart(&product);

    cart.remove_from_cart("a");
    assert!(cart.is_empty());

    cart.add_to_cart(&product);
    assert_eq!(cart.line_count(), 1);
    assert_eq!(cart.items()[0].quantity, 1);
}

#[test]
fn remove_unknown_id_is_noop() {
    let (store, _) = common::memory_store();
    let mut cart = Cart::load(store);
    cart.add_to_cart(&common::single("a", 4.0));

    cart.remove_from_cart("zzz");
    assert_eq!(cart.cart_count(), 1);
}

#[test]
fn clear_empties_cart_and_store() {
    let (store, _) = common::memory_store();
    let mut cart = Cart::load(store.clone());
    cart.add_to_cart(&common::single("a", 4.0));

    cart.clear_cart();

    assert!(cart.is_empty());
    let stored: Vec<CartItem> = store.read_as("cart").unwrap();
    assert!(stored.is_empty());
}

// ---------------------------------------------------------------------------
// totals
// ---------------------------------------------------------------------------

#[test]
fn empty_cart_totals_are_zero() {
    let (store, _) = common::memory_store();
    let cart = Cart::load(store);
    assert_eq!(cart.total_price(), 0.0);
    assert_eq!(cart.cart_count(), 0);
}

#[test]
fn total_is_sum_of_price_times_quantity() {
    let (store, _) = common::memory_store();
    let mut cart = Cart::load(store);
    let a = common::single("a", 2.5);
    let b = common::booster("b", 10.0, 10);

    cart.add_to_cart(&a);
    cart.add_to_cart(&a);
    cart.add_to_cart(&b);

    let expected: f64 = cart.items().iter().map(|i| i.product.price * f64::from(i.quantity)).sum();
    assert_eq!(cart.total_price(), expected);
    assert_eq!(cart.total_price(), 15.0);
}

#[test]
fn seeded_scenario_totals() {
    let (store, _) = common::seeded_store();
    let catalog = Catalog::new(&store);
    let mut cart = Cart::load(store.clone());

    let charizard = catalog.get("1").unwrap();
    let booster = catalog.get("5").unwrap();
    cart.add_to_cart(&charizard);
    cart.add_to_cart(&charizard);
    cart.add_to_cart(&booster);

    assert_eq!(cart.cart_count(), 3);
    assert_eq!(cart.total_price(), 945.0);
}

// ---------------------------------------------------------------------------
// persistence
// ---------------------------------------------------------------------------

#[test]
fn every_mutation_is_written_through() {
    let (store, _) = common::memory_store();
    let mut cart = Cart::load(store.clone());

    cart.add_to_cart(&common::single("a", 1.0));
    let stored: Vec<CartItem> = store.read_as("cart").unwrap();
    assert_eq!(stored, cart.items());

    cart.add_to_cart(&common::single("a", 1.0));
    let stored: Vec<CartItem> = store.read_as("cart").unwrap();
    assert_eq!(stored[0].quantity, 2);
}

#[test]
fn load_restores_previous_cart() {
    let (store, _) = common::memory_store();
    {
        let mut cart = Cart::load(store.clone());
        cart.add_to_cart(&common::single("a", 1.0));
        cart.add_to_cart(&common::booster("b", 2.0, 10));
    }

    let cart = Cart::load(store);
    assert_eq!(cart.line_count(), 2);
    assert_eq!(cart.cart_count(), 2);
}

#[test]
fn load_does_not_write() {
    let (store, storage) = common::memory_store();
    let _cart = Cart::load(store);
    assert!(!storage.contains_key("cart"));
}

#[test]
fn load_from_corrupt_cart_starts_empty() {
    let (store, storage) = common::memory_store();
    storage.set_item("cart", "[[[").unwrap();

    let cart = Cart::load(store);
    assert!(cart.is_empty());
    assert!(!storage.contains_key("cart"));
}

#[test]
fn load_skips_off_shape_line_and_keeps_key() {
    let (store, storage) = common::memory_store();
    let good = CartItem::new(common::single("a", 2.0));
    let text = format!(
        r#"[{}, {{"product": {}, "quantity": -1}}]"#,
        serde_json::to_string(&good).unwrap(),
        serde_json::to_string(&common::single("b", 3.0)).unwrap()
    );
    storage.set_item("cart", &text).unwrap();

    let cart = Cart::load(store);

    assert_eq!(cart.items(), &[good][..]);
    assert_eq!(storage.get_item("cart").unwrap().as_deref(), Some(text.as_str()));
}

#[test]
fn two_contexts_diverge_until_reload() {
    let (store, _) = common::memory_store();
    let mut first = Cart::load(store.clone());
    let mut second = Cart::load(store);

    first.add_to_cart(&common::single("a", 1.0));
    assert!(second.is_empty());

    second.reload();
    assert_eq!(second.cart_count(), 1);

    // Last write wins.
    second.clear_cart();
    first.reload();
    assert!(first.is_empty());
}

// ---------------------------------------------------------------------------
// checkout
// ---------------------------------------------------------------------------

#[test]
fn checkout_empty_cart_is_none() {
    let (store, storage) = common::memory_store();
    let mut cart = Cart::load(store);
    assert!(cart.checkout().is_none());
    assert!(!storage.contains_key("cart"));
}

#[test]
fn checkout_clears_and_summarises() {
    let (store, _) = common::memory_store();
    let mut cart = Cart::load(store.clone());
    cart.add_to_cart(&common::single("a", 3.0));
    cart.add_to_cart(&common::single("a", 3.0));
    cart.add_to_cart(&common::booster("b", 4.0, 10));

    let summary = cart.checkout().unwrap();

    assert_eq!(summary.item_count, 3);
    assert_eq!(summary.total_price, 10.0);
    assert_eq!(summary.items.len(), 2);
    assert!(cart.is_empty());
    assert_eq!(Cart::load(store).cart_count(), 0);
}
