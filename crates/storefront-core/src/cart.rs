//! # Cart
//!
//! The cart aggregate: which products the shopper picked, how many of each,
//! and whether the cart panel is showing.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Operation               Entry present?        Effect                   │
//! │  ─────────               ──────────────        ──────                   │
//! │                                                                         │
//! │  add_product(p)          no                    push {p, qty 1}          │
//! │                          yes                   qty += 1                 │
//! │                                                                         │
//! │  increment_quantity(id)  yes                   qty += 1                 │
//! │  decrement_quantity(id)  yes                   qty = max(0, qty - 1)    │
//! │  remove_product(id)      yes                   entry deleted            │
//! │  (any of the three)      no                    nothing                  │
//! │                                                                         │
//! │  clear_cart()            -                     entries emptied          │
//! │  open() / close()        -                     is_open = true / false   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Entries are unique by product id (adding the same product bumps quantity)
//! - Quantities are never negative (`u32`, decrement saturates at zero)
//! - An entry at quantity zero stays in the cart until removed
//! - Removing deletes the entry whatever its quantity

use serde::{Deserialize, Serialize};

use crate::price::Price;
use crate::types::{Product, ProductId};

// =============================================================================
// Cart Entry
// =============================================================================

/// A product in the cart together with the selected quantity.
///
/// The product is copied in when first added, so the entry keeps rendering
/// the same title and price even if the catalog is reloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    /// Product snapshot taken when the entry was created.
    pub product: Product,

    /// Selected quantity.
    pub quantity: u32,
}

impl CartEntry {
    /// Creates an entry with quantity 1.
    pub fn new(product: &Product) -> Self {
        CartEntry {
            product: product.clone(),
            quantity: 1,
        }
    }

    /// Product id of this entry.
    #[inline]
    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    /// Unit price of the product.
    #[inline]
    pub fn price(&self) -> Price {
        self.product.price
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// Every operation is total. Operations addressing a product that is not in
/// the cart return `false` and leave the cart untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    entries: Vec<CartEntry>,
    is_open: bool,
}

impl Cart {
    /// Creates an empty, closed cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds a product, or bumps its quantity if it is already in the cart.
    ///
    /// Returns the quantity after the call.
    pub fn add_product(&mut self, product: &Product) -> u32 {
        if let Some(entry) = self.entry_mut(&product.id) {
            entry.quantity = entry.quantity.saturating_add(1);
            return entry.quantity;
        }

        self.entries.push(CartEntry::new(product));
        1
    }

    /// Removes the entry for `id`. Returns whether an entry was removed.
    pub fn remove_product(&mut self, id: &ProductId) -> bool {
        let initial_len = self.entries.len();
        self.entries.retain(|e| e.product_id() != id);
        self.entries.len() != initial_len
    }

    /// Adds one to the quantity of `id`. Returns the new quantity, if present.
    pub fn increment_quantity(&mut self, id: &ProductId) -> Option<u32> {
        let entry = self.entry_mut(id)?;
        entry.quantity = entry.quantity.saturating_add(1);
        Some(entry.quantity)
    }

    /// Subtracts one from the quantity of `id`, stopping at zero.
    /// Returns the new quantity, if present.
    pub fn decrement_quantity(&mut self, id: &ProductId) -> Option<u32> {
        let entry = self.entry_mut(id)?;
        entry.quantity = entry.quantity.saturating_sub(1);
        Some(entry.quantity)
    }

    /// Removes every entry. Visibility is left as it is.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Shows the cart panel.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Hides the cart panel.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Looks up the entry for a product.
    pub fn entry(&self, id: &ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.product_id() == id)
    }

    fn entry_mut(&mut self, id: &ProductId) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|e| e.product_id() == id)
    }

    /// Quantity of a product, if it is in the cart.
    pub fn quantity_of(&self, id: &ProductId) -> Option<u32> {
        self.entry(id).map(|e| e.quantity)
    }

    /// Checks if a product is in the cart.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.entry(id).is_some()
    }

    /// Whether the cart panel is showing.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Checks if the cart has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct products.
    pub fn item_count(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Copies the current state into a snapshot for observers.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::from(self)
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Immutable view of a cart, handed to observers and views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub entries: Vec<CartEntry>,
    pub is_open: bool,
    pub item_count: usize,
    pub total_quantity: u64,
}

impl CartSnapshot {
    /// Checks if the snapshot has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Quantity of a product, if present.
    pub fn quantity_of(&self, id: &ProductId) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.product_id() == id)
            .map(|e| e.quantity)
    }
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        CartSnapshot {
            entries: cart.entries.clone(),
            is_open: cart.is_open,
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str) -> Product {
        Product::new(id, format!("Product {}", id), Price::from_cents(2233))
    }

    #[test]
    fn test_add_product_to_fresh_cart() {
        let mut cart = Cart::new();
        let product = test_product("1");

        assert_eq!(cart.add_product(&product), 1);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.quantity_of(&product.id), Some(1));
    }

    #[test]
    fn test_add_same_product_twice_does_not_duplicate() {
        let mut cart = Cart::new();
        let product = test_product("1");

        cart.add_product(&product);
        assert_eq!(cart.add_product(&product), 2);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.entries()[0].quantity, 2);
    }

    #[test]
    fn test_add_add_increment_reaches_three() {
        let mut cart = Cart::new();
        let product = test_product("1");

        cart.add_product(&product);
        cart.add_product(&product);
        cart.increment_quantity(&product.id);

        assert_eq!(cart.quantity_of(&product.id), Some(3));
    }

    #[test]
    fn test_decrement_stops_at_zero_and_keeps_entry() {
        let mut cart = Cart::new();
        let product = test_product("1");
        cart.add_product(&product);

        assert_eq!(cart.decrement_quantity(&product.id), Some(0));
        assert_eq!(cart.decrement_quantity(&product.id), Some(0));
        for _ in 0..10 {
            cart.decrement_quantity(&product.id);
        }

        assert_eq!(cart.quantity_of(&product.id), Some(0));
        assert!(cart.contains(&product.id));
    }

    #[test]
    fn test_missing_entry_operations_are_noops() {
        let mut cart = Cart::new();
        cart.add_product(&test_product("1"));
        let before = cart.clone();
        let missing = ProductId::new("404");

        assert!(!cart.remove_product(&missing));
        assert_eq!(cart.increment_quantity(&missing), None);
        assert_eq!(cart.decrement_quantity(&missing), None);

        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_deletes_whatever_quantity_and_is_idempotent() {
        let mut cart = Cart::new();
        let p1 = test_product("1");
        let p2 = test_product("2");
        cart.add_product(&p1);
        cart.add_product(&p1);
        cart.add_product(&p2);

        assert!(cart.remove_product(&p1.id));
        assert!(!cart.remove_product(&p1.id));
        assert!(!cart.remove_product(&p1.id));

        let ids: Vec<&str> = cart.entries().iter().map(|e| e.product_id().as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut cart = Cart::new();
        for id in ["3", "1", "2"] {
            cart.add_product(&test_product(id));
        }
        cart.add_product(&test_product("1"));

        let ids: Vec<&str> = cart.entries().iter().map(|e| e.product_id().as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_clear_empties_entries_but_keeps_visibility() {
        let mut cart = Cart::new();
        cart.open();
        cart.add_product(&test_product("1"));
        cart.add_product(&test_product("2"));

        cart.clear();

        assert!(cart.is_empty());
        assert!(cart.is_open());
    }

    #[test]
    fn test_open_close_are_idempotent() {
        let mut cart = Cart::new();
        assert!(!cart.is_open());

        cart.open();
        cart.open();
        assert!(cart.is_open());

        cart.close();
        cart.close();
        assert!(!cart.is_open());

        cart.close();
        cart.open();
        assert!(cart.is_open());
    }

    #[test]
    fn test_snapshot_reflects_counts() {
        let mut cart = Cart::new();
        let p1 = test_product("1");
        cart.add_product(&p1);
        cart.add_product(&p1);
        cart.add_product(&test_product("2"));
        cart.open();

        let snapshot = cart.snapshot();

        assert!(snapshot.is_open);
        assert_eq!(snapshot.item_count, 2);
        assert_eq!(snapshot.total_quantity, 3);
        assert_eq!(snapshot.quantity_of(&p1.id), Some(2));
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let mut cart = Cart::new();
        cart.add_product(&test_product("1"));

        let value = serde_json::to_value(cart.snapshot()).unwrap();

        assert_eq!(value["isOpen"], false);
        assert_eq!(value["itemCount"], 1);
        assert_eq!(value["entries"][0]["quantity"], 1);
        assert_eq!(value["entries"][0]["product"]["price"], "22.33");
    }

    #[test]
    fn test_same_operations_give_equal_carts() {
        let build = || {
            let mut cart = Cart::new();
            cart.add_product(&test_product("1"));
            cart.add_product(&test_product("2"));
            cart.increment_quantity(&ProductId::new("1"));
            cart.snapshot()
        };

        assert_eq!(build(), build());

        let value = serde_json::to_value(build()).unwrap();
        let entry = value["entries"][0].as_object().unwrap();
        let mut keys: Vec<&str> = entry.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["product", "quantity"]);
    }
}
