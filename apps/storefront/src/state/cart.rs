//! # Cart Manager
//!
//! The single source of truth for the shopping cart, shared by every view
//! that shows or changes it.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Manager Operations                              │
//! │                                                                         │
//! │  View Action             Manager Call              Cart State Change    │
//! │  ───────────             ────────────              ─────────────────    │
//! │                                                                         │
//! │  Card "add" ───────────► open() ─────────────────► is_open = true      │
//! │                          add_product(p) ─────────► push / qty += 1     │
//! │                                                                         │
//! │  Item "+" / "-" ───────► increment_quantity() ───► qty += 1            │
//! │                          decrement_quantity() ───► qty = max(0, qty-1) │
//! │                                                                         │
//! │  Item "remove" ────────► remove_product() ───────► entry deleted       │
//! │                                                                         │
//! │  Panel "clear" ────────► clear_cart() ───────────► entries.clear()     │
//! │  Panel "close" ────────► close() ────────────────► is_open = false     │
//! │                                                                         │
//! │  After EVERY call: snapshot published to subscribers before returning.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sharing
//! `CartManager` is a handle: clones share one cart. Each session (and each
//! test) constructs its own and passes it to the views that need it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use storefront_core::{Cart, CartSnapshot, Product, ProductId};
use tokio::sync::watch;
use tracing::debug;

/// What views are allowed to do to a cart.
///
/// Views depend on this trait rather than on [`CartManager`], so their tests
/// can assert exactly which calls a click produces.
#[cfg_attr(test, mockall::automock)]
pub trait CartActions: Send + Sync {
    /// Adds a product or bumps its quantity.
    fn add_product(&self, product: &Product);

    /// Deletes a product's entry; no-op if absent.
    fn remove_product(&self, id: &ProductId);

    /// Quantity + 1; no-op if absent.
    fn increment_quantity(&self, id: &ProductId);

    /// Quantity - 1, never below zero; no-op if absent.
    fn decrement_quantity(&self, id: &ProductId);

    /// Removes every entry.
    fn clear_cart(&self);

    /// Shows the cart panel.
    fn open(&self);

    /// Hides the cart panel.
    fn close(&self);
}

/// Shared cart handle.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Cart>>` so every clone sees the same cart and only one
/// caller mutates at a time. Publishing happens while the lock is held, so
/// subscribers observe snapshots in the order the mutations happened.
#[derive(Debug, Clone)]
pub struct CartManager {
    cart: Arc<Mutex<Cart>>,
    publisher: Arc<watch::Sender<CartSnapshot>>,
}

impl CartManager {
    /// Creates a manager with an empty, closed cart.
    pub fn new() -> Self {
        let cart = Cart::new();
        let (publisher, _) = watch::channel(cart.snapshot());

        CartManager {
            cart: Arc::new(Mutex::new(cart)),
            publisher: Arc::new(publisher),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Cart> {
        // A panic inside a read closure leaves the cart itself consistent.
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Subscribes to cart changes.
    ///
    /// The receiver starts at the current state and is marked changed after
    /// every operation, including operations that turned out to be no-ops.
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.publisher.subscribe()
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.publisher.receiver_count()
    }

    /// Runs a closure with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.lock();
        f(&cart)
    }

    /// Runs a closure with write access, then publishes the new state.
    fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.lock();
        let result = f(&mut cart);
        self.publisher.send_replace(cart.snapshot());
        result
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> CartSnapshot {
        self.with_cart(Cart::snapshot)
    }

    /// Whether the cart panel is showing.
    pub fn is_open(&self) -> bool {
        self.with_cart(Cart::is_open)
    }

    /// Checks if the cart has no entries.
    pub fn is_empty(&self) -> bool {
        self.with_cart(Cart::is_empty)
    }

    /// Quantity of a product, if it is in the cart.
    pub fn quantity_of(&self, id: &ProductId) -> Option<u32> {
        self.with_cart(|c| c.quantity_of(id))
    }

    /// Checks if a product is in the cart.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.with_cart(|c| c.contains(id))
    }

    /// Number of distinct products.
    pub fn item_count(&self) -> usize {
        self.with_cart(Cart::item_count)
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> u64 {
        self.with_cart(Cart::total_quantity)
    }
}

impl Default for CartManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CartActions for CartManager {
    fn add_product(&self, product: &Product) {
        let quantity = self.with_cart_mut(|c| c.add_product(product));
        debug!(product_id = %product.id, quantity, "add_product");
    }

    fn remove_product(&self, id: &ProductId) {
        let removed = self.with_cart_mut(|c| c.remove_product(id));
        if removed {
            debug!(product_id = %id, "remove_product");
        } else {
            debug!(product_id = %id, "remove_product: not in cart");
        }
    }

    fn increment_quantity(&self, id: &ProductId) {
        match self.with_cart_mut(|c| c.increment_quantity(id)) {
            Some(quantity) => debug!(product_id = %id, quantity, "increment_quantity"),
            None => debug!(product_id = %id, "increment_quantity: not in cart"),
        }
    }

    fn decrement_quantity(&self, id: &ProductId) {
        match self.with_cart_mut(|c| c.decrement_quantity(id)) {
            Some(quantity) => debug!(product_id = %id, quantity, "decrement_quantity"),
            None => debug!(product_id = %id, "decrement_quantity: not in cart"),
        }
    }

    fn clear_cart(&self) {
        self.with_cart_mut(Cart::clear);
        debug!("clear_cart");
    }

    fn open(&self) {
        self.with_cart_mut(Cart::open);
        debug!("open");
    }

    fn close(&self) {
        self.with_cart_mut(Cart::close);
        debug!("close");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Price;

    fn test_product(id: &str) -> Product {
        Product::new(id, format!("Product {}", id), Price::from_cents(2200))
    }

    #[test]
    fn test_add_product_on_fresh_manager() {
        let cart = CartManager::new();
        let product = test_product("1");

        cart.add_product(&product);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.quantity_of(&product.id), Some(1));
    }

    #[test]
    fn test_should_not_add_product_to_cart_twice() {
        let cart = CartManager::new();
        let product = test_product("1");

        cart.add_product(&product);
        cart.add_product(&product);

        let snapshot = cart.snapshot();
        assert_eq!(snapshot.entries.len(), 1);
        assert_eq!(snapshot.entries[0].quantity, 2);
    }

    #[test]
    fn test_add_add_increment() {
        let cart = CartManager::new();
        let product = test_product("1");

        cart.add_product(&product);
        cart.add_product(&product);
        cart.increment_quantity(&product.id);

        assert_eq!(cart.quantity_of(&product.id), Some(3));
    }

    #[test]
    fn test_decrement_never_goes_negative() {
        let cart = CartManager::new();
        let product = test_product("1");
        cart.add_product(&product);

        let mut rx = cart.subscribe();
        for _ in 0..5 {
            cart.decrement_quantity(&product.id);
            assert_eq!(rx.borrow_and_update().quantity_of(&product.id), Some(0));
        }
    }

    #[test]
    fn test_remove_is_idempotent() {
        let cart = CartManager::new();
        let p1 = test_product("1");
        let p2 = test_product("2");
        cart.add_product(&p1);
        cart.add_product(&p2);

        cart.remove_product(&p1.id);
        cart.remove_product(&p1.id);
        cart.remove_product(&p1.id);

        let ids: Vec<String> = cart
            .snapshot()
            .entries
            .iter()
            .map(|e| e.product_id().to_string())
            .collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_clear_cart() {
        let cart = CartManager::new();
        cart.add_product(&test_product("1"));
        cart.add_product(&test_product("2"));

        cart.clear_cart();

        assert!(cart.is_empty());
        cart.clear_cart();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_open_close_last_call_wins() {
        let cart = CartManager::new();
        assert!(!cart.is_open());

        cart.open();
        cart.open();
        assert!(cart.is_open());

        cart.close();
        cart.close();
        assert!(!cart.is_open());
    }

    #[test]
    fn test_clones_share_state() {
        let cart = CartManager::new();
        let view_handle = cart.clone();

        view_handle.add_product(&test_product("1"));
        view_handle.open();

        assert_eq!(cart.item_count(), 1);
        assert!(cart.is_open());
    }

    #[test]
    fn test_subscribers_see_mutation_immediately() {
        let cart = CartManager::new();
        let product = test_product("1");
        let mut rx = cart.subscribe();

        assert!(!rx.has_changed().unwrap());
        assert!(rx.borrow().is_empty());

        cart.add_product(&product);

        assert!(rx.has_changed().unwrap());
        let snapshot = rx.borrow_and_update().clone();
        assert_eq!(snapshot.quantity_of(&product.id), Some(1));
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_noop_operations_still_notify() {
        let cart = CartManager::new();
        let mut rx = cart.subscribe();

        cart.remove_product(&ProductId::new("missing"));

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), CartSnapshot::default());
    }

    #[test]
    fn test_each_test_gets_its_own_cart() {
        let a = CartManager::new();
        let b = CartManager::new();

        a.add_product(&test_product("1"));

        assert!(b.is_empty());
        assert_eq!(b.subscriber_count(), 0);
        let _rx = b.subscribe();
        assert_eq!(b.subscriber_count(), 1);
    }
}
