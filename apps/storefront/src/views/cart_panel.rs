//! # Cart Panel
//!
//! The slide-out cart: a header with a close button, one [`CartItemView`] per
//! entry (or an empty notice), the total, and a "clear cart" button.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ Cart                 [close] │
//! │──────────────────────────────│
//! │ Relogio    $22.00  [-] 2 [+] │
//! │                     [remove] │
//! │──────────────────────────────│
//! │ Total: $44.00   [clear cart] │
//! └──────────────────────────────┘
//! ```
//!
//! When the cart is closed the panel still renders, with class `hidden`.

use storefront_core::{CartSnapshot, Price};

use super::cart_item::CartItemView;
use super::node::Element;
use crate::state::{CartActions, CartManager};

/// Text shown when the cart has no entries.
pub const EMPTY_CART_MESSAGE: &str = "Cart is empty";

/// Events the panel emits to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartPanelEvent {
    /// The close button was clicked.
    Close,
}

/// The cart panel.
#[derive(Debug, Clone)]
pub struct CartPanelView {
    cart: CartManager,
    emitted: Vec<CartPanelEvent>,
}

impl CartPanelView {
    /// Creates a panel over `cart` with no events emitted yet.
    pub fn new(cart: CartManager) -> Self {
        CartPanelView {
            cart,
            emitted: Vec::new(),
        }
    }

    /// Events emitted so far, oldest first.
    pub fn emitted(&self) -> &[CartPanelEvent] {
        &self.emitted
    }

    /// Close button: hides the cart and emits [`CartPanelEvent::Close`].
    pub fn click_close(&mut self) {
        self.cart.close();
        self.emitted.push(CartPanelEvent::Close);
    }

    /// Clear button.
    pub fn click_clear(&self) {
        self.cart.clear_cart();
    }

    /// One item view per cart entry, in cart order.
    pub fn items(&self) -> Vec<CartItemView> {
        self.cart.with_cart(|c| {
            c.entries()
                .iter()
                .map(|e| CartItemView::new(e.product_id().clone(), self.cart.clone()))
                .collect()
        })
    }

    /// Renders the panel from the cart's current snapshot.
    pub fn render(&self) -> Element {
        let snapshot = self.cart.snapshot();

        let header = Element::new("header")
            .class("cart-header")
            .child(Element::new("h2").text("Cart"))
            .child(
                Element::new("button")
                    .test_id("close-button")
                    .attr("type", "button")
                    .text("close"),
            );

        let body = if snapshot.is_empty() {
            Element::new("p")
                .test_id("empty-cart")
                .class("cart-empty")
                .text(EMPTY_CART_MESSAGE)
        } else {
            Element::new("ul")
                .class("cart-items")
                .children(self.items().iter().filter_map(CartItemView::render))
        };

        let footer = Element::new("footer")
            .class("cart-footer")
            .child(
                Element::new("span")
                    .test_id("cart-total")
                    .text(format!("Total: {}", cart_total(&snapshot).display_currency())),
            )
            .child(
                Element::new("button")
                    .test_id("clear-cart-button")
                    .attr("type", "button")
                    .text("clear cart"),
            );

        Element::new("aside")
            .test_id("cart")
            .class("cart")
            .class_if(!snapshot.is_open, "hidden")
            .child(header)
            .child(body)
            .child(footer)
    }
}

/// Sum of price × quantity over every entry.
pub fn cart_total(snapshot: &CartSnapshot) -> Price {
    let cents = snapshot
        .entries
        .iter()
        .map(|e| e.price().cents().saturating_mul(u64::from(e.quantity)))
        .fold(0u64, u64::saturating_add);
    Price::from_cents(cents)
}
