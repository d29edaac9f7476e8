//! One line in the cart panel.
//!
//! The item reads its entry from the [`CartManager`] on every render, so the
//! quantity shown is always the cart's, never a local copy.

use storefront_core::{CartEntry, ProductId};

use super::node::Element;
use crate::state::{CartActions, CartManager};

/// View over a single cart entry.
#[derive(Debug, Clone)]
pub struct CartItemView {
    product_id: ProductId,
    cart: CartManager,
}

impl CartItemView {
    /// Creates the view for the entry of `product_id` in `cart`.
    pub fn new(product_id: ProductId, cart: CartManager) -> Self {
        CartItemView { product_id, cart }
    }

    /// Product this item shows.
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// "+" button.
    pub fn increment(&self) {
        self.cart.increment_quantity(&self.product_id);
    }

    /// "-" button.
    pub fn decrement(&self) {
        self.cart.decrement_quantity(&self.product_id);
    }

    /// "remove" button.
    pub fn remove(&self) {
        self.cart.remove_product(&self.product_id);
    }

    fn entry(&self) -> Option<CartEntry> {
        self.cart.with_cart(|c| c.entry(&self.product_id).cloned())
    }

    /// Renders the entry, or `None` once it has left the cart.
    pub fn render(&self) -> Option<Element> {
        let entry = self.entry()?;

        let el = Element::new("li")
            .test_id("cart-item")
            .class("cart-item")
            .attr("data-product-id", self.product_id.as_str())
            .child(Element::new("span").class("cart-item-title").text(entry.product.title.clone()))
            .child(
                Element::new("span")
                    .class("cart-item-price")
                    .text(entry.price().display_currency()),
            )
            .child(
                Element::new("div")
                    .class("cart-item-controls")
                    .child(
                        Element::new("button")
                            .test_id("-")
                            .attr("type", "button")
                            .text("-"),
                    )
                    .child(
                        Element::new("span")
                            .test_id("quantity")
                            .text(entry.quantity.to_string()),
                    )
                    .child(
                        Element::new("button")
                            .test_id("+")
                            .attr("type", "button")
                            .text("+"),
                    ),
            )
            .child(
                Element::new("button")
                    .test_id("remove")
                    .attr("type", "button")
                    .text("remove"),
            );

        Some(el)
    }
}
