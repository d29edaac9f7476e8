//! The whole storefront page: header, product list, and cart panel.

use std::sync::Arc;

use super::cart_panel::CartPanelView;
use super::node::Element;
use super::product_list::ProductListView;
use crate::state::{CartActions, CartManager, CatalogState};

/// Page layout wiring one cart into the list and the panel.
#[derive(Debug)]
pub struct StorefrontPage {
    cart: CartManager,
    list: ProductListView,
    panel: CartPanelView,
}

impl StorefrontPage {
    /// Wires `cart` into a new product list and cart panel.
    pub fn new(catalog: CatalogState, cart: CartManager) -> Self {
        let actions: Arc<dyn CartActions> = Arc::new(cart.clone());
        StorefrontPage {
            list: ProductListView::new(catalog, actions),
            panel: CartPanelView::new(cart.clone()),
            cart,
        }
    }

    /// Mounts the product list.
    pub async fn mount(&mut self) {
        self.list.mount().await;
    }

    /// The cart shared by every view on the page.
    pub fn cart(&self) -> &CartManager {
        &self.cart
    }

    /// The product list.
    pub fn list(&self) -> &ProductListView {
        &self.list
    }

    /// Mutable product list, for submitting searches.
    pub fn list_mut(&mut self) -> &mut ProductListView {
        &mut self.list
    }

    /// Mutable cart panel, for its close and clear buttons.
    pub fn panel_mut(&mut self) -> &mut CartPanelView {
        &mut self.panel
    }

    /// Header cart button: opens a closed cart, closes an open one.
    pub fn toggle_cart(&self) {
        if self.cart.is_open() {
            self.cart.close();
        } else {
            self.cart.open();
        }
    }

    /// Renders header, product list and cart panel.
    pub fn render(&self) -> Element {
        let header = Element::new("header")
            .class("storefront-header")
            .child(Element::new("h1").text("Storefront"))
            .child(
                Element::new("button")
                    .test_id("toggle-cart")
                    .attr("type", "button")
                    .text(format!("Cart ({})", self.cart.total_quantity())),
            );

        Element::new("div")
            .test_id("storefront")
            .class("storefront")
            .child(header)
            .child(self.list.render())
            .child(self.panel.render())
    }
}
