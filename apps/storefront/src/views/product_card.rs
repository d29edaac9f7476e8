//! # Product Card
//!
//! One product in the list: image, title, price, and an "add to cart" button.
//!
//! ## Click Flow
//! ```text
//! [Add to cart] ──► cart.open() ──► cart.add_product(product)
//! ```
//! The panel opens first so the new entry appears in an already visible cart.

use std::sync::Arc;

use storefront_core::Product;
use tracing::debug;

use super::node::Element;
use crate::state::CartActions;

/// Card for a single product.
#[derive(Clone)]
pub struct ProductCardView {
    product: Product,
    cart: Arc<dyn CartActions>,
}

impl ProductCardView {
    /// Creates a card that adds `product` to `cart` when clicked.
    pub fn new(product: Product, cart: Arc<dyn CartActions>) -> Self {
        ProductCardView { product, cart }
    }

    /// The product on this card.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Handles a click on the card's button.
    pub fn add_to_cart(&self) {
        debug!(product_id = %self.product.id, "Add to cart clicked");
        self.cart.open();
        self.cart.add_product(&self.product);
    }

    /// Renders image (if any), title, price and the add button.
    pub fn render(&self) -> Element {
        let mut card = Element::new("div")
            .test_id("product-card")
            .class("card")
            .attr("data-product-id", self.product.id.as_str());

        if let Some(image) = &self.product.image {
            card = card.child(
                Element::new("img")
                    .attr("src", image.clone())
                    .attr("alt", self.product.title.clone()),
            );
        }

        card.child(Element::new("h3").class("card-title").text(self.product.title.clone()))
            .child(
                Element::new("p")
                    .class("card-price")
                    .text(self.product.price.display_currency()),
            )
            .child(
                Element::new("button")
                    .test_id("add-to-cart")
                    .attr("type", "button")
                    .text("Add to cart"),
            )
    }
}

impl std::fmt::Debug for ProductCardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductCardView")
            .field("product", &self.product)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MockCartActions;
    use mockall::predicate::eq;
    use mockall::Sequence;
    use storefront_core::Price;

    fn product() -> Product {
        Product::new("1", "Relogio bonito", Price::from_cents(2200))
            .with_image("https://example.com/relogio.jpg")
    }

    #[test]
    fn test_renders_title_price_and_image() {
        let card = ProductCardView::new(product(), Arc::new(MockCartActions::new()));
        let el = card.render();

        let text = el.text_content();
        assert!(text.contains("Relogio bonito"));
        assert!(text.contains("$22.00"));
        let img = el.find_all_by_tag("img");
        assert_eq!(img.len(), 1);
        assert_eq!(img[0].get_attr("src"), Some("https://example.com/relogio.jpg"));
    }

    #[test]
    fn test_renders_without_image() {
        let product = Product::new("2", "Bone", Price::from_cents(1050));
        let card = ProductCardView::new(product, Arc::new(MockCartActions::new()));

        let el = card.render();
        assert!(el.find_all_by_tag("img").is_empty());
        assert!(el.text_content().contains("$10.50"));
    }

    #[test]
    fn test_click_opens_cart_then_adds_product() {
        let product = product();
        let mut cart = MockCartActions::new();
        let mut seq = Sequence::new();

        cart.expect_open()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        cart.expect_add_product()
            .with(eq(product.clone()))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let card = ProductCardView::new(product, Arc::new(cart));
        card.add_to_cart();
    }

    #[test]
    fn test_click_against_real_manager() {
        let manager = crate::state::CartManager::new();
        let card = ProductCardView::new(product(), Arc::new(manager.clone()));

        card.add_to_cart();
        card.add_to_cart();

        assert!(manager.is_open());
        assert_eq!(manager.quantity_of(&product().id), Some(2));
    }
}
