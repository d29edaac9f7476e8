//! # Domain Types
//!
//! Product types shared by the catalog, the cart and the views.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   ProductId     │   │ ProductsResponse│       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  String newtype │   │  products: [..] │       │
//! │  │  title          │   │  stable, unique │   │  (wire envelope)│       │
//! │  │  price (Price)  │   └─────────────────┘   └─────────────────┘       │
//! │  │  image          │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are read-only to the storefront: they are fetched, filtered,
//! displayed and copied into cart entries, never edited.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::price::Price;

// =============================================================================
// Product Id
// =============================================================================

/// Stable, unique identifier of a product.
///
/// The backend owns the format; the storefront only compares ids for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Creates an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        ProductId(id.into())
    }

    /// Returns the id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks if the id is empty (never valid for a product).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId::new(id)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId(id)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available in the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,

    /// Display name shown on the card and in the cart.
    pub title: String,

    /// Unit price, serialized as a decimal string (`"22.33"`).
    pub price: Price,

    /// Optional image URL for the product card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// Creates a product without an image.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: Price) -> Self {
        Product {
            id: id.into(),
            title: title.into(),
            price,
            image: None,
        }
    }

    /// Attaches an image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

// =============================================================================
// Wire Envelope
// =============================================================================

/// Body of `GET /api/products`: `{ "products": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_from_backend_json() {
        let json = r#"{
            "products": [
                { "id": "1", "title": "relogio legal", "price": "22.33", "image": "https://example.com/1.jpg" },
                { "id": "2", "title": "Relógio bonito", "price": "22.00" }
            ]
        }"#;

        let response: ProductsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.products.len(), 2);
        assert_eq!(response.products[0].id, ProductId::from("1"));
        assert_eq!(response.products[0].price.cents(), 2233);
        assert_eq!(
            response.products[0].image.as_deref(),
            Some("https://example.com/1.jpg")
        );
        assert_eq!(response.products[1].title, "Relógio bonito");
        assert!(response.products[1].image.is_none());
    }

    #[test]
    fn test_product_serializes_price_as_string() {
        let product = Product::new("7", "Watch", Price::from_cents(1999));
        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(value["id"], "7");
        assert_eq!(value["price"], "19.99");
        assert!(value.get("image").is_none());
    }

    #[test]
    fn test_product_id_display() {
        let id = ProductId::new("abc-1");
        assert_eq!(id.to_string(), "abc-1");
        assert_eq!(id.as_str(), "abc-1");
        assert!(!id.is_empty());
        assert!(ProductId::new("").is_empty());
    }
}
