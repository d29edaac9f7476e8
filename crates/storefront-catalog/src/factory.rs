//! # Product Store & Factory
//!
//! Seeds products for the mock backend and for tests.
//!
//! ## Generated Products
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  store.create_list(3)                                                   │
//! │                                                                         │
//! │    id  title              price                                         │
//! │    ──  ─────────────────  ─────                                         │
//! │    1   Leather Wallet     26.16                                         │
//! │    2   Canvas Sneakers    42.33                                         │
//! │    3   Wool Scarf         58.50                                         │
//! │                                                                         │
//! │  store.create(ProductOverrides::titled("Relogio 1"))                    │
//! │                                                                         │
//! │    4   Relogio 1          74.67                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids are sequential per store. Titles and prices are derived from the id,
//! so two stores seeded the same way hold the same products.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use storefront_core::{Price, Product, ProductId};

/// Titles used for generated products.
const TITLES: &[&str] = &[
    "Leather Wallet",
    "Canvas Sneakers",
    "Wool Scarf",
    "Denim Jacket",
    "Aviator Sunglasses",
    "Hiking Backpack",
    "Linen Shirt",
    "Silk Tie",
    "Running Shorts",
    "Baseball Cap",
    "Cotton Hoodie",
    "Ankle Boots",
    "Travel Duffel",
    "Rain Poncho",
    "Knit Beanie",
];

/// Fields to force on a created product; `None` keeps the generated value.
#[derive(Debug, Clone, Default)]
pub struct ProductOverrides {
    pub title: Option<String>,
    pub price: Option<Price>,
    pub image: Option<String>,
}

impl ProductOverrides {
    /// Overrides only the title.
    pub fn titled(title: impl Into<String>) -> Self {
        ProductOverrides {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Overrides the price.
    pub fn priced(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    /// Overrides the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

#[derive(Debug, Default)]
struct StoreInner {
    products: Vec<Product>,
    last_id: u64,
}

/// Shared, clonable product collection.
///
/// Clones share the same products, so a test can keep creating products after
/// handing the store to a [`MockServer`](crate::MockServer).
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl ProductStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        ProductStore::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Creates and stores one product.
    pub fn create(&self, overrides: ProductOverrides) -> Product {
        let mut inner = self.lock();
        inner.last_id += 1;
        let product = generate_product(inner.last_id, overrides);
        inner.products.push(product.clone());
        product
    }

    /// Creates and stores `count` generated products.
    pub fn create_list(&self, count: usize) -> Vec<Product> {
        (0..count)
            .map(|_| self.create(ProductOverrides::default()))
            .collect()
    }

    /// Every stored product, in creation order.
    pub fn all(&self) -> Vec<Product> {
        self.lock().products.clone()
    }

    /// Number of stored products.
    pub fn len(&self) -> usize {
        self.lock().products.len()
    }

    /// Checks if the store holds no products.
    pub fn is_empty(&self) -> bool {
        self.lock().products.is_empty()
    }

    /// Removes every product. Ids keep counting up.
    pub fn clear(&self) {
        self.lock().products.clear();
    }
}

/// Builds the product for a given sequence number.
fn generate_product(seq: u64, overrides: ProductOverrides) -> Product {
    // seq starts at 1, so the index never underflows
    let title_idx = ((seq - 1) % TITLES.len() as u64) as usize;
    let title = overrides
        .title
        .unwrap_or_else(|| TITLES[title_idx].to_string());

    // 9.99 base plus a stride that walks the cents digits
    let price = overrides
        .price
        .unwrap_or_else(|| Price::from_cents(999 + (seq * 1617) % 9000));

    let image = overrides
        .image
        .unwrap_or_else(|| format!("/images/products/{}.jpg", seq));

    Product::new(ProductId::new(seq.to_string()), title, price).with_image(image)
}
