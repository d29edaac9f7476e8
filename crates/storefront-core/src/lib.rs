//! # storefront-core: Pure Logic for the Storefront
//!
//! Everything the storefront needs to decide, with nothing it needs to fetch.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Views (apps/storefront)                      │   │
//! │  │   ProductList ──► ProductCard ──► CartPanel ──► CartItem        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartManager handle                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   price   │  │   cart    │  │  search   │  │   │
//! │  │   │  Product  │  │   Price   │  │   Cart    │  │  filter   │  │   │
//! │  │   │ ProductId │  │  (cents)  │  │ CartEntry │  │  label    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              storefront-catalog (Product Sources)               │   │
//! │  │             HTTP /api/products, in-memory, mock server          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product and product identifiers
//! - [`price`] - Fixed-point price (no floating point)
//! - [`cart`] - The cart aggregate and its invariants
//! - [`search`] - Title filtering and the count label
//! - [`validation`] - Checks applied to products from a product source
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Cart, Price, Product};
//!
//! let watch = Product::new("1", "Relogio bonito", Price::from_cents(2200));
//!
//! let mut cart = Cart::new();
//! cart.add_product(&watch);
//! cart.add_product(&watch);
//!
//! assert_eq!(cart.item_count(), 1);
//! assert_eq!(cart.quantity_of(&watch.id), Some(2));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod price;
pub mod search;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartEntry, CartSnapshot};
pub use error::{CoreError, CoreResult, ValidationError};
pub use price::Price;
pub use search::{filter_products, quantity_label};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Path of the product collection on the storefront backend.
pub const PRODUCTS_PATH: &str = "/api/products";

/// Maximum length of a product title accepted from a product source.
pub const MAX_TITLE_LENGTH: usize = 200;
