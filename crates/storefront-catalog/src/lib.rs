//! # storefront-catalog: Product Sources for the Storefront
//!
//! Fetches the product list the storefront displays.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Data Flow                             │
//! │                                                                         │
//! │  ProductListView::mount()                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 storefront-catalog (THIS CRATE)                 │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ ProductSource │    │  ProductStore │    │  MockServer  │  │   │
//! │  │   │   (trait)     │    │  + factory    │    │  (axum)      │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ Http ─────────┼───►│ create()      │◄───│ GET          │  │   │
//! │  │   │ InMemory      │    │ create_list() │    │ /api/products│  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<Product> (storefront-core)                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`source`] - The `ProductSource` trait
//! - [`http`] - Live backend over HTTP
//! - [`memory`] - In-memory source with a failure switch
//! - [`factory`] - Product store and factory for seeding test/dev data
//! - [`mock_server`] - Local HTTP backend serving the product store
//! - [`error`] - Catalog error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storefront_catalog::{HttpProductSource, MockServer, ProductSource, ProductStore};
//!
//! let store = ProductStore::new();
//! store.create_list(10);
//!
//! let server = MockServer::start(store).await?;
//! let source = HttpProductSource::new(&server.base_url(), Duration::from_secs(5))?;
//! let products = source.list_products().await?;
//! assert_eq!(products.len(), 10);
//!
//! server.shutdown().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod factory;
pub mod http;
pub mod memory;
pub mod mock_server;
pub mod source;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{CatalogError, CatalogResult};
pub use factory::{ProductOverrides, ProductStore};
pub use http::HttpProductSource;
pub use memory::InMemoryProductSource;
pub use mock_server::MockServer;
pub use source::ProductSource;
