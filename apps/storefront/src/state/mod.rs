//! # State Module
//!
//! Long-lived state shared by the views.
//!
//! ## Why Multiple State Types?
//! Each view asks only for what it uses: the product list needs the catalog
//! and the cart, a cart item needs only cart actions.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │  CatalogState    │  │   CartManager    │  │  StorefrontConfig    │  │
//! │  │                  │  │                  │  │                      │  │
//! │  │  Arc<dyn         │  │  Arc<Mutex<Cart>>│  │  api.base_url        │  │
//! │  │   ProductSource> │  │  + watch sender  │  │  api.timeout_secs    │  │
//! │  │                  │  │                  │  │  logging.filter      │  │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘  │
//! │                                                                         │
//! │  • CatalogState: sources are Send + Sync, no extra locking             │
//! │  • CartManager: one Mutex, snapshots published on every mutation       │
//! │  • StorefrontConfig: read-only after startup                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;

#[cfg(test)]
pub use cart::MockCartActions;
pub use cart::{CartActions, CartManager};
pub use catalog::CatalogState;
pub use config::{ApiSettings, ConfigError, LogSettings, StorefrontConfig, CONFIG_FILE_NAME};
