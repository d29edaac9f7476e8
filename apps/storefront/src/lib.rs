//! # Storefront Library
//!
//! The storefront application: shared state, views, and the startup path used
//! by the `storefront` binary.
//!
//! ## Module Organization
//! ```text
//! storefront/
//! ├── lib.rs              ◄─── You are here (tracing setup & load_storefront)
//! ├── main.rs             ◄─── CLI entry point
//! ├── state/
//! │   ├── mod.rs          ◄─── State type exports
//! │   ├── cart.rs         ◄─── CartManager + CartActions
//! │   ├── catalog.rs      ◄─── Product source wrapper
//! │   └── config.rs       ◄─── StorefrontConfig (toml + env)
//! ├── views/
//! │   ├── node.rs         ◄─── Element tree
//! │   ├── product_list.rs ◄─── Search + count + cards
//! │   ├── product_card.rs ◄─── One product
//! │   ├── cart_panel.rs   ◄─── Slide-out cart
//! │   ├── cart_item.rs    ◄─── One cart line
//! │   ├── search.rs       ◄─── Search form
//! │   └── page.rs         ◄─── Everything together
//! └── error.rs            ◄─── AppError shown to users
//! ```
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ProductSource ──► ProductListView ──► ProductCardView                  │
//! │  (HTTP / mock)          │                    │ add_to_cart              │
//! │                         │ search             ▼                          │
//! │                         ▼               CartManager ──► watch channel   │
//! │                   filter_products            │                          │
//! │                                              ▼                          │
//! │                                  CartPanelView ──► CartItemView         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod state;
pub mod views;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use error::AppResult;
use state::{CartActions, CartManager, CatalogState, StorefrontConfig};
use storefront_core::{CoreError, ProductId};
use views::StorefrontPage;

/// What to do after the catalog has loaded.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Search term to submit.
    pub search: Option<String>,

    /// Product ids to add to the cart, in order. Repeats increase quantity.
    pub add: Vec<String>,

    /// Whether to open the cart panel even when nothing was added.
    pub open_cart: bool,
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG` wins when set
/// - Otherwise `filter` (from `[logging] filter`, default `info`)
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Loads the catalog, applies `options`, and returns the mounted page.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Build CatalogState from config (HTTP source, request timeout)      │
/// │  2. Create an empty CartManager                                        │
/// │  3. Mount the page: exactly one GET /api/products                      │
/// │     (a failed load is returned as the catalog's AppError)              │
/// │  4. Submit the search term, if any                                     │
/// │  5. Add each requested product through its card (opens the cart)      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn load_storefront(
    config: &StorefrontConfig,
    options: &RenderOptions,
) -> AppResult<StorefrontPage> {
    let catalog = CatalogState::http(config)?;
    build_page(catalog, options).await
}

/// Same as [`load_storefront`] over an already constructed catalog.
pub async fn build_page(catalog: CatalogState, options: &RenderOptions) -> AppResult<StorefrontPage> {
    let mut page = StorefrontPage::new(catalog, CartManager::new());
    page.mount().await;
    if let Some(err) = page.list().load_error() {
        return Err(err.clone());
    }

    if let Some(term) = &options.search {
        page.list_mut().search(term);
    }

    for id in &options.add {
        let id = ProductId::new(id.as_str());
        let product = page
            .list()
            .products()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;
        debug!(product_id = %id, "Adding product from command line");
        page.cart().open();
        page.cart().add_product(&product);
    }

    if options.open_cart {
        page.cart().open();
    }

    info!(
        products = page.list().products().len(),
        cart_items = page.cart().item_count(),
        "Storefront ready"
    );

    Ok(page)
}
