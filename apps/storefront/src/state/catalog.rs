//! # Catalog State
//!
//! Wraps the product source the views load from.
//!
//! ## Usage in Views
//! ```rust,ignore
//! let catalog = CatalogState::http(&config)?;
//! let mut list = ProductListView::new(catalog.clone(), cart.clone());
//! list.mount().await;
//! ```

use std::sync::Arc;

use storefront_catalog::{CatalogResult, HttpProductSource, ProductSource};

use super::config::StorefrontConfig;

/// Shared handle to a [`ProductSource`].
///
/// Views hold a clone; the source itself decides whether it is live or mocked.
#[derive(Clone)]
pub struct CatalogState {
    source: Arc<dyn ProductSource>,
}

impl CatalogState {
    /// Wraps any product source.
    pub fn new(source: Arc<dyn ProductSource>) -> Self {
        CatalogState { source }
    }

    /// Builds an HTTP-backed catalog from configuration.
    pub fn http(config: &StorefrontConfig) -> CatalogResult<Self> {
        let source = HttpProductSource::new(&config.api.base_url, config.timeout())?;
        Ok(CatalogState::new(Arc::new(source)))
    }

    /// Returns the inner product source.
    pub fn inner(&self) -> &dyn ProductSource {
        self.source.as_ref()
    }
}

impl std::fmt::Debug for CatalogState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogState").finish_non_exhaustive()
    }
}
