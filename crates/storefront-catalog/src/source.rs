//! The seam between views and wherever products come from.

use async_trait::async_trait;
use storefront_core::Product;

use crate::error::CatalogResult;

/// Supplies the product list shown by the storefront.
///
/// Implementations perform one fetch per call; callers decide when to call.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetches every product, in the order the backend returns them.
    async fn list_products(&self) -> CatalogResult<Vec<Product>>;
}
