//! # HTTP Product Source
//!
//! Fetches the catalog from the storefront backend.
//!
//! ## Request
//! ```text
//! GET {base_url}/api/products
//!
//! 200 OK
//! { "products": [ { "id": "1", "title": "...", "price": "22.33" }, ... ] }
//! ```
//!
//! Any other status, a transport failure, a timeout or a body that does not
//! decode is a [`CatalogError`].

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use storefront_core::{Product, ProductsResponse, PRODUCTS_PATH};
use tracing::{debug, info};
use url::Url;

use crate::error::{CatalogError, CatalogResult};
use crate::source::ProductSource;

/// Product source backed by the storefront HTTP API.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    http: Client,
    products_url: Url,
}

impl HttpProductSource {
    /// Creates a source for the backend at `base_url` (e.g. `http://localhost:3000`).
    pub fn new(base_url: &str, timeout: Duration) -> CatalogResult<Self> {
        let products_url = Url::parse(base_url)?.join(PRODUCTS_PATH)?;
        let http = Client::builder().timeout(timeout).build()?;

        Ok(HttpProductSource { http, products_url })
    }

    /// Full URL the source fetches from.
    pub fn products_url(&self) -> &Url {
        &self.products_url
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        let start = Instant::now();
        debug!(url = %self.products_url, "Fetching products");

        let response = self.http.get(self.products_url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.products_url.to_string(),
            });
        }

        let body = response.bytes().await?;
        let parsed: ProductsResponse = serde_json::from_slice(&body)?;

        info!(
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            count = parsed.products.len(),
            "Products fetched"
        );

        Ok(parsed.products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{ProductOverrides, ProductStore};
    use crate::mock_server::MockServer;
    use axum::http::StatusCode;
    use storefront_core::Price;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn test_products_url_is_fixed_path() {
        let source = HttpProductSource::new("http://localhost:3000", TIMEOUT).unwrap();
        assert_eq!(source.products_url().as_str(), "http://localhost:3000/api/products");
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let err = HttpProductSource::new("not a url", TIMEOUT).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_fetches_products_from_backend() {
        let store = ProductStore::new();
        store.create_list(3);
        store.create(ProductOverrides::titled("Relogio 1").priced(Price::from_cents(2233)));
        let server = MockServer::start(store).await.unwrap();

        let source = HttpProductSource::new(&server.base_url(), TIMEOUT).unwrap();
        let products = source.list_products().await.unwrap();

        assert_eq!(products.len(), 4);
        assert_eq!(products[3].title, "Relogio 1");
        assert_eq!(products[3].price.to_string(), "22.33");
        assert_eq!(server.request_count(), 1);

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let server = MockServer::start(ProductStore::new()).await.unwrap();
        server.fail_with(Some(StatusCode::INTERNAL_SERVER_ERROR));

        let source = HttpProductSource::new(&server.base_url(), TIMEOUT).unwrap();
        let err = source.list_products().await.unwrap_err();

        assert!(matches!(err, CatalogError::UnexpectedStatus { status: 500, .. }));

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_request_error() {
        let server = MockServer::start(ProductStore::new()).await.unwrap();
        let base_url = server.base_url();
        server.shutdown().await;

        let source = HttpProductSource::new(&base_url, TIMEOUT).unwrap();
        let err = source.list_products().await.unwrap_err();

        assert!(matches!(err, CatalogError::Request(_)));
    }
}
