//! # Mock Backend
//!
//! A local HTTP backend serving a [`ProductStore`] the same way the real
//! storefront API does.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Mock Server Lifecycle                                │
//! │                                                                         │
//! │  MockServer::start(store)                                              │
//! │       │  bind 127.0.0.1:0 (ephemeral port)                              │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────────────────┐                           │
//! │  │ GET /api/products → { products: [...] }  │ ◄── HttpProductSource     │
//! │  │ GET /health       → "OK"                 │                           │
//! │  └──────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  server.shutdown().await   (graceful, waits for the task)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products created in the store after start are served on the next request.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use storefront_core::{ProductsResponse, PRODUCTS_PATH};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::error::CatalogResult;
use crate::factory::ProductStore;

/// Shared state for the request handlers.
#[derive(Debug)]
struct MockState {
    store: ProductStore,
    requests: AtomicUsize,
    /// Status to answer with instead of the products; 0 means healthy.
    failure: AtomicU16,
}

/// A running mock backend.
#[derive(Debug)]
pub struct MockServer {
    addr: SocketAddr,
    state: Arc<MockState>,
    shutdown_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl MockServer {
    /// Starts a server on an ephemeral localhost port.
    pub async fn start(store: ProductStore) -> CatalogResult<Self> {
        Self::start_on(SocketAddr::from(([127, 0, 0, 1], 0)), store).await
    }

    /// Starts a server on a specific address.
    pub async fn start_on(addr: SocketAddr, store: ProductStore) -> CatalogResult<Self> {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        let state = Arc::new(MockState {
            store,
            requests: AtomicUsize::new(0),
            failure: AtomicU16::new(0),
        });

        let app = Router::new()
            .route(PRODUCTS_PATH, get(products_handler))
            .route("/health", get(health_handler))
            .with_state(state.clone());

        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;

        info!(%addr, "Mock backend started");

        let task = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_rx.recv().await;
                    info!("Mock backend shutting down");
                })
                .await
                .ok();
        });

        Ok(MockServer {
            addr,
            state,
            shutdown_tx,
            task,
        })
    }

    /// Address the server is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL to hand to an HTTP product source.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// The store being served.
    pub fn store(&self) -> &ProductStore {
        &self.state.store
    }

    /// Number of product list requests received.
    pub fn request_count(&self) -> usize {
        self.state.requests.load(Ordering::SeqCst)
    }

    /// Makes the product list answer with `status` until reset with `None`.
    pub fn fail_with(&self, status: Option<StatusCode>) {
        let code = status.map_or(0, |s| s.as_u16());
        self.state.failure.store(code, Ordering::SeqCst);
    }

    /// Stops the server and waits for it to finish.
    pub async fn shutdown(self) {
        // The receiver is gone only if the server task already ended.
        let _ = self.shutdown_tx.send(()).await;
        let _ = self.task.await;
    }
}

/// `GET /api/products`
async fn products_handler(State(state): State<Arc<MockState>>) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);

    let failure = state.failure.load(Ordering::SeqCst);
    if failure != 0 {
        let status = StatusCode::from_u16(failure).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        debug!(status = %status, "Mock backend failing on purpose");
        return (status, "mock failure").into_response();
    }

    let products = state.store.all();
    debug!(count = products.len(), "Serving products");
    Json(ProductsResponse { products }).into_response()
}

/// Health check endpoint.
async fn health_handler() -> impl IntoResponse {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::ProductOverrides;

    #[tokio::test]
    async fn test_serves_products_created_after_start() {
        let store = ProductStore::new();
        let server = MockServer::start(store.clone()).await.unwrap();

        store.create(ProductOverrides::titled("Late product"));

        let body: ProductsResponse = reqwest::get(format!("{}{}", server.base_url(), PRODUCTS_PATH))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body.products.len(), 1);
        assert_eq!(body.products[0].title, "Late product");
        assert_eq!(server.store().len(), 1);

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_failure_switch() {
        let server = MockServer::start(ProductStore::new()).await.unwrap();
        let url = format!("{}{}", server.base_url(), PRODUCTS_PATH);

        server.fail_with(Some(StatusCode::SERVICE_UNAVAILABLE));
        let status = reqwest::get(&url).await.unwrap().status();
        assert_eq!(status.as_u16(), 503);

        server.fail_with(None);
        let status = reqwest::get(&url).await.unwrap().status();
        assert!(status.is_success());

        assert_eq!(server.request_count(), 2);
        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_health() {
        let server = MockServer::start(ProductStore::new()).await.unwrap();

        let text = reqwest::get(format!("{}/health", server.base_url()))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();

        assert_eq!(text, "OK");
        assert_eq!(server.request_count(), 0);
        server.shutdown().await;
    }
}
