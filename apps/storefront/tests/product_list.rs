//! Product list against the mock backend over real HTTP.

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use storefront::state::{CartManager, CatalogState};
use storefront::views::{ProductListView, LOAD_ERROR_MESSAGE};
use storefront_catalog::{HttpProductSource, MockServer, ProductOverrides, ProductStore};

async fn mounted_list(server: &MockServer) -> ProductListView {
    let source = HttpProductSource::new(&server.base_url(), Duration::from_secs(5)).unwrap();
    let mut view = ProductListView::new(
        CatalogState::new(Arc::new(source)),
        Arc::new(CartManager::new()),
    );
    view.mount().await;
    view
}

#[tokio::test]
async fn test_fetches_products_exactly_once() {
    let store = ProductStore::new();
    store.create_list(3);
    let server = MockServer::start(store).await.unwrap();

    let mut view = mounted_list(&server).await;
    view.mount().await;
    view.search("anything");
    let _ = view.render();

    assert_eq!(server.request_count(), 1);
    server.shutdown().await;
}

#[tokio::test]
async fn test_renders_one_card_per_product() {
    let store = ProductStore::new();
    store.create_list(10);
    let server = MockServer::start(store).await.unwrap();

    let view = mounted_list(&server).await;

    assert_eq!(view.render().find_all("product-card").len(), 10);
    server.shutdown().await;
}

#[tokio::test]
async fn test_filters_by_search_term() {
    let store = ProductStore::new();
    store.create_list(10);
    store.create(ProductOverrides::titled("Relogio bonito"));
    store.create(ProductOverrides::titled("Relogio lindo"));
    let server = MockServer::start(store).await.unwrap();

    let mut view = mounted_list(&server).await;
    assert_eq!(view.render().find_all("product-card").len(), 12);

    view.search("Relogio");
    let el = view.render();
    let cards = el.find_all("product-card");
    assert_eq!(cards.len(), 2);
    assert!(cards[0].text_content().contains("Relogio bonito"));
    assert!(cards[1].text_content().contains("Relogio lindo"));

    view.search("");
    assert_eq!(view.render().find_all("product-card").len(), 12);

    server.shutdown().await;
}

#[tokio::test]
async fn test_clearing_search_restores_all_products() {
    let store = ProductStore::new();
    store.create_list(10);
    store.create(ProductOverrides::titled("Relogio bonito"));
    let server = MockServer::start(store).await.unwrap();

    let mut view = mounted_list(&server).await;
    view.search("Relogio");
    assert_eq!(view.cards().len(), 1);

    view.search("");
    assert_eq!(view.cards().len(), 11);
    assert_eq!(server.request_count(), 1);

    server.shutdown().await;
}

#[tokio::test]
async fn test_quantity_label_plural() {
    let store = ProductStore::new();
    store.create_list(27);
    let server = MockServer::start(store).await.unwrap();

    let view = mounted_list(&server).await;
    let label = view.render().find("total-quantity-label").unwrap().text_content();

    assert_eq!(label, "27 Products");
    server.shutdown().await;
}

#[tokio::test]
async fn test_quantity_label_singular() {
    let store = ProductStore::new();
    store.create(ProductOverrides::default());
    let server = MockServer::start(store).await.unwrap();

    let view = mounted_list(&server).await;
    let label = view.render().find("total-quantity-label").unwrap().text_content();

    assert_eq!(label, "1 Product");
    server.shutdown().await;
}

#[tokio::test]
async fn test_failed_request_shows_error_message() {
    let store = ProductStore::new();
    store.create_list(5);
    let server = MockServer::start(store).await.unwrap();
    server.fail_with(Some(StatusCode::INTERNAL_SERVER_ERROR));

    let view = mounted_list(&server).await;
    let el = view.render();

    assert!(el.text_content().contains(LOAD_ERROR_MESSAGE));
    assert!(el.find_all("product-card").is_empty());
    assert_eq!(server.request_count(), 1);

    server.shutdown().await;
}

#[tokio::test]
async fn test_unreachable_backend_shows_error_message() {
    let server = MockServer::start(ProductStore::new()).await.unwrap();
    let base_url = server.base_url();
    server.shutdown().await;

    let source = HttpProductSource::new(&base_url, Duration::from_secs(2)).unwrap();
    let mut view = ProductListView::new(
        CatalogState::new(Arc::new(source)),
        Arc::new(CartManager::new()),
    );
    view.mount().await;

    assert_eq!(view.error_message(), Some("Problema ao carregar a lista"));
    assert!(view.cards().is_empty());
}
