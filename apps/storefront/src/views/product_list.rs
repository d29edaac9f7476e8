//! # Product List
//!
//! The storefront's main view: search form, count label, and a card per
//! matching product.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product List Lifecycle                               │
//! │                                                                         │
//! │   new() ──► mount().await ──┬── Ok(products) ──► validate ──► Loaded    │
//! │              (one fetch)    │                     (skip bad)            │
//! │                             └── Err(e) ─────────► Failed              │
//! │                                                   "Problema ao        │
//! │                                                    carregar a lista"   │
//! │                                                                         │
//! │   search(term) ──► refilter the loaded products (no refetch)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use std::time::Instant;

use storefront_core::validation::partition_valid;
use storefront_core::{filter_products, quantity_label, Product};
use tracing::{error, info, warn};

use super::node::Element;
use super::product_card::ProductCardView;
use super::search::SearchView;
use crate::error::AppError;
use crate::state::{CartActions, CatalogState};

/// Message shown when the product list cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Problema ao carregar a lista";

/// Where the list is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// `mount` has not run yet.
    Pending,
    /// Products are loaded.
    Loaded,
    /// The fetch failed; holds the cause. The view itself only ever shows
    /// [`LOAD_ERROR_MESSAGE`].
    Failed(AppError),
}

/// The product list view.
pub struct ProductListView {
    catalog: CatalogState,
    cart: Arc<dyn CartActions>,
    products: Vec<Product>,
    search: SearchView,
    search_term: String,
    state: LoadState,
}

impl ProductListView {
    /// Creates an unmounted list; nothing is fetched until [`mount`](Self::mount).
    pub fn new(catalog: CatalogState, cart: Arc<dyn CartActions>) -> Self {
        ProductListView {
            catalog,
            cart,
            products: Vec::new(),
            search: SearchView::new(),
            search_term: String::new(),
            state: LoadState::Pending,
        }
    }

    /// Loads products from the catalog.
    ///
    /// Only the first call fetches; later calls are no-ops.
    pub async fn mount(&mut self) {
        if self.state != LoadState::Pending {
            return;
        }

        let started = Instant::now();
        match self.catalog.inner().list_products().await {
            Ok(products) => {
                let (valid, rejected) = partition_valid(products);
                for (product, reason) in &rejected {
                    warn!(product_id = %product.id, %reason, "Skipping invalid product");
                }
                info!(
                    count = valid.len(),
                    skipped = rejected.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Product list loaded"
                );
                self.products = valid;
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                let err = AppError::from(e);
                error!(code = ?err.code, "Failed to load product list");
                self.products.clear();
                self.state = LoadState::Failed(err);
            }
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Why loading failed, if it did.
    pub fn load_error(&self) -> Option<&AppError> {
        match &self.state {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// The message shown in place of the list when loading failed.
    pub fn error_message(&self) -> Option<&str> {
        self.load_error().map(|_| LOAD_ERROR_MESSAGE)
    }

    /// Every loaded product, unfiltered.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Types `term` into the search form and submits it.
    pub fn search(&mut self, term: &str) {
        self.search.set_value(term);
        self.search_term = self.search.submit();
    }

    /// The last submitted search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Products matching the current search term, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        filter_products(&self.products, &self.search_term)
    }

    /// One card per visible product.
    pub fn cards(&self) -> Vec<ProductCardView> {
        self.visible_products()
            .into_iter()
            .map(|p| ProductCardView::new(p.clone(), Arc::clone(&self.cart)))
            .collect()
    }

    /// Renders the search form, then either the error message or the count
    /// label and cards.
    pub fn render(&self) -> Element {
        let mut root = Element::new("main")
            .test_id("product-list")
            .class("product-list")
            .child(self.search.render());

        if let Some(message) = self.error_message() {
            return root.child(
                Element::new("p")
                    .test_id("error-message")
                    .class("error")
                    .text(message),
            );
        }

        let visible = self.visible_products();
        root = root.child(
            Element::new("p")
                .test_id("total-quantity-label")
                .text(quantity_label(visible.len())),
        );

        root.child(
            Element::new("section")
                .class("cards")
                .children(self.cards().iter().map(ProductCardView::render)),
        )
    }
}

impl std::fmt::Debug for ProductListView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductListView")
            .field("products", &self.products.len())
            .field("search_term", &self.search_term)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
