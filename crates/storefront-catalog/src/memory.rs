//! In-memory product source.
//!
//! Serves whatever is in a [`ProductStore`] without any network, and can be
//! switched into a failure mode to exercise the "could not load" path.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use storefront_core::Product;
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::factory::ProductStore;
use crate::source::ProductSource;

/// Product source reading from a shared [`ProductStore`].
#[derive(Debug, Default)]
pub struct InMemoryProductSource {
    store: ProductStore,
    failure: Mutex<Option<String>>,
    calls: AtomicUsize,
}

impl InMemoryProductSource {
    /// Creates a source over an existing store.
    pub fn new(store: ProductStore) -> Self {
        InMemoryProductSource {
            store,
            failure: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    /// Creates a source whose every call fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        let source = InMemoryProductSource::default();
        source.fail_with(Some(reason.into()));
        source
    }

    /// Switches the failure mode on (`Some`) or off (`None`).
    pub fn fail_with(&self, reason: Option<String>) {
        *self.failure.lock().unwrap_or_else(PoisonError::into_inner) = reason;
    }

    /// Number of `list_products` calls so far, failed ones included.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The backing store.
    pub fn store(&self) -> &ProductStore {
        &self.store
    }
}

#[async_trait]
impl ProductSource for InMemoryProductSource {
    async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let failure = self
            .failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(reason) = failure {
            debug!(%reason, "In-memory product source failing on purpose");
            return Err(CatalogError::Unavailable(reason));
        }

        Ok(self.store.all())
    }
}
