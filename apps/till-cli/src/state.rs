//! # Catalog State
//!
//! Shares one catalog between concurrent checkouts.
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog State Access                                 │
//! │                                                                         │
//! │  checkout("AAB") ──┐                                                    │
//! │  checkout("BC")  ──┼──► read lock (shared) ──► Catalog::checkout        │
//! │  checkout("CDA") ──┘                                                    │
//! │                                                                         │
//! │  with_catalog_mut ────► write lock (exclusive) ──► add/remove           │
//! │                                                                         │
//! │  A write waits for in-flight checkouts, so a checkout never sees a     │
//! │  catalog half way through a change.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why RwLock?
//! Checkouts vastly outnumber catalog changes and only read, so they should
//! not block each other.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use till_core::{Catalog, CoreResult, Money, Receipt};

use crate::error::AppResult;

/// Result of pricing one basket.
#[derive(Debug)]
pub struct BasketOutcome {
    pub basket: String,
    pub result: CoreResult<Receipt>,
}

/// Shared, lock-protected catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    catalog: Arc<RwLock<Catalog>>,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Executes a function with read access to the catalog.
    pub async fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Catalog) -> R,
    {
        let catalog = self.catalog.read().await;
        f(&catalog)
    }

    /// Executes a function with write access to the catalog.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_catalog_mut(|c| c.remove_product("A")).await;
    /// ```
    pub async fn with_catalog_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Catalog) -> R,
    {
        let mut catalog = self.catalog.write().await;
        f(&mut catalog)
    }

    pub async fn checkout(&self, items: &str) -> CoreResult<Money> {
        self.with_catalog(|c| c.checkout(items)).await
    }

    pub async fn checkout_receipt(&self, items: &str) -> CoreResult<Receipt> {
        self.with_catalog(|c| c.checkout_receipt(items)).await
    }

    /// Prices every basket concurrently, one task per basket.
    ///
    /// Outcomes come back in the order the baskets were given.
    pub async fn checkout_all(&self, baskets: Vec<String>) -> AppResult<Vec<BasketOutcome>> {
        let handles: Vec<_> = baskets
            .into_iter()
            .map(|basket| {
                let state = self.clone();
                tokio::spawn(async move {
                    let result = state.checkout_receipt(&basket).await;
                    debug!(basket = %basket, ok = result.is_ok(), "Basket priced");
                    BasketOutcome { basket, result }
                })
            })
            .collect();

        let mut outcomes = Vec::with_capacity(handles.len());
        for handle in handles {
            outcomes.push(handle.await?);
        }
        Ok(outcomes)
    }
}
