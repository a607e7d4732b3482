//! # Catalog
//!
//! The store's known products and its active deals, plus the checkout entry
//! point that prices a scanned code string against them.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  "ABBACBBAB" ──► tokenize(products) ──► {A:3, B:5, C:1}                 │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                        price(deals in list order) ──► 240               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Prefix Invariant
//! Scanned strings have no separators, so the catalog refuses any code that
//! is a prefix of an existing code, or has one as a prefix. Identical codes
//! are the degenerate case and are refused too. With this in place at most
//! one product matches at any scan position.
//!
//! ## Concurrency
//! Checkout only reads. Callers sharing a catalog between threads must keep
//! mutation from overlapping a checkout (e.g. behind an `RwLock`).

use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::{self, Receipt};
use crate::tokenizer;
use crate::types::{Deal, DealId, Product};
use crate::validation::{validate_code, validate_price};

/// Products keyed by code and deals in priority order.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    products: BTreeMap<String, Product>,
    deals: Vec<(DealId, Deal)>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Adds a product.
    ///
    /// ## Returns
    /// Whether an entry with the same code was replaced. A same-code add is a
    /// conflict and fails first, so a successful add always returns `false`.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidProduct`] for an empty code or a negative unit
    ///   price
    /// - [`CoreError::ConflictingProduct`] if the code and any existing code
    ///   are prefixes of one another
    ///
    /// ## Example
    /// ```rust
    /// use till_core::{Catalog, CoreError, Money, Product};
    ///
    /// let mut catalog = Catalog::new();
    /// catalog.add_product(Product::new("A", Money::new(20))).unwrap();
    ///
    /// let err = catalog.add_product(Product::new("AB", Money::new(50))).unwrap_err();
    /// assert!(matches!(err, CoreError::ConflictingProduct { .. }));
    /// ```
    pub fn add_product(&mut self, product: Product) -> CoreResult<bool> {
        validate_code(product.code())
            .and_then(|()| validate_price("unit price", product.unit_price()))
            .map_err(|e| CoreError::InvalidProduct {
                reason: e.to_string(),
            })?;

        if let Some(existing) = self.products.values().find(|p| p.conflicts_with(&product)) {
            return Err(CoreError::ConflictingProduct {
                code: product.code().to_string(),
                existing: existing.code().to_string(),
            });
        }

        let code = product.code().to_string();
        Ok(self.products.insert(code, product).is_some())
    }

    /// Removes a product by code. Returns true if it existed.
    ///
    /// Deals naming the product stay in place; they simply stop applying.
    pub fn remove_product(&mut self, code: &str) -> bool {
        self.products.remove(code).is_some()
    }

    /// Looks up a product by code.
    pub fn product(&self, code: &str) -> Option<&Product> {
        self.products.get(code)
    }

    /// All products, ordered by code.
    pub fn products(&self) -> impl Iterator<Item = &Product> + '_ {
        self.products.values()
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    // =========================================================================
    // Deals
    // =========================================================================

    /// Appends a deal at the lowest priority and returns its handle.
    pub fn add_deal(&mut self, deal: Deal) -> DealId {
        let id = DealId::new();
        self.deals.push((id, deal));
        id
    }

    /// Removes the deal added under `id`. Returns false if it is not present.
    pub fn remove_deal(&mut self, id: DealId) -> bool {
        match self.deals.iter().position(|(deal_id, _)| *deal_id == id) {
            Some(index) => {
                self.deals.remove(index);
                true
            }
            None => false,
        }
    }

    /// Looks up a deal by handle.
    pub fn deal(&self, id: DealId) -> Option<&Deal> {
        self.deals
            .iter()
            .find(|(deal_id, _)| *deal_id == id)
            .map(|(_, deal)| deal)
    }

    /// Deals in priority order.
    pub fn deals(&self) -> impl Iterator<Item = (DealId, &Deal)> + '_ {
        self.deals.iter().map(|(id, deal)| (*id, deal))
    }

    pub fn deal_count(&self) -> usize {
        self.deals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.deals.is_empty()
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Prices a scanned code string.
    ///
    /// ## Errors
    /// [`CoreError::UnknownItem`] if part of the string matches no product.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::{Catalog, Money, Product};
    ///
    /// let mut catalog = Catalog::new();
    /// catalog.add_product(Product::new("A", Money::new(30))).unwrap();
    /// catalog.add_product(Product::new("BC", Money::new(50))).unwrap();
    /// catalog.add_product(Product::new("CD", Money::new(20))).unwrap();
    ///
    /// assert_eq!(catalog.checkout("ABCCDA").unwrap().amount(), 130);
    /// ```
    pub fn checkout(&self, items: &str) -> CoreResult<Money> {
        let counts = tokenizer::tokenize(items, self.products())?;
        Ok(pricing::price(counts, self.deals.iter().map(|(_, deal)| deal)))
    }

    /// Prices a scanned code string and itemises the result.
    pub fn checkout_receipt(&self, items: &str) -> CoreResult<Receipt> {
        let counts = tokenizer::tokenize(items, self.products())?;
        Ok(pricing::price_receipt(counts, self.deals()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
