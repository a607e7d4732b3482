//! # till-core: Pure Checkout Pricing for Till
//!
//! This crate prices a checkout: a catalog of products with short codes, a
//! scanned string of those codes with no separators, and a list of bulk
//! deals. It contains no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Till Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    till-cli (binary)                            │   │
//! │  │    config ──► catalog file ──► CatalogState ──► checkout       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ till-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │ tokenizer │  │  pricing  │  │   types   │  │   │
//! │  │   │  Catalog  │  │ tokenize  │  │  Engine   │  │  Product  │  │   │
//! │  │   │  checkout │  │ItemCounts │  │  Receipt  │  │   Deal    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, DealRequirement, Deal, DealId
//! - [`catalog`] - Product/deal registry and the checkout entry point
//! - [`tokenizer`] - Scanned string → product counts
//! - [`pricing`] - Product counts + deals → total or receipt
//! - [`money`] - Integer money
//! - [`error`] - Domain error types
//! - [`validation`] - Field rules for codes, prices and quantities
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::{Catalog, Deal, DealRequirement, Money, Product};
//!
//! let mut catalog = Catalog::new();
//! catalog.add_product(Product::new("A", Money::new(20))).unwrap();
//! catalog.add_product(Product::new("B", Money::new(50))).unwrap();
//! catalog.add_product(Product::new("C", Money::new(30))).unwrap();
//!
//! // 5×B for 150
//! let b = catalog.product("B").unwrap().clone();
//! catalog.add_deal(Deal::new(Money::new(150), [DealRequirement::new(b, 5).unwrap()]).unwrap());
//!
//! // A:3 → 60, B:5 → 150, C:1 → 30
//! assert_eq!(catalog.checkout("ABBACBBAB").unwrap().amount(), 240);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod tokenizer;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{DealLine, ItemLine, PricingEngine, Receipt};
pub use tokenizer::ItemCounts;
pub use types::*;
