//! # Domain Types
//!
//! Catalog entries and bulk deals.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │ DealRequirement │   │      Deal       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code (key)     │◄──│  product        │◄──│  price          │       │
//! │  │  unit_price     │   │  quantity > 0   │   │  requirements   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │     DealId      │   Handle returned by Catalog::add_deal.           │
//! │  │  UUID v4        │   The only way to name a deal for removal.        │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! - `Product`: equal and hashed by `code` alone, the price is ignored.
//! - `Deal`: no value equality at all. Two deals built from the same
//!   requirements are still two deals; the catalog tells them apart by
//!   [`DealId`].

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{validate_price, validate_quantity};

// =============================================================================
// Product
// =============================================================================

/// A product the store sells, identified by its scan code.
#[derive(Debug, Clone)]
pub struct Product {
    code: String,
    unit_price: Money,
}

impl Product {
    /// Creates a product.
    ///
    /// Nothing is checked here: the catalog validates a product when it is
    /// added, which is where [`CoreError::InvalidProduct`] comes from.
    pub fn new(code: impl Into<String>, unit_price: Money) -> Self {
        Product {
            code: code.into(),
            unit_price,
        }
    }

    /// Scan code.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Base price for one unit.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Base price for `count` units.
    #[inline]
    pub fn price_for(&self, count: u32) -> Money {
        self.unit_price.multiply_quantity(count)
    }

    /// True if either code is a prefix of the other (equal codes included).
    pub fn conflicts_with(&self, other: &Product) -> bool {
        self.code.starts_with(&other.code) || other.code.starts_with(&self.code)
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

// =============================================================================
// Deal Requirement
// =============================================================================

/// One line of a deal: a product and how many units of it the bundle needs.
#[derive(Debug, Clone)]
pub struct DealRequirement {
    product: Product,
    quantity: u32,
}

impl DealRequirement {
    /// Creates a requirement, rejecting a zero quantity.
    pub fn new(product: Product, quantity: u32) -> CoreResult<Self> {
        validate_quantity(quantity)?;
        Ok(DealRequirement { product, quantity })
    }

    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

// =============================================================================
// Deal
// =============================================================================

/// A bundle of requirements sold together for a fixed price.
///
/// ## Example
/// ```rust
/// use till_core::{Deal, DealRequirement, Money, Product};
///
/// let b = Product::new("B", Money::new(50));
/// let a = Product::new("A", Money::new(20));
///
/// // 4×B + 2×A for 150
/// let deal = Deal::new(
///     Money::new(150),
///     [
///         DealRequirement::new(b, 4).unwrap(),
///         DealRequirement::new(a, 2).unwrap(),
///     ],
/// )
/// .unwrap();
/// assert_eq!(deal.requirements().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Deal {
    price: Money,
    requirements: Vec<DealRequirement>,
}

impl Deal {
    /// Creates a deal.
    ///
    /// ## Errors
    /// - [`CoreError::DuplicateDealRequirement`] if two requirements name the
    ///   same product code
    /// - [`CoreError::Validation`] if the price is negative
    pub fn new(
        price: Money,
        requirements: impl IntoIterator<Item = DealRequirement>,
    ) -> CoreResult<Self> {
        validate_price("deal price", price)?;

        let mut seen = HashSet::new();
        let mut collected = Vec::new();
        for requirement in requirements {
            if !seen.insert(requirement.product.code.clone()) {
                return Err(CoreError::DuplicateDealRequirement {
                    code: requirement.product.code,
                });
            }
            collected.push(requirement);
        }

        Ok(Deal {
            price,
            requirements: collected,
        })
    }

    /// Price of one whole bundle.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Requirements in the order they were given.
    #[inline]
    pub fn requirements(&self) -> &[DealRequirement] {
        &self.requirements
    }

    /// Price of `applications` whole bundles.
    #[inline]
    pub fn price_for(&self, applications: u32) -> Money {
        self.price.multiply_quantity(applications)
    }
}

// =============================================================================
// Deal Handle
// =============================================================================

/// Opaque handle for a deal held by a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DealId(Uuid);

impl DealId {
    pub(crate) fn new() -> Self {
        DealId(Uuid::new_v4())
    }
}

impl fmt::Display for DealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_identity_is_code_only() {
        let cheap = Product::new("A", Money::new(20));
        let dear = Product::new("A", Money::new(99));
        assert_eq!(cheap, dear);

        let mut set = HashSet::new();
        set.insert(cheap);
        assert!(!set.insert(dear));
        assert!(set.insert(Product::new("B", Money::new(20))));
    }

    #[test]
    fn test_conflicts_with_is_symmetric() {
        let a = Product::new("A", Money::zero());
        let ab = Product::new("AB", Money::zero());
        let ba = Product::new("BA", Money::zero());

        assert!(a.conflicts_with(&ab));
        assert!(ab.conflicts_with(&a));
        assert!(a.conflicts_with(&a.clone()));
        assert!(!a.conflicts_with(&ba));
        assert!(!ab.conflicts_with(&ba));
    }

    #[test]
    fn test_requirement_rejects_zero_quantity() {
        let a = Product::new("A", Money::new(20));
        assert!(matches!(
            DealRequirement::new(a, 0),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn test_deal_rejects_duplicate_product() {
        let b = Product::new("B", Money::new(50));
        let err = Deal::new(
            Money::new(150),
            [
                DealRequirement::new(b.clone(), 4).unwrap(),
                DealRequirement::new(Product::new("A", Money::new(20)), 2).unwrap(),
                DealRequirement::new(b, 1).unwrap(),
            ],
        )
        .unwrap_err();

        assert!(matches!(
            err,
            CoreError::DuplicateDealRequirement { ref code } if code == "B"
        ));
        assert!(err.to_string().contains("\"B\""));
    }

    #[test]
    fn test_deal_rejects_negative_price() {
        let b = Product::new("B", Money::new(50));
        assert!(Deal::new(Money::new(-1), [DealRequirement::new(b, 1).unwrap()]).is_err());
    }

    #[test]
    fn test_deal_price_for_applications() {
        let b = Product::new("B", Money::new(50));
        let deal = Deal::new(Money::new(150), [DealRequirement::new(b, 5).unwrap()]).unwrap();
        assert_eq!(deal.price_for(0), Money::zero());
        assert_eq!(deal.price_for(2), Money::new(300));
    }

    #[test]
    fn test_deal_ids_are_distinct() {
        assert_ne!(DealId::new(), DealId::new());
    }
}
