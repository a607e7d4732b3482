//! # Pricing Engine
//!
//! Applies bulk deals to a basket's product counts, then prices whatever is
//! left at the base unit price.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  counts {A:3, B:5, C:1}        deals [ 150 for (4×B, 2×A) ]             │
//! │                                                                         │
//! │  1. For each deal, in list order:                                       │
//! │       applications = min(B 5/4, A 3/2) = 1                              │
//! │       counts -= 4×B, 2×A      → {A:1, B:1, C:1}                          │
//! │       total  += 150 × 1                                                  │
//! │                                                                         │
//! │  2. Remaining units at base price:                                      │
//! │       A 1×20 + B 1×50 + C 1×30 = 100                                     │
//! │                                                                         │
//! │  total = 250                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rules
//! - List order is priority order. Earlier deals claim units first and later
//!   deals see what is left. No other ordering is ever tried, even when it
//!   would be cheaper for the customer.
//! - A deal applies as many whole bundles as the counts allow; leftover units
//!   fall through to later deals or to base price.
//! - A product missing from the counts has count zero, so a deal naming it
//!   never applies.
//! - A deal with no requirements never applies.

use serde::Serialize;

use crate::money::Money;
use crate::tokenizer::ItemCounts;
use crate::types::{Deal, DealId, Product};

// =============================================================================
// Engine
// =============================================================================

/// Working state of one checkout's pricing.
///
/// Owns the basket's counts and consumes them as deals apply. Dropped at the
/// end of the checkout.
#[derive(Debug)]
pub struct PricingEngine<'c> {
    counts: ItemCounts<'c>,
    total: Money,
}

impl<'c> PricingEngine<'c> {
    pub fn new(counts: ItemCounts<'c>) -> Self {
        PricingEngine {
            counts,
            total: Money::zero(),
        }
    }

    /// Units of `product` not yet claimed by a deal.
    pub fn count_of(&self, product: &Product) -> u32 {
        self.counts.get(product).copied().unwrap_or(0)
    }

    /// How many whole bundles of `deal` the remaining counts cover.
    pub fn max_applications(&self, deal: &Deal) -> u32 {
        deal.requirements()
            .iter()
            .map(|r| self.count_of(r.product()) / r.quantity())
            .min()
            .unwrap_or(0)
    }

    /// Applies `deal` as many times as possible and returns that number.
    pub fn apply_deal(&mut self, deal: &Deal) -> u32 {
        let applications = self.max_applications(deal);
        if applications == 0 {
            return 0;
        }

        for requirement in deal.requirements() {
            // max_applications > 0 means every required product has an entry
            if let Some(count) = self.counts.get_mut(requirement.product()) {
                *count -= requirement.quantity() * applications;
            }
        }
        self.total += deal.price_for(applications);

        applications
    }

    /// Adds the unclaimed units at base price and returns the total.
    pub fn finish(self) -> Money {
        let remainder: Money = self
            .counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(product, count)| product.price_for(*count))
            .sum();

        self.total + remainder
    }

    /// Like [`finish`](Self::finish), also itemising the unclaimed units.
    fn finish_with_lines(self) -> (Money, Vec<ItemLine>) {
        let mut lines: Vec<ItemLine> = self
            .counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(product, count)| ItemLine {
                code: product.code().to_string(),
                quantity: *count,
                unit_price: product.unit_price(),
                amount: product.price_for(*count),
            })
            .collect();
        lines.sort_by(|a, b| a.code.cmp(&b.code));

        let remainder: Money = lines.iter().map(|line| line.amount).sum();
        (self.total + remainder, lines)
    }
}

/// Prices a basket against deals in priority order.
///
/// ## Example
/// ```rust
/// use std::collections::HashMap;
/// use till_core::{pricing::price, Deal, DealRequirement, Money, Product};
///
/// let a = Product::new("A", Money::new(20));
/// let b = Product::new("B", Money::new(50));
/// let deal = Deal::new(Money::new(150), [DealRequirement::new(b.clone(), 5).unwrap()]).unwrap();
///
/// let counts = HashMap::from([(&a, 3), (&b, 5)]);
/// assert_eq!(price(counts, [&deal]).amount(), 210);
/// ```
pub fn price<'d>(counts: ItemCounts<'_>, deals: impl IntoIterator<Item = &'d Deal>) -> Money {
    let mut engine = PricingEngine::new(counts);
    for deal in deals {
        engine.apply_deal(deal);
    }
    engine.finish()
}

/// Prices a basket like [`price`] and keeps the breakdown.
///
/// Deals that did not apply get no line. Item lines are sorted by code.
pub fn price_receipt<'d>(
    counts: ItemCounts<'_>,
    deals: impl IntoIterator<Item = (DealId, &'d Deal)>,
) -> Receipt {
    let mut engine = PricingEngine::new(counts);
    let mut deal_lines = Vec::new();

    for (deal_id, deal) in deals {
        let applications = engine.apply_deal(deal);
        if applications > 0 {
            deal_lines.push(DealLine {
                deal_id,
                applications,
                bundle_price: deal.price(),
                amount: deal.price_for(applications),
            });
        }
    }

    let (total, items) = engine.finish_with_lines();
    Receipt {
        deals: deal_lines,
        items,
        total,
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A deal that applied during checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealLine {
    pub deal_id: DealId,
    /// Whole bundles applied.
    pub applications: u32,
    pub bundle_price: Money,
    /// `bundle_price × applications`
    pub amount: Money,
}

/// Units left after deals, charged at base price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemLine {
    pub code: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub amount: Money,
}

/// Itemised result of a checkout.
///
/// ## Invariant
/// `total` equals the sum of every deal line and item line amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub deals: Vec<DealLine>,
    pub items: Vec<ItemLine>,
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
