//! # Tokenizer
//!
//! Splits a scanned code string into product counts.
//!
//! ## Scan
//! ```text
//! products: A, BC, CD
//! input:    A B C C D A
//!           ▲ ▲   ▲   ▲
//!           │ │   │   └── "A"   → A:2
//!           │ │   └────── "CD"  → CD:1
//!           │ └────────── "BC"  → BC:1
//!           └──────────── "A"   → A:1
//! ```
//!
//! At most one product can match at any cursor position because the catalog
//! never holds two codes where one is a prefix of the other. The order in
//! which products are tried therefore never changes the result.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::types::Product;

/// Per-checkout tally of scanned products, borrowed from the catalog.
pub type ItemCounts<'a> = HashMap<&'a Product, u32>;

/// Counts the products in `items`.
///
/// ## Errors
/// [`CoreError::UnknownItem`] carrying the whole unconsumed suffix when no
/// product matches at the cursor.
///
/// ## Example
/// ```rust
/// use till_core::{tokenizer::tokenize, Money, Product};
///
/// let products = [Product::new("A", Money::new(30)), Product::new("BC", Money::new(50))];
/// let counts = tokenize("ABCA", &products).unwrap();
/// assert_eq!(counts[&products[0]], 2);
/// assert_eq!(counts[&products[1]], 1);
///
/// let err = tokenize("ABX", &products).unwrap_err();
/// assert_eq!(err.to_string(), "No product found for \"BX\"");
/// ```
pub fn tokenize<'a, I>(items: &str, products: I) -> CoreResult<ItemCounts<'a>>
where
    I: IntoIterator<Item = &'a Product>,
{
    // Empty codes would never advance the cursor.
    let products: Vec<&'a Product> = products
        .into_iter()
        .filter(|p| !p.code().is_empty())
        .collect();

    let bytes = items.as_bytes();
    let mut counts = ItemCounts::new();
    let mut cursor = 0;

    while cursor < bytes.len() {
        let rest = &bytes[cursor..];
        let Some(product) = products
            .iter()
            .copied()
            .find(|p| rest.starts_with(p.code().as_bytes()))
        else {
            return Err(CoreError::UnknownItem {
                remaining: items[cursor..].to_string(),
            });
        };

        *counts.entry(product).or_insert(0) += 1;
        // A whole code is valid UTF-8, so the cursor stays on a char boundary.
        cursor += product.code().len();
    }

    Ok(counts)
}

// =============================================================================
// Unit Tests
// =============================================================================
