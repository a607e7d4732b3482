//! # Validation Module
//!
//! Input validation for values entering the catalog.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog file (till-cli)                                      │
//! │  └── Type validation (deserialization)                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE: field rules (code, price, quantity)             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog invariants                                           │
//! │  ├── No code is a prefix of another code                               │
//! │  └── No product appears twice in a deal                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::validation::{validate_code, validate_quantity};
//!
//! assert!(validate_code("BC").is_ok());
//! assert!(validate_quantity(5).is_ok());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product code.
///
/// Any non-empty string is a code. Scanned strings are matched byte for byte,
/// so letters, digits, punctuation and multi-byte characters all work.
///
/// ## Example
/// ```rust
/// use till_core::validation::validate_code;
///
/// assert!(validate_code("A").is_ok());
/// assert!(validate_code("a-1").is_ok());
/// assert!(validate_code("").is_err());
/// ```
pub fn validate_code(code: &str) -> ValidationResult<()> {
    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "product code".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price (unit price or deal price).
///
/// Zero is allowed (free items, giveaway bundles).
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a deal requirement quantity.
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_code() {
        assert!(validate_code("A").is_ok());
        assert!(validate_code("BC").is_ok());
        assert!(validate_code("a-1").is_ok());
        assert!(validate_code("É").is_ok());
        assert!(validate_code(&"B".repeat(51)).is_ok());

        let err = validate_code("").unwrap_err();
        assert!(matches!(err, ValidationError::Required { .. }));
        assert_eq!(err.to_string(), "product code is required");
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("unit price", Money::zero()).is_ok());
        assert!(validate_price("unit price", Money::new(30)).is_ok());
        assert!(validate_price("deal price", Money::new(-1)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(5).is_ok());
        assert!(validate_quantity(0).is_err());
    }
}
