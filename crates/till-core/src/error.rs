//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  till-core errors (this file)                                          │
//! │  ├── CoreError        - Catalog setup and checkout failures            │
//! │  └── ValidationError  - Field-level input validation failures          │
//! │                                                                         │
//! │  till-cli errors (in app)                                              │
//! │  └── AppError         - Config, catalog file and I/O failures          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → exit status            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending codes in error messages
//! 3. Errors are enum variants, never String
//! 4. Every failure is immediate: no retry, no partial result

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Catalog and checkout errors.
///
/// Everything except [`CoreError::UnknownItem`] signals a bad catalog setup;
/// `UnknownItem` signals a scanned code string the catalog cannot explain.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be added to the catalog.
    ///
    /// ## When This Occurs
    /// - Product code is empty
    /// - Unit price is negative
    #[error("Invalid product: {reason}")]
    InvalidProduct { reason: String },

    /// New product code collides with an existing one.
    ///
    /// ## When This Occurs
    /// One code is a prefix of the other, in either direction, or both are
    /// identical. Scanned strings carry no separators, so either case would
    /// make tokenization ambiguous.
    /// ```text
    /// catalog: { A }
    /// add "AB" ──► ConflictingProduct { code: "AB", existing: "A" }
    ///
    /// catalog: { AB }
    /// add "A"  ──► ConflictingProduct { code: "A", existing: "AB" }
    /// ```
    #[error("Product \"{code}\" conflicts with current product \"{existing}\"")]
    ConflictingProduct { code: String, existing: String },

    /// The same product appears twice in one deal.
    #[error("Product \"{code}\" is present more than once")]
    DuplicateDealRequirement { code: String },

    /// No known product matches at the current scan position.
    ///
    /// `remaining` is the whole unconsumed suffix of the scanned string,
    /// not only the first offending character.
    #[error("No product found for \"{remaining}\"")]
    UnknownItem { remaining: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation before a value enters the catalog.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
