//! # Error Types
//!
//! Domain-specific error types for bakery-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  Compile time (never a value)                                          │
//! │  ├── undeclared product, unsupported sell/restock                      │
//! │  └── empty product list, currency or measurement mismatch              │
//! │                                                                         │
//! │  Construction time (this file)                                         │
//! │  ├── ConfigurationError - duplicate products, shelf too small          │
//! │  └── ValidationError    - bad prices                                   │
//! │                                                                         │
//! │  Call time                                                             │
//! │  └── BakeryError::StockOverflow - restock past u32::MAX                │
//! │                                                                         │
//! │  Flow: ValidationError / ConfigurationError → BakeryError → caller     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Selling a product that is out of stock is not an error at all: the sale is
//! skipped and nothing changes.

use thiserror::Error;

// =============================================================================
// Bakery Error
// =============================================================================

/// Umbrella error for every fallible bakery operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BakeryError {
    /// The declared bakery layout is invalid. No bakery was created.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A product value was rejected before it reached a bakery.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Restocking would push the stock counter past `u32::MAX`.
    ///
    /// The stock is left untouched when this is returned.
    #[error("Restocking {product} by {amount} would overflow stock (current {current})")]
    StockOverflow {
        product: &'static str,
        current: u32,
        amount: u32,
    },
}

// =============================================================================
// Configuration Error
// =============================================================================

/// Structural problems in a bakery declaration.
///
/// These are only ever produced while a bakery is being built. Once
/// `Bakery::new` has returned `Ok`, none of them can occur.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// The same product type appears twice in the product list.
    #[error("Product type {product} is declared more than once")]
    DuplicateProduct { product: &'static str },

    /// The products' combined area does not fit on the shelf.
    #[error("Shelf area too small: products need {required:.3}, capacity is {capacity}")]
    CapacityExceeded { required: f64, capacity: f64 },

    /// A configuration document could not be parsed.
    #[error("Invalid bakery configuration: {0}")]
    InvalidConfig(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for product values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with BakeryError.
pub type BakeryResult<T> = Result<T, BakeryError>;

// =============================================================================
// Unit Tests
// =============================================================================
