//! # Validation Module
//!
//! Checks that run before a product or a bakery exists.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Type checker                                                 │
//! │  ├── currency is f32/f64, measurement is an integer                    │
//! │  ├── product list is non-empty, prices and tins match the bakery       │
//! │  └── sell/restock/stock only on declared, capable products             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Construction (THIS MODULE)                                   │
//! │  ├── prices are finite and non-negative                                │
//! │  ├── no product type is declared twice                                 │
//! │  └── total area fits the shelf                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Calls                                                        │
//! │  └── nothing left to validate except restock overflow                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::any::TypeId;
use std::collections::HashSet;

use crate::error::{ConfigurationError, ValidationError};
use crate::units::{Currency, Measurement};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A declared product type: its identity and a printable name.
pub type Declaration = (TypeId, &'static str);

// =============================================================================
// Price Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be finite (no NaN, no infinity)
/// - Must be non-negative; zero is allowed (free samples)
///
/// Non-negative prices are what keep a bakery's profits from ever going down.
///
/// ## Example
/// ```rust
/// use bakery_core::validation::validate_price;
///
/// assert!(validate_price(5.0f64).is_ok());
/// assert!(validate_price(0.0f32).is_ok());
/// assert!(validate_price(-1.0f64).is_err());
/// assert!(validate_price(f64::NAN).is_err());
/// ```
pub fn validate_price<C: Currency>(price: C) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    if price < C::ZERO {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Declaration Validators
// =============================================================================

/// Rejects a product list that names the same type twice.
///
/// Reports the first repeated type in declaration order.
pub fn check_unique(declared: &[Declaration]) -> Result<(), ConfigurationError> {
    let mut seen = HashSet::with_capacity(declared.len());
    for &(id, name) in declared {
        if !seen.insert(id) {
            return Err(ConfigurationError::DuplicateProduct { product: name });
        }
    }
    Ok(())
}

/// Rejects a layout whose total area is larger than the shelf.
///
/// Equality fits.
pub fn check_capacity<A: Measurement>(
    required: f64,
    capacity: A,
) -> Result<(), ConfigurationError> {
    let capacity = capacity.as_f64();
    if required > capacity {
        return Err(ConfigurationError::CapacityExceeded { required, capacity });
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
    fn test_validate_price() {
        assert!(validate_price(0.0f64).is_ok());
        assert!(validate_price(3.5f64).is_ok());
        assert!(validate_price(1e300f64).is_ok());

        assert!(validate_price(-0.01f64).is_err());
        assert!(validate_price(f32::NEG_INFINITY).is_err());
        assert!(matches!(
            validate_price(f64::NAN),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_check_unique() {
        let a = (TypeId::of::<u8>(), "u8");
        let b = (TypeId::of::<u16>(), "u16");

        assert!(check_unique(&[a, b]).is_ok());
        assert!(check_unique(&[a]).is_ok());
        assert_eq!(
            check_unique(&[a, b, b]),
            Err(ConfigurationError::DuplicateProduct { product: "u16" })
        );
    }

    #[test]
    fn test_check_capacity() {
        assert!(check_capacity(99.5, 100u32).is_ok());
        assert!(check_capacity(100.0, 100u32).is_ok());
        assert_eq!(
            check_capacity(100.5, 100u32),
            Err(ConfigurationError::CapacityExceeded {
                required: 100.5,
                capacity: 100.0
            })
        );
        assert!(check_capacity(0.5, -1i32).is_err());
    }
}
