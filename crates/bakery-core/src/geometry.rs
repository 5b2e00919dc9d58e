//! # Geometry Constants
//!
//! Area-scaling constants for the two shape families.
//!
//! | Shape        | Area                         |
//! |--------------|------------------------------|
//! | Rectangular  | `length × width × ln_2()`    |
//! | Circular     | `radius × radius × pi()`     |
//!
//! Both constants come from fixed-length alternating series rather than
//! `std::f64::consts`, so areas are reproducible bit for bit. They are
//! `const fn` and fold away at compile time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Number of Nilakantha terms summed by [`pi`].
pub const PI_SERIES_TERMS: i64 = 300;

/// Highest index summed by [`ln_2`] (the series runs over `0..=LN_2_SERIES_TERMS`).
pub const LN_2_SERIES_TERMS: i64 = 4000;

/// π via the Nilakantha series:
/// `3 + 4/(2·3·4) − 4/(4·5·6) + 4/(6·7·8) − …`
pub const fn pi() -> f64 {
    let mut res = 3.0;
    let mut i: i64 = 1;
    while i <= PI_SERIES_TERMS {
        let term = 4.0 / ((2 * i * (2 * i + 1) * (2 * i + 2)) as f64);
        if i % 2 == 1 {
            res += term;
        } else {
            res -= term;
        }
        i += 1;
    }
    res
}

/// ln 2 from `Σ (−1)^i / ((i+1)(i+2)) = 2·ln 2 − 1`.
pub const fn ln_2() -> f64 {
    let mut res = 0.0;
    let mut i: i64 = 0;
    while i <= LN_2_SERIES_TERMS {
        let term = 1.0 / (((i + 1) * (i + 2)) as f64);
        if i % 2 == 0 {
            res += term;
        } else {
            res -= term;
        }
        i += 1;
    }
    (res + 1.0) / 2.0
}

// =============================================================================
// Shape Kind
// =============================================================================

/// The shape family of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Baked in a rectangular tin (cakes).
    Rectangular,
    /// Baked in a round tin (pies).
    Circular,
}

impl ShapeKind {
    /// Multiplier applied to the product of the tin's dimensions.
    pub const fn constant(self) -> f64 {
        match self {
            ShapeKind::Rectangular => ln_2(),
            ShapeKind::Circular => pi(),
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeKind::Rectangular => write!(f, "rectangular"),
            ShapeKind::Circular => write!(f, "circular"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
