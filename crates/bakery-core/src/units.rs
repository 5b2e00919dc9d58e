//! # Units Module
//!
//! The two numeric families a bakery is parameterised over.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Currency     f32, f64              prices and profits                 │
//! │  Measurement  i8 .. i128, u8 .. u128, isize, usize                     │
//! │               tin dimensions and shelf capacity                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both traits are sealed. A `Bakery<i32, _, _>` or a `Bakery<_, f64, _>`
//! simply does not type-check, which is how "currency must be floating point"
//! and "measurement must be integral" are enforced.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::ops::AddAssign;

mod sealed {
    pub trait Sealed {}
}

// =============================================================================
// Currency
// =============================================================================

/// Floating-point type used for every price and for the profit accumulator.
pub trait Currency:
    sealed::Sealed + Copy + PartialOrd + AddAssign + fmt::Debug + fmt::Display + 'static
{
    /// Additive identity; the starting value of a bakery's profits.
    const ZERO: Self;

    /// Widens the value for reporting.
    fn as_f64(self) -> f64;

    /// False for NaN and the infinities.
    fn is_finite(self) -> bool;
}

impl sealed::Sealed for f32 {}
impl sealed::Sealed for f64 {}

impl Currency for f32 {
    const ZERO: Self = 0.0;

    #[inline]
    fn as_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

impl Currency for f64 {
    const ZERO: Self = 0.0;

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

// =============================================================================
// Measurement
// =============================================================================

/// Integral type used for tin dimensions and shelf capacity.
pub trait Measurement:
    sealed::Sealed
    + Copy
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Serialize
    + DeserializeOwned
    + 'static
{
    /// Converts to `f64` for area arithmetic. Very large 64/128-bit values
    /// round to the nearest representable float.
    fn as_f64(self) -> f64;
}

macro_rules! impl_measurement {
    ($($int:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $int {}

            impl Measurement for $int {
                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_measurement!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// =============================================================================
// Price Tags
// =============================================================================

/// Price tag of base-tier products, which carry no price at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Unpriced;

/// "A product priced with `Self` may be listed in a bakery that keeps its
/// books in `C`."
///
/// Holds for [`Unpriced`] in every currency, and for a currency in itself.
/// A `CreamCake<_, f32>` on an `f64` bakery therefore fails to build.
pub trait PricedIn<C: Currency> {}

impl PricedIn<f32> for f32 {}
impl PricedIn<f64> for f64 {}
impl<C: Currency> PricedIn<C> for Unpriced {}

// =============================================================================
// Unit Tests
// =============================================================================
