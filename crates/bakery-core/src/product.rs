//! # Product Variants
//!
//! The four baked goods a bakery can stock.
//!
//! ## Variant Matrix
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  │  base tier          │  extended tier                 │
//! │  ────────────────┼─────────────────────┼──────────────────────────────  │
//! │  Rectangular     │  CheeseCake<T>      │  CreamCake<T, P>               │
//! │                  │  Stocked            │  Stocked + Sellable            │
//! │  ────────────────┼─────────────────────┼──────────────────────────────  │
//! │  Circular        │  CherryPie<T>       │  ApplePie<T, P>                │
//! │                  │  Stocked            │  Stocked + Sellable            │
//! │                  │                     │  + Restockable                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `T` is a *tin*: a zero-sized type whose associated constants fix the
//! product's dimensions and measurement type. Two products baked in different
//! tins are different types, so they can share a bakery.
//!
//! ```rust
//! use bakery_core::product::{CreamCake, RectangularTin, Sellable, Stocked};
//!
//! struct Tray;
//! impl RectangularTin for Tray {
//!     type Measure = u32;
//!     const LENGTH: u32 = 20;
//!     const WIDTH: u32 = 30;
//! }
//!
//! let mut cake = CreamCake::<Tray, f64>::new(2, 5.0).unwrap();
//! assert_eq!(cake.sell(), Some(5.0));
//! assert_eq!(cake.stock(), 1);
//! ```
//!
//! Capabilities are separate traits rather than a hierarchy. Only
//! [`ApplePie`] implements [`Restockable`] out of the box; a downstream
//! product type may implement it as well.

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use tracing::debug;

use crate::error::{BakeryError, BakeryResult};
use crate::geometry::ShapeKind;
use crate::units::{Currency, Measurement, Unpriced};
use crate::validation::validate_price;

// =============================================================================
// Tins
// =============================================================================

/// Dimensions of a rectangular tin.
pub trait RectangularTin: 'static {
    type Measure: Measurement;
    const LENGTH: Self::Measure;
    const WIDTH: Self::Measure;
}

/// Dimensions of a round tin.
pub trait RoundTin: 'static {
    type Measure: Measurement;
    const RADIUS: Self::Measure;
}

fn rectangular_area<T: RectangularTin>() -> f64 {
    T::LENGTH.as_f64() * T::WIDTH.as_f64() * ShapeKind::Rectangular.constant()
}

fn round_area<T: RoundTin>() -> f64 {
    T::RADIUS.as_f64() * T::RADIUS.as_f64() * ShapeKind::Circular.constant()
}

// =============================================================================
// Capability Traits
// =============================================================================

/// Structural description of a product type.
pub trait Product: Sized + 'static {
    /// Integral type of the tin dimensions.
    type Measure: Measurement;

    /// [`Unpriced`] for base-tier products, the price type otherwise.
    type Price;

    /// Shape family.
    const SHAPE: ShapeKind;

    /// Short variant name used in logs and reports.
    const KIND: &'static str;

    /// Shelf footprint of one product of this type.
    fn area() -> f64;

    /// Unit price widened to `f64`, if the product has one.
    fn listed_price(&self) -> Option<f64>;
}

/// Anything with a stock counter.
pub trait Stocked {
    fn stock(&self) -> u32;
}

/// Products that can be sold one unit at a time.
pub trait Sellable: Stocked {
    type Currency: Currency;

    fn price(&self) -> Self::Currency;

    /// Removes one unit from stock and returns its price.
    ///
    /// Returns `None` without touching anything when the stock is empty.
    fn sell(&mut self) -> Option<Self::Currency>;
}

/// Products whose stock can be topped up.
pub trait Restockable: Stocked {
    /// Adds `amount` units and returns the new stock.
    ///
    /// Fails with [`BakeryError::StockOverflow`] if the counter would wrap;
    /// the stock is unchanged in that case.
    fn restock(&mut self, amount: u32) -> BakeryResult<u32>;
}

// =============================================================================
// Shared Counters
// =============================================================================

fn take_one(stock: &mut u32) -> bool {
    match stock.checked_sub(1) {
        Some(left) => {
            *stock = left;
            true
        }
        None => false,
    }
}

// =============================================================================
// Cakes
// =============================================================================

/// Plain rectangular good: stock only.
pub struct CheeseCake<T: RectangularTin> {
    stock: u32,
    _tin: PhantomData<T>,
}

impl<T: RectangularTin> CheeseCake<T> {
    pub fn new(initial_stock: u32) -> Self {
        CheeseCake {
            stock: initial_stock,
            _tin: PhantomData,
        }
    }
}

impl<T: RectangularTin> Product for CheeseCake<T> {
    type Measure = T::Measure;
    type Price = Unpriced;
    const SHAPE: ShapeKind = ShapeKind::Rectangular;
    const KIND: &'static str = "CheeseCake";

    fn area() -> f64 {
        rectangular_area::<T>()
    }

    fn listed_price(&self) -> Option<f64> {
        None
    }
}

impl<T: RectangularTin> Stocked for CheeseCake<T> {
    fn stock(&self) -> u32 {
        self.stock
    }
}

impl<T: RectangularTin> fmt::Debug for CheeseCake<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheeseCake")
            .field("tin", &type_name::<T>())
            .field("stock", &self.stock)
            .finish()
    }
}

/// Priced rectangular good: stock, price and sale.
pub struct CreamCake<T: RectangularTin, P: Currency> {
    stock: u32,
    price: P,
    _tin: PhantomData<T>,
}

impl<T: RectangularTin, P: Currency> CreamCake<T, P> {
    /// Rejects negative, NaN and infinite prices.
    pub fn new(initial_stock: u32, price: P) -> BakeryResult<Self> {
        validate_price(price)?;
        Ok(CreamCake {
            stock: initial_stock,
            price,
            _tin: PhantomData,
        })
    }
}

impl<T: RectangularTin, P: Currency> Product for CreamCake<T, P> {
    type Measure = T::Measure;
    type Price = P;
    const SHAPE: ShapeKind = ShapeKind::Rectangular;
    const KIND: &'static str = "CreamCake";

    fn area() -> f64 {
        rectangular_area::<T>()
    }

    fn listed_price(&self) -> Option<f64> {
        Some(self.price.as_f64())
    }
}

impl<T: RectangularTin, P: Currency> Stocked for CreamCake<T, P> {
    fn stock(&self) -> u32 {
        self.stock
    }
}

impl<T: RectangularTin, P: Currency> Sellable for CreamCake<T, P> {
    type Currency = P;

    fn price(&self) -> P {
        self.price
    }

    fn sell(&mut self) -> Option<P> {
        take_one(&mut self.stock).then_some(self.price)
    }
}

impl<T: RectangularTin, P: Currency> fmt::Debug for CreamCake<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreamCake")
            .field("tin", &type_name::<T>())
            .field("stock", &self.stock)
            .field("price", &self.price)
            .finish()
    }
}

// =============================================================================
// Pies
// =============================================================================

/// Plain circular good: stock only.
pub struct CherryPie<T: RoundTin> {
    stock: u32,
    _tin: PhantomData<T>,
}

impl<T: RoundTin> CherryPie<T> {
    pub fn new(initial_stock: u32) -> Self {
        CherryPie {
            stock: initial_stock,
            _tin: PhantomData,
        }
    }
}

impl<T: RoundTin> Product for CherryPie<T> {
    type Measure = T::Measure;
    type Price = Unpriced;
    const SHAPE: ShapeKind = ShapeKind::Circular;
    const KIND: &'static str = "CherryPie";

    fn area() -> f64 {
        round_area::<T>()
    }

    fn listed_price(&self) -> Option<f64> {
        None
    }
}

impl<T: RoundTin> Stocked for CherryPie<T> {
    fn stock(&self) -> u32 {
        self.stock
    }
}

impl<T: RoundTin> fmt::Debug for CherryPie<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CherryPie")
            .field("tin", &type_name::<T>())
            .field("stock", &self.stock)
            .finish()
    }
}

/// Priced circular good: stock, price, sale and restock.
pub struct ApplePie<T: RoundTin, P: Currency> {
    stock: u32,
    price: P,
    _tin: PhantomData<T>,
}

impl<T: RoundTin, P: Currency> ApplePie<T, P> {
    /// Rejects negative, NaN and infinite prices.
    pub fn new(initial_stock: u32, price: P) -> BakeryResult<Self> {
        validate_price(price)?;
        Ok(ApplePie {
            stock: initial_stock,
            price,
            _tin: PhantomData,
        })
    }
}

impl<T: RoundTin, P: Currency> Product for ApplePie<T, P> {
    type Measure = T::Measure;
    type Price = P;
    const SHAPE: ShapeKind = ShapeKind::Circular;
    const KIND: &'static str = "ApplePie";

    fn area() -> f64 {
        round_area::<T>()
    }

    fn listed_price(&self) -> Option<f64> {
        Some(self.price.as_f64())
    }
}

impl<T: RoundTin, P: Currency> Stocked for ApplePie<T, P> {
    fn stock(&self) -> u32 {
        self.stock
    }
}

impl<T: RoundTin, P: Currency> Sellable for ApplePie<T, P> {
    type Currency = P;

    fn price(&self) -> P {
        self.price
    }

    fn sell(&mut self) -> Option<P> {
        take_one(&mut self.stock).then_some(self.price)
    }
}

impl<T: RoundTin, P: Currency> Restockable for ApplePie<T, P> {
    fn restock(&mut self, amount: u32) -> BakeryResult<u32> {
        let Some(stock) = self.stock.checked_add(amount) else {
            return Err(BakeryError::StockOverflow {
                product: Self::KIND,
                current: self.stock,
                amount,
            });
        };
        debug!(product = Self::KIND, amount, stock, "Restocked");
        self.stock = stock;
        Ok(stock)
    }
}

impl<T: RoundTin, P: Currency> fmt::Debug for ApplePie<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplePie")
            .field("tin", &type_name::<T>())
            .field("stock", &self.stock)
            .field("price", &self.price)
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::geometry::{ln_2, pi};

    struct Tray;
    impl RectangularTin for Tray {
        type Measure = u32;
        const LENGTH: u32 = 20;
        const WIDTH: u32 = 30;
    }

    struct Dish;
    impl RoundTin for Dish {
        type Measure = u32;
        const RADIUS: u32 = 10;
    }

    #[test]
    fn test_areas() {
        assert_eq!(CheeseCake::<Tray>::area(), 600.0 * ln_2());
        assert_eq!(CreamCake::<Tray, f64>::area(), CheeseCake::<Tray>::area());
        assert_eq!(CherryPie::<Dish>::area(), 100.0 * pi());
        assert_eq!(ApplePie::<Dish, f32>::area(), CherryPie::<Dish>::area());
    }

    #[test]
    fn test_sell_decrements_and_yields_price() {
        let mut cake = CreamCake::<Tray, f64>::new(2, 5.0).unwrap();
        assert_eq!(cake.sell(), Some(5.0));
        assert_eq!(cake.sell(), Some(5.0));
        assert_eq!(cake.stock(), 0);
    }

    #[test]
    fn test_sell_on_empty_stock_is_noop() {
        let mut pie = ApplePie::<Dish, f64>::new(0, 3.5).unwrap();
        assert_eq!(pie.sell(), None);
        assert_eq!(pie.stock(), 0);
        assert_eq!(pie.price(), 3.5);
    }

    #[test]
    fn test_restock_is_additive() {
        let mut pie = ApplePie::<Dish, f64>::new(1, 3.5).unwrap();
        assert_eq!(pie.restock(6).unwrap(), 7);
        assert_eq!(pie.restock(0).unwrap(), 7);
        assert_eq!(pie.restock(3).unwrap(), 10);
    }

    #[test]
    fn test_restock_overflow_leaves_stock() {
        let mut pie = ApplePie::<Dish, f64>::new(5, 3.5).unwrap();
        let err = pie.restock(u32::MAX).unwrap_err();
        assert!(matches!(
            err,
            BakeryError::StockOverflow {
                current: 5,
                amount: u32::MAX,
                ..
            }
        ));
        assert_eq!(pie.stock(), 5);
    }

    #[test]
    fn test_invalid_prices_rejected() {
        let err = CreamCake::<Tray, f64>::new(1, -0.5).unwrap_err();
        assert_eq!(
            err,
            BakeryError::Validation(ValidationError::MustBeNonNegative {
                field: "price".to_string()
            })
        );
        assert!(ApplePie::<Dish, f32>::new(1, f32::NAN).is_err());
        assert!(ApplePie::<Dish, f64>::new(1, f64::INFINITY).is_err());
        assert!(CreamCake::<Tray, f64>::new(1, 0.0).is_ok());
    }

    #[test]
    fn test_base_tier_has_no_price() {
        let cake = CheeseCake::<Tray>::new(3);
        assert_eq!(cake.stock(), 3);
        assert_eq!(cake.listed_price(), None);
        assert_eq!(CherryPie::<Dish>::new(4).listed_price(), None);
    }

    #[test]
    fn test_debug_names_tin() {
        let cake = CheeseCake::<Tray>::new(3);
        let out = format!("{:?}", cake);
        assert!(out.starts_with("CheeseCake"));
        assert!(out.contains("Tray"));
    }
}
