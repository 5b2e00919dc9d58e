//! # Bakery
//!
//! A capacity-bounded registry owning exactly one value per declared product
//! type, plus a single profit accumulator.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Declare   type Shop = Bakery<f64, u32, Products![Cake, Pie]>;      │
//! │               (type checker: currency, measurement, non-empty,         │
//! │                price and tin consistency)                              │
//! │                                                                         │
//! │  2. Open      Shop::new(1_000_000, products![cake, pie])?              │
//! │               (duplicates, shelf area)                                 │
//! │                                                                         │
//! │  3. Trade     shop.sell::<Cake, _>()                                   │
//! │               shop.restock::<Pie, _>(6)?                               │
//! │               shop.stock::<Cake, _>()                                  │
//! │               shop.profits()                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every product operation names its product by type. The trailing `_` is the
//! list position, which the compiler works out.
//!
//! ## Example
//! ```rust
//! use bakery_core::{products, Products};
//! use bakery_core::{ApplePie, Bakery, CreamCake, RectangularTin, RoundTin};
//!
//! struct Tray;
//! impl RectangularTin for Tray {
//!     type Measure = u32;
//!     const LENGTH: u32 = 20;
//!     const WIDTH: u32 = 30;
//! }
//!
//! struct Dish;
//! impl RoundTin for Dish {
//!     type Measure = u32;
//!     const RADIUS: u32 = 10;
//! }
//!
//! type Cake = CreamCake<Tray, f64>;
//! type Pie = ApplePie<Dish, f64>;
//! type Shop = Bakery<f64, u32, Products![Cake, Pie]>;
//!
//! let mut shop = Shop::new(
//!     1_000_000,
//!     products![Cake::new(10, 5.0).unwrap(), Pie::new(4, 3.5).unwrap()],
//! )
//! .unwrap();
//!
//! shop.sell::<Cake, _>();
//! shop.sell::<Pie, _>();
//! assert_eq!(shop.stock::<Cake, _>(), 9);
//! assert_eq!(shop.profits(), 8.5);
//!
//! shop.restock::<Pie, _>(6).unwrap();
//! assert_eq!(shop.stock::<Pie, _>(), 9);
//! ```
//!
//! ## Rejected While Compiling
//! In the blocks below `Slab` is a plain cake, `Tart` a priced cake and
//! `Crumble` a priced pie.
//!
//! Products that are not declared:
//! ```compile_fail
//! # use bakery_core::*;
//! # struct T; impl RectangularTin for T { type Measure = u32; const LENGTH: u32 = 1; const WIDTH: u32 = 1; }
//! # struct U; impl RectangularTin for U { type Measure = u32; const LENGTH: u32 = 2; const WIDTH: u32 = 1; }
//! type Tart = CreamCake<T, f64>;
//! type Other = CreamCake<U, f64>;
//! let mut shop = Bakery::<f64, u32, Products![Tart]>::new(10, products![Tart::new(1, 1.0).unwrap()]).unwrap();
//! shop.sell::<Other, _>();
//! ```
//!
//! Selling a product without a price:
//! ```compile_fail
//! # use bakery_core::*;
//! # struct T; impl RectangularTin for T { type Measure = u32; const LENGTH: u32 = 1; const WIDTH: u32 = 1; }
//! type Slab = CheeseCake<T>;
//! let mut shop = Bakery::<f64, u32, Products![Slab]>::new(10, products![Slab::new(1)]).unwrap();
//! shop.sell::<Slab, _>();
//! ```
//!
//! Restocking anything but a restockable product:
//! ```compile_fail
//! # use bakery_core::*;
//! # struct T; impl RectangularTin for T { type Measure = u32; const LENGTH: u32 = 1; const WIDTH: u32 = 1; }
//! type Tart = CreamCake<T, f64>;
//! let mut shop = Bakery::<f64, u32, Products![Tart]>::new(10, products![Tart::new(1, 1.0).unwrap()]).unwrap();
//! let _ = shop.restock::<Tart, _>(3);
//! ```
//!
//! An empty product list:
//! ```compile_fail
//! # use bakery_core::*;
//! let _ = Bakery::<f64, u32, Products![]>::new(10, products![]);
//! ```
//!
//! A price type different from the bakery's currency:
//! ```compile_fail
//! # use bakery_core::*;
//! # struct D; impl RoundTin for D { type Measure = u32; const RADIUS: u32 = 1; }
//! type Crumble = ApplePie<D, f32>;
//! let _ = Bakery::<f64, u32, Products![Crumble]>::new(10, products![Crumble::new(1, 1.0).unwrap()]);
//! ```
//!
//! A tin measured in a different type than the shelf:
//! ```compile_fail
//! # use bakery_core::*;
//! # struct D; impl RoundTin for D { type Measure = u16; const RADIUS: u16 = 1; }
//! type Crumble = ApplePie<D, f64>;
//! let _ = Bakery::<f64, u32, Products![Crumble]>::new(10, products![Crumble::new(1, 1.0).unwrap()]);
//! ```
//!
//! A currency that is not floating point, or a measurement that is not integral:
//! ```compile_fail
//! # use bakery_core::*;
//! # struct D; impl RoundTin for D { type Measure = u32; const RADIUS: u32 = 1; }
//! let _ = Bakery::<i64, u32, Products![CherryPie<D>]>::new(10, products![CherryPie::new(1)]);
//! ```
//! ```compile_fail
//! # use bakery_core::*;
//! # struct D; impl RoundTin for D { type Measure = u32; const RADIUS: u32 = 1; }
//! let _ = Bakery::<f64, f64, Products![CherryPie<D>]>::new(10.0, products![CherryPie::new(1)]);
//! ```
//!
//! ## Concurrency
//! A bakery is a plain value with no interior locking. Share it across
//! threads behind the caller's own `Mutex`.

use std::any::type_name;
use std::fmt;

use tracing::{debug, info, warn};

use crate::config::BakeryConfig;
use crate::error::{BakeryResult, ConfigurationError};
use crate::list::{NonEmpty, ProductList, Selector};
use crate::product::{Product, Restockable, Sellable, Stocked};
use crate::report::InventorySnapshot;
use crate::units::{Currency, Measurement};
use crate::validation::{check_capacity, check_unique};

// =============================================================================
// Bakery
// =============================================================================

/// Registry of one product per declared type.
///
/// - `C`: currency of every price and of the profits (`f32` or `f64`)
/// - `A`: measurement of every tin and of the shelf capacity (an integer)
/// - `P`: the product list, written with [`Products!`](crate::Products)
pub struct Bakery<C, A, P>
where
    C: Currency,
    A: Measurement,
    P: ProductList<C, A> + NonEmpty,
{
    name: String,
    capacity: A,
    profits: C,
    products: P,
}

impl<C, A, P> Bakery<C, A, P>
where
    C: Currency,
    A: Measurement,
    P: ProductList<C, A> + NonEmpty,
{
    /// Opens a bakery with the default name.
    ///
    /// ## Errors
    /// - [`ConfigurationError::DuplicateProduct`] if a type is declared twice
    /// - [`ConfigurationError::CapacityExceeded`] if the products' total area
    ///   is larger than `capacity`
    pub fn new(capacity: A, products: P) -> Result<Self, ConfigurationError> {
        Self::from_config(BakeryConfig::new(capacity), products)
    }

    /// Opens a bakery from a parsed configuration.
    ///
    /// Runs the same checks as [`Bakery::new`].
    pub fn from_config(config: BakeryConfig<A>, products: P) -> Result<Self, ConfigurationError> {
        let BakeryConfig { name, capacity } = config;

        let mut declared = Vec::with_capacity(P::LEN);
        P::declarations(&mut declared);

        let occupied = P::total_area();
        if let Err(e) = check_unique(&declared).and_then(|()| check_capacity(occupied, capacity)) {
            warn!(bakery = %name, error = %e, "Rejected bakery layout");
            return Err(e);
        }

        info!(
            bakery = %name,
            products = P::LEN,
            occupied_area = occupied,
            capacity = %capacity,
            "Bakery opened"
        );

        Ok(Bakery {
            name,
            capacity,
            profits: C::ZERO,
            products,
        })
    }

    /// Sells one unit of `T` and books its price.
    ///
    /// Does nothing at all when `T` is out of stock.
    pub fn sell<T, I>(&mut self)
    where
        P: Selector<T, I>,
        T: Product + Sellable<Currency = C>,
    {
        match Selector::<T, I>::get_mut(&mut self.products).sell() {
            Some(price) => {
                self.profits += price;
                debug!(
                    bakery = %self.name,
                    product = T::KIND,
                    %price,
                    profits = %self.profits,
                    "Sold one unit"
                );
            }
            None => {
                debug!(bakery = %self.name, product = T::KIND, "Out of stock, sale skipped");
            }
        }
    }

    /// Current stock of `T`.
    pub fn stock<T, I>(&self) -> u32
    where
        P: Selector<T, I>,
        T: Stocked,
    {
        Selector::<T, I>::get(&self.products).stock()
    }

    /// Adds `amount` units of `T` and returns the new stock.
    ///
    /// ## Errors
    /// [`BakeryError::StockOverflow`](crate::BakeryError::StockOverflow) if
    /// the stock would exceed `u32::MAX`. Nothing changes in that case.
    pub fn restock<T, I>(&mut self, amount: u32) -> BakeryResult<u32>
    where
        P: Selector<T, I>,
        T: Restockable,
    {
        Selector::<T, I>::get_mut(&mut self.products).restock(amount)
    }

    /// Unit price of `T`.
    pub fn price<T, I>(&self) -> C
    where
        P: Selector<T, I>,
        T: Sellable<Currency = C>,
    {
        Selector::<T, I>::get(&self.products).price()
    }

    /// Read access to the stored `T`.
    pub fn product<T, I>(&self) -> &T
    where
        P: Selector<T, I>,
    {
        Selector::<T, I>::get(&self.products)
    }

    /// Sum of all sale prices so far. Never decreases.
    pub fn profits(&self) -> C {
        self.profits
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> A {
        self.capacity
    }

    /// Total area of the declared products.
    pub fn occupied_area(&self) -> f64 {
        P::total_area()
    }

    pub fn product_count(&self) -> usize {
        P::LEN
    }

    /// Serializable view of the current state.
    pub fn snapshot(&self) -> InventorySnapshot {
        let mut products = Vec::with_capacity(P::LEN);
        self.products.lines(&mut products);

        InventorySnapshot {
            name: self.name.clone(),
            capacity: self.capacity.as_f64(),
            occupied_area: P::total_area(),
            profits: self.profits.as_f64(),
            products,
        }
    }
}

impl<C, A, P> fmt::Debug for Bakery<C, A, P>
where
    C: Currency,
    A: Measurement,
    P: ProductList<C, A> + NonEmpty,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bakery")
            .field("name", &self.name)
            .field("currency", &type_name::<C>())
            .field("capacity", &self.capacity)
            .field("products", &P::LEN)
            .field("profits", &self.profits)
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
