//! # bakery-core: Type-Checked Product Registry
//!
//! A bakery holds one instance of each declared baked good on a shelf of
//! fixed capacity, sells them one unit at a time and keeps a running profit.
//! Everything that can be decided about a bakery's layout is decided before
//! it opens.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       bakery-core (THIS CRATE)                          │
//! │                                                                         │
//! │   ┌───────────┐                                                        │
//! │   │  bakery   │  Bakery<C, A, P>: sell / restock / stock / profits     │
//! │   └─────┬─────┘                                                        │
//! │         │                                                               │
//! │   ┌─────▼─────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐          │
//! │   │   list    │  │ validation│  │  config   │  │  report   │          │
//! │   │ Cons/Nil  │  │ duplicates│  │ name,     │  │ snapshot  │          │
//! │   │ Selector  │  │ capacity  │  │ capacity  │  │ (serde)   │          │
//! │   └─────┬─────┘  └───────────┘  └───────────┘  └───────────┘          │
//! │         │                                                               │
//! │   ┌─────▼─────┐  ┌───────────┐  ┌───────────┐                          │
//! │   │  product  │──►  geometry │  │   units   │                          │
//! │   │ Cake, Pie │  │  pi, ln 2 │  │ Currency  │                          │
//! │   └───────────┘  └───────────┘  └───────────┘                          │
//! │                                                                         │
//! │   NO I/O • NO PERSISTENCE • SINGLE-THREADED                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`units`] - Currency and measurement type families
//! - [`geometry`] - Area constants and shape kinds
//! - [`product`] - The four product variants and their capabilities
//! - [`list`] - Type-indexed product lists
//! - [`bakery`] - The registry
//! - [`config`] - Runtime configuration
//! - [`report`] - Serializable snapshots
//! - [`validation`] - Construction-time checks
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use bakery_core::{products, Products};
//! use bakery_core::{Bakery, CherryPie, CreamCake, RectangularTin, RoundTin};
//!
//! struct Sheet;
//! impl RectangularTin for Sheet {
//!     type Measure = u16;
//!     const LENGTH: u16 = 4;
//!     const WIDTH: u16 = 5;
//! }
//!
//! struct Small;
//! impl RoundTin for Small {
//!     type Measure = u16;
//!     const RADIUS: u16 = 2;
//! }
//!
//! type Slice = CreamCake<Sheet, f32>;
//! let mut shop = Bakery::<f32, u16, Products![Slice, CherryPie<Small>]>::new(
//!     100,
//!     products![Slice::new(3, 2.5).unwrap(), CherryPie::new(7)],
//! )
//! .unwrap();
//!
//! shop.sell::<Slice, _>();
//! assert_eq!(shop.profits(), 2.5);
//! assert_eq!(shop.stock::<CherryPie<Small>, _>(), 7);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bakery;
pub mod config;
pub mod error;
pub mod geometry;
pub mod list;
pub mod product;
pub mod report;
pub mod units;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bakery_core::Bakery` instead of
// `use bakery_core::bakery::Bakery`

pub use bakery::Bakery;
pub use config::BakeryConfig;
pub use error::{BakeryError, BakeryResult, ConfigurationError, ValidationError};
pub use geometry::ShapeKind;
pub use list::{Cons, Nil, NonEmpty, ProductList, Selector};
pub use product::*;
pub use report::{InventorySnapshot, ProductLine};
pub use units::{Currency, Measurement, PricedIn, Unpriced};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Name given to bakeries opened without one.
pub const DEFAULT_BAKERY_NAME: &str = "bakery";
