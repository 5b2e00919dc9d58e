//! # Inventory Reports
//!
//! Read-only, serializable views of a bakery for display.
//! Numbers are widened to `f64` so the types stay non-generic and can be
//! exported to TypeScript.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::geometry::ShapeKind;

/// Point-in-time view of one bakery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InventorySnapshot {
    /// Bakery name from its configuration.
    pub name: String,

    /// Shelf capacity in area units.
    pub capacity: f64,

    /// Area taken by the declared products.
    pub occupied_area: f64,

    /// Profits accumulated so far.
    pub profits: f64,

    /// One line per declared product, in declared order.
    pub products: Vec<ProductLine>,
}

impl InventorySnapshot {
    /// Units on hand across every product.
    pub fn total_stock(&self) -> u64 {
        self.products.iter().map(|line| u64::from(line.stock)).sum()
    }

    /// Shelf area still free.
    pub fn free_area(&self) -> f64 {
        self.capacity - self.occupied_area
    }
}

/// One product inside an [`InventorySnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductLine {
    /// Full Rust type name, unique within a bakery.
    pub product: String,

    /// Variant name ("CreamCake", "ApplePie", ...).
    pub kind: String,

    pub shape: ShapeKind,
    pub area: f64,
    pub stock: u32,

    /// `None` for products that cannot be sold.
    pub unit_price: Option<f64>,
}
