//! # Product Lists
//!
//! A heterogeneous list holding exactly one value per declared product type,
//! addressed by type instead of by position or string key.
//!
//! ## Shape
//! ```text
//! Products![CreamCake<Tray, f64>, ApplePie<Dish, f64>]
//!
//!   = Cons<CreamCake<Tray, f64>,
//!          Cons<ApplePie<Dish, f64>,
//!               Nil>>
//!
//! products![cake, pie]   builds a value of that type
//! ```
//!
//! ## Type-Indexed Access
//! [`Selector<T, I>`] finds the element of type `T`. The index `I` is a
//! chain of [`There`] ending in [`Here`] and is always inferred (`_`). If `T`
//! is not in the list there is no impl to pick and the call does not compile.
//!
//! ## Checks Carried By the List Type
//! [`ProductList<C, A>`] only holds when every element is a [`Product`]
//! measured in `A` whose price tag is accepted in currency `C`. [`NonEmpty`]
//! only holds for [`Cons`].

use std::any::{type_name, TypeId};
use std::marker::PhantomData;

use crate::product::{Product, Stocked};
use crate::report::ProductLine;
use crate::units::{Currency, Measurement, PricedIn};
use crate::validation::Declaration;

// =============================================================================
// List Nodes
// =============================================================================

/// The empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nil;

/// A product followed by the rest of the list.
#[derive(Debug, Clone, PartialEq)]
pub struct Cons<H, T> {
    pub head: H,
    pub tail: T,
}

/// Builds the type of a product list.
///
/// ```rust
/// use bakery_core::list::{Cons, Nil};
/// use bakery_core::Products;
///
/// let _: Products![u8, u16] = Cons { head: 1u8, tail: Cons { head: 2u16, tail: Nil } };
/// ```
#[macro_export]
macro_rules! Products {
    () => { $crate::list::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::list::Cons<$head, $crate::Products![$($tail),*]>
    };
}

/// Builds a product list value, one expression per product, in declared order.
#[macro_export]
macro_rules! products {
    () => { $crate::list::Nil };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::list::Cons {
            head: $head,
            tail: $crate::products![$($tail),*],
        }
    };
}

// =============================================================================
// Type-Indexed Access
// =============================================================================

/// Index witness: the element is the head.
pub struct Here;

/// Index witness: the element is somewhere in the tail, at `I`.
pub struct There<I>(PhantomData<I>);

/// Type-indexed access to the element of type `T`.
pub trait Selector<T, I> {
    fn get(&self) -> &T;
    fn get_mut(&mut self) -> &mut T;
}

impl<T, Tail> Selector<T, Here> for Cons<T, Tail> {
    #[inline]
    fn get(&self) -> &T {
        &self.head
    }

    #[inline]
    fn get_mut(&mut self) -> &mut T {
        &mut self.head
    }
}

impl<H, Tail, T, I> Selector<T, There<I>> for Cons<H, Tail>
where
    Tail: Selector<T, I>,
{
    #[inline]
    fn get(&self) -> &T {
        self.tail.get()
    }

    #[inline]
    fn get_mut(&mut self) -> &mut T {
        self.tail.get_mut()
    }
}

// =============================================================================
// Product List
// =============================================================================

/// Marker for lists with at least one element.
pub trait NonEmpty {}

impl<H, T> NonEmpty for Cons<H, T> {}

/// A list of products that is consistent with a bakery keeping its books in
/// `C` and measuring its shelf in `A`.
pub trait ProductList<C: Currency, A: Measurement> {
    /// Number of declared products.
    const LEN: usize;

    /// Sum of every declared product's area.
    fn total_area() -> f64;

    /// Appends the identity of every declared type, in order.
    fn declarations(out: &mut Vec<Declaration>);

    /// Appends a report line for every product, in order.
    fn lines(&self, out: &mut Vec<ProductLine>);
}

impl<C: Currency, A: Measurement> ProductList<C, A> for Nil {
    const LEN: usize = 0;

    fn total_area() -> f64 {
        0.0
    }

    fn declarations(_out: &mut Vec<Declaration>) {}

    fn lines(&self, _out: &mut Vec<ProductLine>) {}
}

impl<C, A, H, T> ProductList<C, A> for Cons<H, T>
where
    C: Currency,
    A: Measurement,
    H: Product<Measure = A> + Stocked,
    H::Price: PricedIn<C>,
    T: ProductList<C, A>,
{
    const LEN: usize = 1 + T::LEN;

    fn total_area() -> f64 {
        H::area() + T::total_area()
    }

    fn declarations(out: &mut Vec<Declaration>) {
        out.push((TypeId::of::<H>(), type_name::<H>()));
        T::declarations(out);
    }

    fn lines(&self, out: &mut Vec<ProductLine>) {
        out.push(ProductLine {
            product: type_name::<H>().to_string(),
            kind: H::KIND.to_string(),
            shape: H::SHAPE,
            area: H::area(),
            stock: self.head.stock(),
            unit_price: self.head.listed_price(),
        });
        self.tail.lines(out);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{ApplePie, CheeseCake, RectangularTin, RoundTin};

    struct Tray;
    impl RectangularTin for Tray {
        type Measure = u16;
        const LENGTH: u16 = 2;
        const WIDTH: u16 = 3;
    }

    struct Dish;
    impl RoundTin for Dish {
        type Measure = u16;
        const RADIUS: u16 = 1;
    }

    type Shelf = Products![CheeseCake<Tray>, ApplePie<Dish, f64>];

    fn shelf() -> Shelf {
        products![CheeseCake::new(3), ApplePie::new(4, 2.0).unwrap()]
    }

    #[test]
    fn test_selector_finds_by_type() {
        let mut list = shelf();
        let cake: &CheeseCake<Tray> = list.get();
        assert_eq!(cake.stock(), 3);

        let pie: &mut ApplePie<Dish, f64> = list.get_mut();
        assert_eq!(pie.stock(), 4);
    }

    #[test]
    fn test_list_len_and_area() {
        assert_eq!(<Shelf as ProductList<f64, u16>>::LEN, 2);
        let area = <Shelf as ProductList<f64, u16>>::total_area();
        assert_eq!(
            area,
            CheeseCake::<Tray>::area() + (ApplePie::<Dish, f64>::area() + 0.0)
        );
    }

    #[test]
    fn test_declarations_in_order() {
        let mut out = Vec::new();
        <Shelf as ProductList<f64, u16>>::declarations(&mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].0, TypeId::of::<CheeseCake<Tray>>());
        assert_eq!(out[1].0, TypeId::of::<ApplePie<Dish, f64>>());
    }

    #[test]
    fn test_lines() {
        let mut out = Vec::new();
        ProductList::<f64, u16>::lines(&shelf(), &mut out);
        assert_eq!(out[0].kind, "CheeseCake");
        assert_eq!(out[0].unit_price, None);
        assert_eq!(out[1].kind, "ApplePie");
        assert_eq!(out[1].stock, 4);
        assert_eq!(out[1].unit_price, Some(2.0));
    }

    #[test]
    fn test_empty_macros() {
        let nil: Products![] = products![];
        assert_eq!(nil, Nil);
        assert_eq!(<Nil as ProductList<f32, u8>>::LEN, 0);
    }
}
