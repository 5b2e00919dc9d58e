//! Property tests for the registry invariants.

use bakery_core::{products, Products};
use bakery_core::{
    ApplePie, Bakery, CheeseCake, ConfigurationError, CreamCake, Product, RectangularTin,
    RoundTin,
};
use proptest::prelude::*;

struct Tray;
impl RectangularTin for Tray {
    type Measure = u64;
    const LENGTH: u64 = 7;
    const WIDTH: u64 = 9;
}

struct Dish;
impl RoundTin for Dish {
    type Measure = u64;
    const RADIUS: u64 = 5;
}

type Cake = CreamCake<Tray, f64>;
type Pie = ApplePie<Dish, f64>;
type Shop = Bakery<f64, u64, Products![Cake, Pie]>;

/// Prices in quarter steps so sums are exact in `f64`.
fn quarter_price() -> impl Strategy<Value = f64> {
    (0u32..400).prop_map(|q| f64::from(q) * 0.25)
}

fn open(cake: (u32, f64), pie: (u32, f64)) -> Shop {
    Shop::new(
        u64::MAX,
        products![
            Cake::new(cake.0, cake.1).unwrap(),
            Pie::new(pie.0, pie.1).unwrap()
        ],
    )
    .unwrap()
}

proptest! {
    #[test]
    fn opens_iff_area_fits(capacity in 0u64..200) {
        let needed = Cake::area() + Pie::area();
        let result = Shop::new(
            capacity,
            products![Cake::new(1, 1.0).unwrap(), Pie::new(1, 1.0).unwrap()],
        );
        prop_assert_eq!(result.is_ok(), needed <= capacity as f64);
    }

    #[test]
    fn duplicates_never_open(capacity in any::<u64>()) {
        type Twice = Bakery<f64, u64, Products![CheeseCake<Tray>, Pie, CheeseCake<Tray>]>;
        let result = Twice::new(
            capacity,
            products![CheeseCake::new(1), Pie::new(1, 1.0).unwrap(), CheeseCake::new(1)],
        );
        let is_duplicate = matches!(result, Err(ConfigurationError::DuplicateProduct { .. }));
        prop_assert!(is_duplicate);
    }

    #[test]
    fn sale_moves_one_unit_and_one_price(stock in 1u32..1000, price in quarter_price()) {
        let mut shop = open((stock, price), (3, 1.0));
        shop.sell::<Cake, _>();
        prop_assert_eq!(shop.stock::<Cake, _>(), stock - 1);
        prop_assert_eq!(shop.stock::<Pie, _>(), 3);
        prop_assert_eq!(shop.profits(), price);
    }

    #[test]
    fn empty_sale_is_bitwise_noop(price in quarter_price(), sold in 0u32..5) {
        let mut shop = open((sold, price), (0, price));
        for _ in 0..sold {
            shop.sell::<Cake, _>();
        }
        let profits = shop.profits().to_bits();

        shop.sell::<Cake, _>();
        shop.sell::<Pie, _>();

        prop_assert_eq!(shop.stock::<Cake, _>(), 0);
        prop_assert_eq!(shop.stock::<Pie, _>(), 0);
        prop_assert_eq!(shop.profits().to_bits(), profits);
    }

    #[test]
    fn restocks_add_up(initial in 0u32..1000, amounts in prop::collection::vec(0u32..10_000, 0..20)) {
        let mut shop = open((0, 1.0), (initial, 1.0));
        for amount in &amounts {
            shop.restock::<Pie, _>(*amount).unwrap();
        }
        let expected = initial + amounts.iter().sum::<u32>();
        prop_assert_eq!(shop.stock::<Pie, _>(), expected);
    }

    #[test]
    fn profits_are_order_independent(
        cake_price in quarter_price(),
        pie_price in quarter_price(),
        order in prop::collection::vec(any::<bool>(), 0..40),
    ) {
        let cakes = order.iter().filter(|&&is_cake| is_cake).count() as u32;
        let pies = order.len() as u32 - cakes;

        let mut interleaved = open((cakes, cake_price), (pies, pie_price));
        let mut previous = interleaved.profits();
        for &is_cake in &order {
            if is_cake {
                interleaved.sell::<Cake, _>();
            } else {
                interleaved.sell::<Pie, _>();
            }
            prop_assert!(interleaved.profits() >= previous);
            previous = interleaved.profits();
        }

        let mut batched = open((cakes, cake_price), (pies, pie_price));
        for _ in 0..pies {
            batched.sell::<Pie, _>();
        }
        for _ in 0..cakes {
            batched.sell::<Cake, _>();
        }

        let expected = f64::from(cakes) * cake_price + f64::from(pies) * pie_price;
        prop_assert_eq!(interleaved.profits(), expected);
        prop_assert_eq!(batched.profits(), expected);
    }
}
