//! Weight -> ounces -> value -> presentation, across core modules.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use weighin_core::catalog::{self, CATALOG};
use weighin_core::money::format_usd;
use weighin_core::valuation::{closest_metal, convert_to_ounces, value, MassUnit};

#[test]
fn ten_pounds_of_gold() {
    let ounces = convert_to_ounces(10.0, "lbs");
    assert!((ounces - 145.833).abs() < 1e-9);

    let gold = catalog::resolve("Gold").unwrap();
    assert_eq!(gold.name, "Gold");
    assert_eq!(format_usd(value(ounces, 2000.0)), "$291,666.00");
}

#[test]
fn closest_over_catalog_order() {
    let unit = MassUnit::parse("kg").unwrap();
    let ounces = 80.0 * unit.troy_ounces_per_unit();

    // One price per catalog entry, rising in catalog order.
    let priced: Vec<(&str, f64)> = CATALOG
        .iter()
        .enumerate()
        .map(|(i, c)| (c.name, value(ounces, 10.0 * (i as f64 + 1.0))))
        .collect();

    let target = priced[3].1 + 1.0;
    assert_eq!(closest_metal(priced.iter().copied(), target), Some("Iridium"));
}

#[test]
fn equal_values_resolve_to_earlier_metal() {
    let priced = CATALOG.iter().map(|c| (c.name, 500.0));
    assert_eq!(closest_metal(priced, 1.0), Some("Silver"));
}
