//! Weight-to-value conversion.
//!
//! Masses are converted to troy ounces before pricing because every
//! catalog quote is per troy ounce.

use crate::error::{Result, WeighInError};

/// Troy ounces per avoirdupois pound.
pub const TROY_OUNCES_PER_POUND: f64 = 14.5833;
/// Troy ounces per kilogram.
pub const TROY_OUNCES_PER_KILOGRAM: f64 = 32.151;

/// Mass unit accepted from callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MassUnit {
    Pounds,
    Kilograms,
}

impl MassUnit {
    /// Parse the `units` query value. Only the exact strings `lbs` and `kg` are accepted.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "lbs" => Ok(MassUnit::Pounds),
            "kg" => Ok(MassUnit::Kilograms),
            other => Err(WeighInError::BadRequest(format!(
                "units must be 'lbs' or 'kg', got '{other}'"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MassUnit::Pounds => "lbs",
            MassUnit::Kilograms => "kg",
        }
    }

    pub fn troy_ounces_per_unit(self) -> f64 {
        match self {
            MassUnit::Pounds => TROY_OUNCES_PER_POUND,
            MassUnit::Kilograms => TROY_OUNCES_PER_KILOGRAM,
        }
    }
}

/// Convert `mass` given in `unit` to troy ounces.
///
/// Any unit other than `lbs` or `kg` converts to `0.0`. Callers that take
/// user input should validate with [`MassUnit::parse`] first.
pub fn convert_to_ounces(mass: f64, unit: &str) -> f64 {
    match MassUnit::parse(unit) {
        Ok(u) => mass * u.troy_ounces_per_unit(),
        Err(_) => 0.0,
    }
}

/// Market value of `ounces` troy ounces at `spot_price` per ounce. Not rounded.
pub fn value(ounces: f64, spot_price: f64) -> f64 {
    ounces * spot_price
}

/// Name of the metal whose value is closest to `target`.
///
/// Ties keep the earliest entry. NaN values never win. Returns `None` for an
/// empty input.
pub fn closest_metal<'a, I>(values: I, target: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut best: Option<(&'a str, f64)> = None;
    for (name, v) in values {
        let diff = (v - target).abs();
        if diff.is_nan() {
            continue;
        }
        match best {
            Some((_, d)) if diff >= d => {}
            _ => best = Some((name, diff)),
        }
    }
    best.map(|(name, _)| name)
}
