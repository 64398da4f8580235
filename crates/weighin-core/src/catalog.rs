//! Static commodity catalog.
//!
//! Order matters: responses list metals in this order and the closest-metal
//! comparison breaks ties in favour of the earlier entry.

use serde::Serialize;

use crate::error::{Result, WeighInError};

/// Unit a commodity is quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteUnit {
    TroyOunce,
}

/// A tradable metal and the identifiers needed to fetch its quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commodity {
    /// Lowercase catalog key, also the path segment of the single-metal route.
    #[serde(skip)]
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Price-index (dataset database) identifier.
    pub index: &'static str,
    /// Ticker symbol within the index.
    pub symbol: &'static str,
    /// Unit of the quoted price.
    pub units: QuoteUnit,
}

const fn metal(
    id: &'static str,
    name: &'static str,
    index: &'static str,
    symbol: &'static str,
) -> Commodity {
    Commodity { id, name, index, symbol, units: QuoteUnit::TroyOunce }
}

/// Every metal the service knows about.
pub static CATALOG: [Commodity; 7] = [
    metal("silver", "Silver", "LBMA", "SILVER"),
    metal("gold", "Gold", "LBMA", "GOLD"),
    metal("ruthenium", "Ruthenium", "JOHNMATT", "RUTH"),
    metal("iridium", "Iridium", "JOHNMATT", "IRID"),
    metal("rhodium", "Rhodium", "JOHNMATT", "RHOD"),
    metal("palladium", "Palladium", "JOHNMATT", "PALL"),
    metal("platinum", "Platinum", "JOHNMATT", "PLAT"),
];

/// Case-insensitive lookup by catalog id.
pub fn find(id: &str) -> Option<&'static Commodity> {
    CATALOG.iter().find(|c| c.id.eq_ignore_ascii_case(id))
}

/// Like [`find`], but an unknown id is an `UnknownMetal` error.
pub fn resolve(id: &str) -> Result<&'static Commodity> {
    find(id).ok_or_else(|| WeighInError::UnknownMetal(id.to_string()))
}
