//! Spot-price acquisition and caching.
//!
//! `QuoteSource` is the seam to the external price provider; `PriceStore`
//! owns the cached catalog prices and the refresh-on-read policy.

pub mod quandl;
pub mod source;
pub mod store;

pub use quandl::QuandlClient;
pub use source::QuoteSource;
pub use store::{PriceStore, RefreshReport};
