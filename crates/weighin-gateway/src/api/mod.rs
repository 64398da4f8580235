//! Public `/weightin` endpoints.
//!
//! Valuation handlers validate their arguments first, then run a price
//! refresh pass and value the request from the refreshed prices. Invalid
//! requests never reach the quote source.

pub mod handlers;
pub mod params;
pub mod response;

pub use response::{ApiError, ApiResult};
