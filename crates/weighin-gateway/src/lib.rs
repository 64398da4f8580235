//! weighin gateway library entry.
//!
//! Wires config, the cached price store, the quote client, and the
//! `/weightin` HTTP surface into one axum application. Consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod prices;
pub mod router;
