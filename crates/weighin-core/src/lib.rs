//! weighin core: commodity catalog, spot-price model, valuation math, and errors.
//!
//! This crate holds everything needed to turn a body weight into a metal
//! value. It carries no HTTP or runtime dependencies so the gateway, tests,
//! and any offline tooling can share the same arithmetic.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `WeighInError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod catalog;
pub mod error;
pub mod money;
pub mod quote;
pub mod valuation;

/// Shared result type.
pub use error::{Result, WeighInError};
