//! Top-level facade crate for weighin.
//!
//! Re-exports the valuation core and the HTTP gateway so users can depend on a single crate.

pub mod core {
    pub use weighin_core::*;
}

pub mod gateway {
    pub use weighin_gateway::*;
}
