//! Axum router wiring.
//!
//! Static `/weightin/*` routes take precedence over the `/weightin/:metal`
//! capture, so `currentprices` and `all_metals` never reach the single-metal
//! handler.

use axum::{routing::get, Router};

use crate::{api::handlers, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/weightin/currentprices", get(handlers::current_prices))
        .route("/weightin/all_metals", get(handlers::all_metals))
        .route("/weightin/everything", get(handlers::all_metals))
        .route("/weightin/:metal", get(handlers::single_metal))
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
