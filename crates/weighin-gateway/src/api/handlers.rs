use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};

use weighin_core::catalog::{self, Commodity, CATALOG};
use weighin_core::error::{Result, WeighInError};
use weighin_core::money::format_usd;
use weighin_core::quote::SpotPrice;
use weighin_core::valuation::{closest_metal, value};

use crate::app_state::AppState;

use super::params::ValuationRequest;
use super::response::{ApiError, ApiResult, Success};

#[derive(Debug, Serialize)]
struct PriceView<'a> {
    #[serde(flatten)]
    commodity: &'a Commodity,
    spot_price: Option<SpotPrice>,
}

#[derive(Debug, Serialize)]
pub struct Inputs {
    pub weight: i64,
    pub units: &'static str,
    pub networth: String,
}

#[derive(Debug, Serialize)]
pub struct AllMetalsData {
    pub inputs: Inputs,
    pub weight_in: Map<String, Value>,
    pub closest_metal: String,
}

#[derive(Debug, Serialize)]
pub struct MessageData {
    pub message: String,
}

fn finish<T: Serialize>(state: &AppState, route: &'static str, res: Result<T>) -> ApiResult<T> {
    match res {
        Ok(data) => {
            state.metrics().http_requests.inc(&[("route", route), ("outcome", "ok")]);
            Ok(Json(Success::new(data)))
        }
        Err(e) => {
            let err = ApiError::from(e);
            state
                .metrics()
                .http_requests
                .inc(&[("route", route), ("outcome", err.outcome())]);
            tracing::info!(route, error = %err.0, "request rejected");
            Err(err)
        }
    }
}

/// `GET /weightin/currentprices`
pub async fn current_prices(State(state): State<AppState>) -> ApiResult<Map<String, Value>> {
    let res = current_prices_inner(&state).await;
    finish(&state, "current_prices", res)
}

async fn current_prices_inner(state: &AppState) -> Result<Map<String, Value>> {
    state.refresh_prices(state.today()).await;

    let mut data = Map::new();
    for (commodity, spot_price) in state.store().snapshot().await {
        let view = serde_json::to_value(PriceView { commodity, spot_price })
            .map_err(|e| WeighInError::Internal(format!("serialize {}: {e}", commodity.id)))?;
        data.insert(commodity.id.to_string(), view);
    }
    Ok(data)
}

/// `GET /weightin/all_metals?weight=&units=&networth=`
pub async fn all_metals(
    State(state): State<AppState>,
    Query(q): Query<HashMap<String, String>>,
) -> ApiResult<AllMetalsData> {
    let res = all_metals_inner(&state, &q).await;
    finish(&state, "all_metals", res)
}

async fn all_metals_inner(state: &AppState, q: &HashMap<String, String>) -> Result<AllMetalsData> {
    let req = ValuationRequest::with_networth(q)?;
    let networth = req.networth.unwrap_or_default();

    let today = state.today();
    state.refresh_prices(today).await;

    let ounces = req.ounces();
    let mut values: Vec<(&str, f64)> = Vec::with_capacity(CATALOG.len());
    let mut missing = Vec::new();
    for c in CATALOG.iter() {
        match state.store().fresh_price(c.id, today).await {
            Some(p) => values.push((c.name, value(ounces, p.price))),
            None => missing.push(c.name),
        }
    }
    if !missing.is_empty() {
        return Err(WeighInError::PriceUnavailable(missing.join(", ")));
    }

    let weight_in = values
        .iter()
        .map(|(name, v)| (name.to_string(), Value::String(format_usd(*v))))
        .collect();
    let closest = closest_metal(values.iter().copied(), networth as f64)
        .ok_or_else(|| WeighInError::Internal("catalog is empty".into()))?;

    Ok(AllMetalsData {
        inputs: Inputs {
            weight: req.weight,
            units: req.units.as_str(),
            networth: format_usd(networth as f64),
        },
        weight_in,
        closest_metal: format!(
            "Based on your networth, you most closely match your weight in {closest}"
        ),
    })
}

/// `GET /weightin/:metal?weight=&units=`
pub async fn single_metal(
    State(state): State<AppState>,
    Path(metal): Path<String>,
    Query(q): Query<HashMap<String, String>>,
) -> ApiResult<MessageData> {
    let res = single_metal_inner(&state, &metal, &q).await;
    finish(&state, "single_metal", res)
}

async fn single_metal_inner(
    state: &AppState,
    metal: &str,
    q: &HashMap<String, String>,
) -> Result<MessageData> {
    let commodity = catalog::resolve(metal)?;
    let req = ValuationRequest::from_query(q)?;

    let today = state.today();
    state.refresh_prices(today).await;

    let spot = state
        .store()
        .fresh_price(commodity.id, today)
        .await
        .ok_or_else(|| WeighInError::PriceUnavailable(commodity.name.to_string()))?;

    Ok(MessageData {
        message: format!(
            "Your weight in {} is {}",
            commodity.name,
            format_usd(value(req.ounces(), spot.price))
        ),
    })
}
