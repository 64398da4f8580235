//! JSON envelopes and the HTTP mapping of `WeighInError`.
//!
//! Success: `{code: 200, status: "Success", data}`.
//! Failure: `{code, status: "Fail", message}` with the HTTP status equal to `code`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use weighin_core::error::WeighInError;

#[derive(Debug, Serialize)]
pub struct Success<T> {
    pub code: u16,
    pub status: &'static str,
    pub data: T,
}

impl<T: Serialize> Success<T> {
    pub fn new(data: T) -> Self {
        Self { code: 200, status: "Success", data }
    }
}

/// Handler-boundary error; wraps the core error so it can become a response.
#[derive(Debug)]
pub struct ApiError(pub WeighInError);

impl From<WeighInError> for ApiError {
    fn from(e: WeighInError) -> Self {
        Self(e)
    }
}

impl ApiError {
    /// Metrics outcome label.
    pub fn outcome(&self) -> &'static str {
        match self.0.client_code().http_code() {
            400 => "bad_request",
            502 => "price_unavailable",
            _ => "internal",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code().http_code();
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = Json(json!({
            "code": code,
            "status": "Fail",
            "message": self.0.client_message(),
        }));
        (status, body).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<Json<Success<T>>, ApiError>;
