//! Shared error type across weighin crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Missing or malformed request argument, or unknown metal.
    BadRequest,
    /// A valuation needed a spot price that is absent or stale.
    PriceUnavailable,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and metrics labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::PriceUnavailable => "PRICE_UNAVAILABLE",
            ClientCode::Internal => "INTERNAL",
        }
    }

    /// Numeric code echoed in the JSON body; also used as the HTTP status.
    pub fn http_code(self) -> u16 {
        match self {
            ClientCode::BadRequest => 400,
            ClientCode::PriceUnavailable => 502,
            ClientCode::Internal => 500,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, WeighInError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum WeighInError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unknown metal: {0}")]
    UnknownMetal(String),
    #[error("price unavailable: {0}")]
    PriceUnavailable(String),
    #[error("upstream quote failure: {0}")]
    Upstream(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl WeighInError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            WeighInError::BadRequest(_) | WeighInError::UnknownMetal(_) => ClientCode::BadRequest,
            WeighInError::PriceUnavailable(_) | WeighInError::Upstream(_) => {
                ClientCode::PriceUnavailable
            }
            WeighInError::UnsupportedVersion | WeighInError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Message placed in the failure payload.
    pub fn client_message(&self) -> String {
        match self {
            WeighInError::BadRequest(detail) => format!("badRequest: {detail}"),
            WeighInError::UnknownMetal(id) => format!("badRequest: unknown metal '{id}'"),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_metal_is_a_bad_request() {
        let e = WeighInError::UnknownMetal("unobtanium".into());
        assert_eq!(e.client_code(), ClientCode::BadRequest);
        assert_eq!(e.client_code().http_code(), 400);
        assert!(e.client_message().starts_with("badRequest:"));
    }

    #[test]
    fn missing_price_maps_to_502() {
        let e = WeighInError::PriceUnavailable("Gold".into());
        assert_eq!(e.client_code().as_str(), "PRICE_UNAVAILABLE");
        assert_eq!(e.client_code().http_code(), 502);
    }
}
