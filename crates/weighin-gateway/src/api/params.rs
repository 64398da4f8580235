//! Query-string validation shared by the valuation endpoints.
//!
//! Query values arrive as raw strings so that missing or malformed
//! arguments become our own bad-request payload instead of an extractor
//! rejection.

use std::collections::HashMap;

use weighin_core::error::{Result, WeighInError};
use weighin_core::valuation::{convert_to_ounces, MassUnit};

/// Validated valuation arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValuationRequest {
    pub weight: i64,
    pub units: MassUnit,
    pub networth: Option<i64>,
}

impl ValuationRequest {
    /// `weight` and `units` only (single-metal endpoint).
    pub fn from_query(q: &HashMap<String, String>) -> Result<Self> {
        let weight = required_int(q, "weight")?;
        if weight < 0 {
            return Err(WeighInError::BadRequest("weight must not be negative".into()));
        }
        let units = q
            .get("units")
            .ok_or_else(|| WeighInError::BadRequest("missing units".into()))
            .and_then(|u| MassUnit::parse(u))?;

        Ok(Self { weight, units, networth: None })
    }

    /// `weight`, `units` and `networth` (all-metals endpoint).
    pub fn with_networth(q: &HashMap<String, String>) -> Result<Self> {
        let mut req = Self::from_query(q)?;
        req.networth = Some(required_int(q, "networth")?);
        Ok(req)
    }

    pub fn ounces(&self) -> f64 {
        convert_to_ounces(self.weight as f64, self.units.as_str())
    }
}

fn required_int(q: &HashMap<String, String>, name: &str) -> Result<i64> {
    let raw = q
        .get(name)
        .ok_or_else(|| WeighInError::BadRequest(format!("missing {name}")))?;
    raw.trim()
        .parse()
        .map_err(|_| WeighInError::BadRequest(format!("{name} must be an integer, got '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn parses_weight_and_units() {
        let r = ValuationRequest::from_query(&q(&[("weight", "180"), ("units", "lbs")])).unwrap();
        assert_eq!(r.weight, 180);
        assert_eq!(r.units, MassUnit::Pounds);
        assert_eq!(r.networth, None);
    }

    #[test]
    fn rejects_missing_or_malformed() {
        let cases = [
            q(&[("units", "lbs")]),
            q(&[("weight", "180")]),
            q(&[("weight", "180.5"), ("units", "lbs")]),
            q(&[("weight", "abc"), ("units", "kg")]),
            q(&[("weight", "180"), ("units", "stone")]),
            q(&[("weight", "-3"), ("units", "kg")]),
        ];
        for c in cases {
            let err = ValuationRequest::from_query(&c).unwrap_err();
            assert!(matches!(err, WeighInError::BadRequest(_)), "{c:?}");
        }
    }

    #[test]
    fn networth_required_for_comparison() {
        let base = q(&[("weight", "70"), ("units", "kg")]);
        assert!(ValuationRequest::with_networth(&base).is_err());

        let mut full = base.clone();
        full.insert("networth".into(), "-2500".into());
        let r = ValuationRequest::with_networth(&full).unwrap();
        assert_eq!(r.networth, Some(-2500));
        assert!((r.ounces() - 70.0 * 32.151).abs() < 1e-9);
    }
}
