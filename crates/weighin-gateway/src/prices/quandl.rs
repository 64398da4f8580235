//! Quandl dataset API client.
//!
//! `GET {base_url}{index}/{symbol}/?api_key=..&column_index=1&limit=1`
//! returns `{"dataset": {"data": [["2024-03-08", 2150.25]]}}`; the first row
//! is the latest quote.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

use weighin_core::error::{Result, WeighInError};
use weighin_core::quote::SpotPrice;

use super::source::QuoteSource;

#[derive(Debug, Deserialize)]
struct DatasetResponse {
    dataset: Dataset,
}

#[derive(Debug, Deserialize)]
struct Dataset {
    data: Vec<(NaiveDate, Option<f64>)>,
}

pub struct QuandlClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl QuandlClient {
    /// Client whose requests give up after `timeout`, reported as `Upstream`.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WeighInError::Internal(format!("build http client failed: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    fn dataset_url(&self, index: &str, symbol: &str) -> String {
        format!("{}{}/{}/", self.base_url, index, symbol)
    }
}

/// Pick the latest quote out of a decoded dataset body.
fn first_quote(body: DatasetResponse, symbol: &str) -> Result<SpotPrice> {
    let (date, price) = body
        .dataset
        .data
        .into_iter()
        .next()
        .ok_or_else(|| WeighInError::Upstream(format!("{symbol}: dataset has no rows")))?;
    let price =
        price.ok_or_else(|| WeighInError::Upstream(format!("{symbol}: latest price is null")))?;
    Ok(SpotPrice::new(date, price))
}

#[async_trait]
impl QuoteSource for QuandlClient {
    fn name(&self) -> &'static str {
        "quandl"
    }

    async fn latest(&self, index: &str, symbol: &str) -> Result<SpotPrice> {
        let resp = self
            .http
            .get(self.dataset_url(index, symbol))
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("column_index", "1"),
                ("limit", "1"),
            ])
            .send()
            .await
            .map_err(|e| WeighInError::Upstream(format!("{symbol}: request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(WeighInError::Upstream(format!(
                "{symbol}: bad response status {status}"
            )));
        }

        let body = resp
            .json::<DatasetResponse>()
            .await
            .map_err(|e| WeighInError::Upstream(format!("{symbol}: invalid body: {e}")))?;

        first_quote(body, symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(s: &str) -> DatasetResponse {
        serde_json::from_str(s).unwrap()
    }

    #[test]
    fn takes_first_row() {
        let body = decode(r#"{"dataset":{"data":[["2024-03-08",2150.25],["2024-03-07",2140.0]]}}"#);
        let p = first_quote(body, "GOLD").unwrap();
        assert_eq!(p.date, NaiveDate::from_ymd_opt(2024, 3, 8).unwrap());
        assert_eq!(p.price, 2150.25);
    }

    #[test]
    fn empty_or_null_rows_are_upstream_errors() {
        let empty = decode(r#"{"dataset":{"data":[]}}"#);
        assert!(matches!(first_quote(empty, "RUTH"), Err(WeighInError::Upstream(_))));

        let null = decode(r#"{"dataset":{"data":[["2024-03-08",null]]}}"#);
        assert!(matches!(first_quote(null, "RUTH"), Err(WeighInError::Upstream(_))));
    }

    #[tokio::test]
    async fn hung_upstream_times_out() {
        // Accepts the connection and never answers.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let _server = tokio::spawn(async move {
            let (_sock, _) = listener.accept().await.unwrap();
            std::future::pending::<()>().await;
        });

        let c = QuandlClient::new(format!("http://{addr}/"), "k", Duration::from_millis(200)).unwrap();
        let started = std::time::Instant::now();
        let err = c.latest("LBMA", "GOLD").await.unwrap_err();
        assert!(matches!(err, WeighInError::Upstream(_)));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn url_layout() {
        let c = QuandlClient::new(
            "https://example.test/api/v3/datasets/",
            "k",
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(
            c.dataset_url("LBMA", "GOLD"),
            "https://example.test/api/v3/datasets/LBMA/GOLD/"
        );
    }
}
