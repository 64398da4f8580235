//! Shared application state for the weighin gateway.
//!
//! Owns the price store, the quote source, and metrics; handlers receive a cheap
//! clone through axum's `State` extractor.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use weighin_core::error::Result;

use crate::config::GatewayConfig;
use crate::obs::metrics::GatewayMetrics;
use crate::prices::{PriceStore, QuandlClient, QuoteSource, RefreshReport};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: PriceStore,
    source: Arc<dyn QuoteSource>,
    metrics: Arc<GatewayMetrics>,
}

impl AppState {
    /// Build state backed by the Quandl client.
    /// Returns Result so main can handle a missing API key gracefully.
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let api_key = cfg.quotes.api_key()?;
        let source = Arc::new(QuandlClient::new(
            cfg.quotes.base_url.clone(),
            api_key,
            cfg.quotes.timeout(),
        )?);
        Ok(Self::with_source(cfg, source))
    }

    /// Build state around any quote source.
    pub fn with_source(cfg: GatewayConfig, source: Arc<dyn QuoteSource>) -> Self {
        let metrics = Arc::new(GatewayMetrics::default());
        let store = PriceStore::new(cfg.quotes.staleness_days, Arc::clone(&metrics));
        tracing::debug!(source = source.name(), window_days = cfg.quotes.staleness_days, "app state ready");

        Self {
            inner: Arc::new(AppStateInner { store, source, metrics }),
        }
    }

    pub fn store(&self) -> &PriceStore {
        &self.inner.store
    }

    pub fn metrics(&self) -> &GatewayMetrics {
        &self.inner.metrics
    }

    /// Calendar date used for freshness checks.
    pub fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }

    /// Run a refresh pass against the configured source.
    pub async fn refresh_prices(&self, today: NaiveDate) -> RefreshReport {
        self.inner.store.refresh(self.inner.source.as_ref(), today).await
    }
}
