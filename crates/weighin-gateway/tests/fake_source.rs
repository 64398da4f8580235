//! In-memory `QuoteSource` shared by the gateway tests.

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use weighin_core::error::{Result, WeighInError};
use weighin_core::quote::SpotPrice;
use weighin_gateway::prices::QuoteSource;

/// Serves configured quotes by symbol; unknown symbols fail like a non-200 upstream.
#[derive(Default)]
pub struct FakeSource {
    quotes: Mutex<HashMap<String, SpotPrice>>,
    calls: Mutex<HashMap<String, usize>>,
    delay: Option<Duration>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay: Some(delay), ..Self::default() }
    }

    pub fn quote(self, symbol: &str, date: NaiveDate, price: f64) -> Self {
        self.quotes
            .lock()
            .unwrap()
            .insert(symbol.to_string(), SpotPrice::new(date, price));
        self
    }

    /// Same date and price for every catalog symbol.
    pub fn all(mut self, date: NaiveDate, price: f64) -> Self {
        for c in weighin_core::catalog::CATALOG.iter() {
            self = self.quote(c.symbol, date, price);
        }
        self
    }

    pub fn fail(&self, symbol: &str) {
        self.quotes.lock().unwrap().remove(symbol);
    }

    pub fn calls(&self, symbol: &str) -> usize {
        self.calls.lock().unwrap().get(symbol).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }
}

#[async_trait]
impl QuoteSource for FakeSource {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn latest(&self, _index: &str, symbol: &str) -> Result<SpotPrice> {
        *self.calls.lock().unwrap().entry(symbol.to_string()).or_insert(0) += 1;
        if let Some(d) = self.delay {
            tokio::time::sleep(d).await;
        }
        self.quotes
            .lock()
            .unwrap()
            .get(symbol)
            .copied()
            .ok_or_else(|| WeighInError::Upstream(format!("{symbol}: status 404")))
    }
}
