//! In-memory spot-price cache with refresh-on-read.
//!
//! Each catalog entry owns an async mutex around its optional price. A
//! refresh pass locks every entry (concurrently across entries), re-checks
//! freshness under the lock, and only then calls the quote source, so two
//! requests racing on the same stale metal produce a single fetch.

use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;
use futures_util::future::join_all;
use tokio::sync::Mutex;

use weighin_core::catalog::{Commodity, CATALOG};
use weighin_core::quote::{needs_refresh, SpotPrice};

use crate::obs::metrics::GatewayMetrics;

use super::source::QuoteSource;

struct PriceEntry {
    commodity: &'static Commodity,
    spot: Mutex<Option<SpotPrice>>,
}

/// Outcome of one entry during a refresh pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryOutcome {
    Fresh,
    Refreshed,
    Failed,
}

/// Counts from one refresh pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshReport {
    pub fresh: usize,
    pub refreshed: usize,
    pub failed: usize,
}

pub struct PriceStore {
    entries: Vec<PriceEntry>,
    window_days: u32,
    metrics: Arc<GatewayMetrics>,
}

impl PriceStore {
    /// Store covering the full catalog, with no prices yet.
    pub fn new(window_days: u32, metrics: Arc<GatewayMetrics>) -> Self {
        let entries = CATALOG
            .iter()
            .map(|commodity| PriceEntry { commodity, spot: Mutex::new(None) })
            .collect();
        Self { entries, window_days, metrics }
    }

    /// Refresh every entry whose price is missing or stale as of `today`.
    ///
    /// Failures are logged and counted; the previous price (if any) is kept.
    pub async fn refresh(&self, source: &dyn QuoteSource, today: NaiveDate) -> RefreshReport {
        let outcomes = join_all(
            self.entries
                .iter()
                .map(|entry| self.refresh_entry(entry, source, today)),
        )
        .await;

        let mut report = RefreshReport::default();
        for o in outcomes {
            match o {
                EntryOutcome::Fresh => report.fresh += 1,
                EntryOutcome::Refreshed => report.refreshed += 1,
                EntryOutcome::Failed => report.failed += 1,
            }
        }
        if report.refreshed > 0 || report.failed > 0 {
            tracing::info!(
                fresh = report.fresh,
                refreshed = report.refreshed,
                failed = report.failed,
                "price refresh pass"
            );
        }
        report
    }

    async fn refresh_entry(
        &self,
        entry: &PriceEntry,
        source: &dyn QuoteSource,
        today: NaiveDate,
    ) -> EntryOutcome {
        let c = entry.commodity;
        let mut spot = entry.spot.lock().await;

        if !needs_refresh(spot.as_ref(), today, self.window_days) {
            tracing::debug!(symbol = %c.symbol, "price is up to date");
            return EntryOutcome::Fresh;
        }

        let started = Instant::now();
        let result = source.latest(c.index, c.symbol).await;
        self.metrics
            .quote_fetch_duration
            .observe(&[("symbol", c.symbol)], started.elapsed());

        match result {
            Ok(p) => {
                tracing::info!(symbol = %c.symbol, date = %p.date, price = p.price, "price updated");
                self.metrics
                    .quote_fetches
                    .inc(&[("symbol", c.symbol), ("outcome", "ok")]);
                *spot = Some(p);
                EntryOutcome::Refreshed
            }
            Err(e) => {
                tracing::warn!(
                    symbol = %c.symbol,
                    source = source.name(),
                    kept = ?spot.as_ref().map(|p| p.date),
                    error = %e,
                    "price refresh failed"
                );
                self.metrics
                    .quote_fetches
                    .inc(&[("symbol", c.symbol), ("outcome", "error")]);
                EntryOutcome::Failed
            }
        }
    }

    /// Catalog-ordered view of every commodity and its cached price.
    pub async fn snapshot(&self) -> Vec<(&'static Commodity, Option<SpotPrice>)> {
        let mut out = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            out.push((entry.commodity, *entry.spot.lock().await));
        }
        out
    }

    /// Cached price for `id`, only if it is inside the staleness window.
    pub async fn fresh_price(&self, id: &str, today: NaiveDate) -> Option<SpotPrice> {
        let entry = self.entries.iter().find(|e| e.commodity.id == id)?;
        let spot = *entry.spot.lock().await;
        spot.filter(|p| !p.is_stale(today, self.window_days))
    }

    /// Seed a price directly. Returns false for an unknown id.
    pub async fn set(&self, id: &str, price: SpotPrice) -> bool {
        match self.entries.iter().find(|e| e.commodity.id == id) {
            Some(entry) => {
                *entry.spot.lock().await = Some(price);
                true
            }
            None => false,
        }
    }
}
