use async_trait::async_trait;

use weighin_core::error::Result;
use weighin_core::quote::SpotPrice;

/// Provider of the most recent quote for one instrument.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Short provider name for logs and metrics.
    fn name(&self) -> &'static str;

    /// Latest {date, price} for `symbol` within price index `index`.
    /// Any transport, status, or decoding failure is `WeighInError::Upstream`.
    async fn latest(&self, index: &str, symbol: &str) -> Result<SpotPrice>;
}
