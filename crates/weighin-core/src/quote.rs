//! Spot-price model and freshness rule.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default staleness window in days.
pub const DEFAULT_STALENESS_DAYS: u32 = 7;

/// Latest known price for one commodity, in USD per troy ounce.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotPrice {
    /// Trading date the price belongs to (`YYYY-MM-DD` on the wire).
    pub date: NaiveDate,
    pub price: f64,
}

impl SpotPrice {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }

    /// Whole days between the quote date and `today`; negative for future dates.
    pub fn age_days(&self, today: NaiveDate) -> i64 {
        (today - self.date).num_days()
    }

    /// A price is stale once it is `window_days` or more old.
    pub fn is_stale(&self, today: NaiveDate, window_days: u32) -> bool {
        self.age_days(today) >= i64::from(window_days)
    }
}

/// True when `spot` is missing or stale and must be fetched again.
pub fn needs_refresh(spot: Option<&SpotPrice>, today: NaiveDate, window_days: u32) -> bool {
    match spot {
        None => true,
        Some(p) => p.is_stale(today, window_days),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn window_boundary() {
        let today = day(2024, 3, 15);
        let p = |d| SpotPrice::new(day(2024, 3, d), 1.0);

        assert!(!p(9).is_stale(today, 7)); // 6 days
        assert!(p(8).is_stale(today, 7)); // exactly 7
        assert!(p(7).is_stale(today, 7)); // 8 days
    }

    #[test]
    fn future_dates_are_fresh() {
        let today = day(2024, 3, 15);
        let p = SpotPrice::new(day(2024, 3, 20), 1.0);
        assert_eq!(p.age_days(today), -5);
        assert!(!needs_refresh(Some(&p), today, DEFAULT_STALENESS_DAYS));
    }

    #[test]
    fn missing_price_needs_refresh() {
        assert!(needs_refresh(None, day(2024, 1, 1), DEFAULT_STALENESS_DAYS));
    }

    #[test]
    fn wire_format() {
        let p = SpotPrice::new(day(2024, 3, 8), 2150.25);
        let v = serde_json::to_value(p).unwrap();
        assert_eq!(v["date"], "2024-03-08");
        assert_eq!(v["price"], 2150.25);
    }
}
