//! Yahoo Finance API client

use crate::api::{MarketData, PricePoint};
use crate::error::{QuoteError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use yahoo_finance_api as yahoo;

/// Yahoo Finance API client
pub struct YahooFinanceClient {}

impl YahooFinanceClient {
    /// Create a new Yahoo Finance client
    pub fn new() -> Self {
        Self {}
    }

    /// Fetch closes for `symbol` at `interval` over `range`, e.g. `("1m", "1d")`
    ///
    /// A chart with no result or no quotes yields an empty series; inconsistent
    /// data is an error.
    pub async fn get_closes(&self, symbol: &str, interval: &str, range: &str) -> Result<Vec<PricePoint>> {
        let provider = yahoo::YahooConnector::new()
            .map_err(|e| QuoteError::YahooFinanceError(e.to_string()))?;

        let response = provider
            .get_quote_range(symbol, interval, range)
            .await
            .map_err(|e| QuoteError::YahooFinanceError(e.to_string()))?;

        let quotes = match response.quotes() {
            Ok(quotes) => quotes,
            Err(e) if is_empty_response(&e) => {
                tracing::debug!(symbol, interval, range, "No quotes in response: {}", e);
                return Ok(Vec::new());
            }
            Err(e) => return Err(QuoteError::YahooFinanceError(e.to_string())),
        };

        quotes
            .iter()
            .filter(|q| q.close.is_finite())
            .map(|q| price_point(symbol, q.timestamp, q.close))
            .collect()
    }
}

/// Whether the chart answered without any data, as opposed to answering with broken data
fn is_empty_response(err: &yahoo::YahooError) -> bool {
    matches!(err, yahoo::YahooError::NoResult | yahoo::YahooError::NoQuotes)
}

fn price_point(symbol: &str, timestamp: i64, close: f64) -> Result<PricePoint> {
    let timestamp = DateTime::<Utc>::from_timestamp(timestamp, 0).ok_or_else(|| {
        QuoteError::DataUnavailable {
            symbol: symbol.to_string(),
            reason: format!("invalid timestamp {timestamp}"),
        }
    })?;
    Ok(PricePoint::new(timestamp, close))
}

impl Default for YahooFinanceClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for YahooFinanceClient {
    fn clone(&self) -> Self {
        Self::new()
    }
}

/// Yahoo range string covering `sessions` trading days
fn daily_range(sessions: u32) -> String {
    format!("{sessions}d")
}

#[async_trait]
impl MarketData for YahooFinanceClient {
    async fn intraday_history(&self, symbol: &str) -> Result<Vec<PricePoint>> {
        self.get_closes(symbol, "1m", "1d").await
    }

    async fn daily_history(&self, symbol: &str, min_sessions: u32) -> Result<Vec<PricePoint>> {
        self.get_closes(symbol, "1d", &daily_range(min_sessions)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_range() {
        assert_eq!(daily_range(2), "2d");
        assert_eq!(daily_range(5), "5d");
    }

    #[test]
    fn test_empty_response_classification() {
        assert!(is_empty_response(&yahoo::YahooError::NoResult));
        assert!(is_empty_response(&yahoo::YahooError::NoQuotes));
        assert!(!is_empty_response(&yahoo::YahooError::DataInconsistency));
    }

    #[test]
    fn test_price_point() {
        let point = price_point("^TWII", 1_700_000_000, 17523.45).unwrap();
        assert_eq!(point.timestamp.timestamp(), 1_700_000_000);
        assert_eq!(point.close, 17523.45);

        let err = price_point("^TWII", i64::MAX, 17523.45).unwrap_err();
        assert!(matches!(err, QuoteError::DataUnavailable { symbol, .. } if symbol == "^TWII"));
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_intraday_history() {
        let client = YahooFinanceClient::new();
        let closes = client.intraday_history("^TWII").await;
        assert!(closes.is_ok());
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_daily_history() {
        let client = YahooFinanceClient::new();
        let closes = client.daily_history("^TWII", 5).await.unwrap();

        assert!(closes.len() >= 2);
        assert!(closes.iter().all(|p| p.close > 0.0));
        assert!(closes.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }
}
