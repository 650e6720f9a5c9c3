//! Market data providers

pub mod yahoo;

use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub use yahoo::YahooFinanceClient;

/// One closing price in a history series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, close: f64) -> Self {
        Self { timestamp, close }
    }
}

/// Source of price history for a symbol
///
/// Both series are ordered oldest first. An empty series means the provider
/// answered but had no data; errors are reserved for transport and parse
/// failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketData: Send + Sync {
    /// Minute-resolution closes for the current session
    async fn intraday_history(&self, symbol: &str) -> Result<Vec<PricePoint>>;

    /// Daily closes covering at least `min_sessions` sessions
    async fn daily_history(&self, symbol: &str, min_sessions: u32) -> Result<Vec<PricePoint>>;
}
