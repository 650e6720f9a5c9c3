//! Resolves the latest quote from a market data provider

use crate::api::{MarketData, PricePoint};
use crate::config::QuoteConfig;
use crate::error::Result;
use crate::quote::Quote;
use tracing::{debug, error, warn};

/// Fetches the latest quote for the configured symbol
///
/// The latest price comes from intraday history, or from daily history when
/// the intraday series is empty. The previous close is always taken from a
/// separate daily history request.
pub struct QuoteFetcher<M> {
    source: M,
    config: QuoteConfig,
}

impl<M: MarketData> QuoteFetcher<M> {
    /// Create a new fetcher over `source`
    pub fn new(source: M, config: QuoteConfig) -> Self {
        Self { source, config }
    }

    /// Symbol being tracked
    pub fn symbol(&self) -> &str {
        &self.config.symbol
    }

    /// Fetch the latest quote
    ///
    /// Never fails: upstream errors are logged and reported as
    /// [`Quote::unavailable`].
    pub async fn fetch_quote(&self) -> Quote {
        match self.try_fetch_quote().await {
            Ok(quote) => quote,
            Err(e) => {
                error!(symbol = %self.config.symbol, "Error fetching quote: {}", e);
                Quote::unavailable()
            }
        }
    }

    async fn try_fetch_quote(&self) -> Result<Quote> {
        let symbol = self.config.symbol.as_str();

        let mut series = self.source.intraday_history(symbol).await?;
        if series.is_empty() {
            debug!(symbol, "Intraday history empty, falling back to daily history");
            series = self
                .source
                .daily_history(symbol, self.config.daily_sessions)
                .await?;
        }

        let Some(latest_price) = latest_close(&series) else {
            warn!(symbol, "Upstream returned empty data");
            return Ok(Quote::unavailable());
        };

        let daily = self
            .source
            .daily_history(symbol, self.config.daily_sessions)
            .await?;

        match previous_close(&daily) {
            Some(previous) => Ok(Quote::with_previous_close(latest_price, previous)),
            None => {
                warn!(
                    symbol,
                    sessions = daily.len(),
                    "Not enough historical data to calculate change"
                );
                Ok(Quote::price_only(latest_price))
            }
        }
    }
}

fn latest_close(series: &[PricePoint]) -> Option<f64> {
    series.last().map(|p| p.close)
}

/// Close of the session before the latest one
fn previous_close(daily: &[PricePoint]) -> Option<f64> {
    daily.len().checked_sub(2).map(|i| daily[i].close)
}
