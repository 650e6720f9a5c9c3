//! Index quote fetching for taiex-ticker
//!
//! This crate turns raw price history from a market-data provider into a
//! [`Quote`]: the latest traded price plus the absolute and percentage change
//! against the previous session's close.
//!
//! - [`MarketData`] is the seam to the provider; [`YahooFinanceClient`] is the
//!   production implementation.
//! - [`QuoteFetcher`] resolves the latest price (intraday first, daily as a
//!   fallback) and never fails: every upstream problem is logged and mapped to
//!   [`Quote::unavailable`].
//!
//! # Example
//!
//! ```rust,ignore
//! use ticker_quote::{QuoteConfig, QuoteFetcher, YahooFinanceClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let fetcher = QuoteFetcher::new(YahooFinanceClient::new(), QuoteConfig::default());
//!     let quote = fetcher.fetch_quote().await;
//!     println!("{quote:?}");
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod quote;

pub use api::{MarketData, PricePoint, YahooFinanceClient};
pub use config::{QuoteConfig, QuoteConfigBuilder};
pub use error::{QuoteError, Result};
pub use fetcher::QuoteFetcher;
pub use quote::{PriceChange, Quote};
