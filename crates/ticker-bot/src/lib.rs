//! Discord presence ticker for the TAIEX index
//!
//! The bot polls Yahoo Finance for the Taiwan Capitalization Weighted Stock
//! Index once a minute and publishes it inside every server it has joined:
//!
//! - the global activity reads `Watching +23.45 (+0.13%)`
//! - the bot's nickname on each server reads `TAIEX: 17,523.45`
//!
//! # Architecture
//!
//! - [`ticker_quote::QuoteFetcher`] resolves the latest price and change
//! - [`PresencePublisher`] formats and publishes on a fixed interval
//! - [`ChatPlatform`] is the seam to the chat service; [`DiscordPlatform`]
//!   implements it on top of poise/serenity
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ticker_bot::{BotConfig, DiscordSession, PresencePublisher, platform::discord};
//! use ticker_quote::{QuoteFetcher, YahooFinanceClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = BotConfig::from_env()?;
//!     let (session, platform) = DiscordSession::channel();
//!     let fetcher = QuoteFetcher::new(YahooFinanceClient::new(), config.quote.clone());
//!     let publisher = PresencePublisher::new(fetcher, platform, config.publish.clone());
//!
//!     let mut client = discord::build_client(&config.token, Arc::new(session)).await?;
//!     tokio::spawn(async move { publisher.run().await });
//!     client.start().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod platform;
pub mod publisher;

pub use config::{BotConfig, BotConfigBuilder, PublishSettings};
pub use error::{BotError, PlatformError, Result};
pub use format::PresenceText;
pub use platform::{ChatPlatform, DiscordPlatform, DiscordSession, Server};
pub use publisher::{CycleReport, PresencePublisher};
