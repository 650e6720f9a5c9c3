//! TAIEX Discord ticker
//!
//! Keeps the bot's activity and nickname in sync with the TAIEX index.
//!
//! # Usage
//!
//! ```bash
//! export DISCORD_BOT_TOKEN="your-bot-token"
//! cargo run --bin taiex-ticker -p ticker-bot
//! ```

use anyhow::Context;
use std::sync::Arc;
use ticker_bot::config::TOKEN_ENV;
use ticker_bot::platform::discord;
use ticker_bot::{BotConfig, DiscordSession, PresencePublisher};
use ticker_quote::{QuoteFetcher, YahooFinanceClient};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ticker_utils::init_tracing();

    let config = BotConfig::from_env().inspect_err(|e| {
        error!("{}. Please set the {} environment variable.", e, TOKEN_ENV);
    })?;

    info!(
        symbol = %config.quote.symbol,
        interval_secs = config.publish.update_interval.as_secs(),
        "Starting TAIEX ticker"
    );

    let (session, platform) = DiscordSession::channel();
    let session = Arc::new(session);

    let fetcher = QuoteFetcher::new(YahooFinanceClient::new(), config.quote.clone());
    let publisher = PresencePublisher::new(fetcher, platform, config.publish.clone());

    let mut client = discord::build_client(&config.token, Arc::clone(&session)).await?;
    let update_task = tokio::spawn(async move { publisher.run().await });

    let outcome = client.start().await;
    session.mark_closed();
    update_task.abort();

    outcome.context("Discord client stopped")

}
