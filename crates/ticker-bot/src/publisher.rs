//! Periodic presence and nickname publisher

use crate::config::PublishSettings;
use crate::error::PlatformError;
use crate::format::PresenceText;
use crate::platform::ChatPlatform;
use ticker_quote::{MarketData, QuoteFetcher};
use tracing::{debug, error, info, warn};

/// Outcome of one publishing cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleReport {
    /// No price was available; nothing was sent to the platform
    Skipped,
    /// Texts were published
    Published {
        presence_updated: bool,
        renamed: usize,
        failed: usize,
    },
}

/// Publishes the latest quote as the bot's activity and per-server nickname
pub struct PresencePublisher<M, P> {
    fetcher: QuoteFetcher<M>,
    platform: P,
    settings: PublishSettings,
}

impl<M, P> PresencePublisher<M, P>
where
    M: MarketData,
    P: ChatPlatform,
{
    pub fn new(fetcher: QuoteFetcher<M>, platform: P, settings: PublishSettings) -> Self {
        Self {
            fetcher,
            platform,
            settings,
        }
    }

    /// Run until the platform connection closes
    ///
    /// Waits for the platform to become ready, then runs one cycle per
    /// interval. A slow cycle delays the next one; cycles never overlap.
    pub async fn run(&self) {
        debug!("Waiting for platform to become ready");
        self.platform.wait_until_ready().await;
        info!(
            symbol = self.fetcher.symbol(),
            interval_secs = self.settings.update_interval.as_secs(),
            "Update task started"
        );

        while self.platform.is_connected() {
            let report = self.run_cycle().await;
            debug!(?report, "Cycle finished");
            tokio::time::sleep(self.settings.update_interval).await;
        }

        info!("Platform connection closed, update task stopped");
    }

    /// Fetch, format and publish once
    pub async fn run_cycle(&self) -> CycleReport {
        info!(symbol = self.fetcher.symbol(), "Fetching quote");
        let quote = self.fetcher.fetch_quote().await;

        let Some(text) = PresenceText::from_quote(
            &quote,
            &self.settings.label,
            &self.settings.unavailable_status,
        ) else {
            warn!("Failed to fetch data, skipping update this interval");
            return CycleReport::Skipped;
        };
        info!(nickname = %text.nickname, status = %text.status, "Fetched quote");

        let presence_updated = match self.platform.set_watching(&text.status).await {
            Ok(()) => {
                info!("Global status updated");
                true
            }
            Err(e) => {
                error!("Error updating global status: {}", e);
                false
            }
        };

        let (renamed, failed) = self.rename_everywhere(&text.nickname).await;

        CycleReport::Published {
            presence_updated,
            renamed,
            failed,
        }
    }

    /// Set `nickname` on every joined server, returning `(renamed, failed)`
    async fn rename_everywhere(&self, nickname: &str) -> (usize, usize) {
        let servers = self.platform.joined_servers().await;
        info!(servers = servers.len(), "Updating nickname");

        let mut renamed = 0;
        let mut failed = 0;
        for server in &servers {
            match self.platform.set_nickname(server, nickname).await {
                Ok(()) => {
                    renamed += 1;
                    debug!(server = %server, "Nickname updated");
                }
                Err(PlatformError::PermissionDenied { .. }) => {
                    failed += 1;
                    warn!(
                        server = %server,
                        "Permission denied to update nickname, the bot requires the 'Change Nickname' permission"
                    );
                }
                Err(e) => {
                    failed += 1;
                    error!(server = %server, "Error updating nickname: {}", e);
                }
            }
        }

        (renamed, failed)
    }
}
