//! Configuration for the ticker bot

use crate::error::{BotError, Result};
use std::fmt;
use std::time::Duration;
use ticker_quote::QuoteConfig;

/// Environment variable holding the Discord bot token
pub const TOKEN_ENV: &str = "DISCORD_BOT_TOKEN";

/// Label shown in front of the price in the nickname
pub const DEFAULT_LABEL: &str = "TAIEX";

/// Seconds between two updates
pub const DEFAULT_UPDATE_INTERVAL_SECS: u64 = 60;

/// Status shown when the price is known but the change is not
pub const DEFAULT_UNAVAILABLE_STATUS: &str = "Change unavailable";

/// What gets published and how often
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishSettings {
    /// Nickname prefix, e.g. `TAIEX` in `TAIEX: 17,523.45`
    pub label: String,

    /// Sleep between two iterations
    pub update_interval: Duration,

    /// Status text used when the change cannot be computed
    pub unavailable_status: String,
}

impl Default for PublishSettings {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            update_interval: Duration::from_secs(DEFAULT_UPDATE_INTERVAL_SECS),
            unavailable_status: DEFAULT_UNAVAILABLE_STATUS.to_string(),
        }
    }
}

/// Configuration for the ticker bot
#[derive(Clone, Default)]
pub struct BotConfig {
    /// Discord bot token
    pub token: String,

    /// Quote fetching configuration
    pub quote: QuoteConfig,

    /// Publishing configuration
    pub publish: PublishSettings,
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("token", &"<redacted>")
            .field("quote", &self.quote)
            .field("publish", &self.publish)
            .finish()
    }
}

impl BotConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        Self::builder().with_env_token().build()
    }

    /// Create a builder
    pub fn builder() -> BotConfigBuilder {
        BotConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.token.trim().is_empty() {
            return Err(BotError::ConfigError(format!("{TOKEN_ENV} not set")));
        }

        if self.publish.update_interval.is_zero() {
            return Err(BotError::ConfigError(
                "update_interval must be greater than 0".to_string(),
            ));
        }

        self.quote.validate()?;
        Ok(())
    }
}

/// Builder for BotConfig
#[derive(Debug, Default)]
pub struct BotConfigBuilder {
    token: Option<String>,
    quote: Option<QuoteConfig>,
    label: Option<String>,
    update_interval: Option<Duration>,
    unavailable_status: Option<String>,
}

impl BotConfigBuilder {
    /// Set the bot token
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Load the bot token from the environment
    pub fn with_env_token(mut self) -> Self {
        if let Ok(token) = std::env::var(TOKEN_ENV) {
            self.token = Some(token);
        }
        self
    }

    /// Set quote config
    pub fn quote_config(mut self, config: QuoteConfig) -> Self {
        self.quote = Some(config);
        self
    }

    /// Set nickname label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set update interval
    pub fn update_interval(mut self, interval: Duration) -> Self {
        self.update_interval = Some(interval);
        self
    }

    /// Set the status shown when no change can be computed
    pub fn unavailable_status(mut self, status: impl Into<String>) -> Self {
        self.unavailable_status = Some(status.into());
        self
    }

    /// Build the config
    pub fn build(self) -> Result<BotConfig> {
        let defaults = PublishSettings::default();

        let config = BotConfig {
            token: self.token.unwrap_or_default(),
            quote: self.quote.unwrap_or_default(),
            publish: PublishSettings {
                label: self.label.unwrap_or(defaults.label),
                update_interval: self.update_interval.unwrap_or(defaults.update_interval),
                unavailable_status: self
                    .unavailable_status
                    .unwrap_or(defaults.unavailable_status),
            },
        };

        config.validate()?;
        Ok(config)
    }
}
