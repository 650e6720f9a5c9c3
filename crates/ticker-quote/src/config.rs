//! Configuration for quote fetching

use crate::error::{QuoteError, Result};

/// Yahoo Finance symbol of the Taiwan Capitalization Weighted Stock Index
pub const TAIEX_SYMBOL: &str = "^TWII";

/// Sessions needed to know the previous close
pub const MIN_DAILY_SESSIONS: u32 = 2;

/// Configuration for quote fetching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteConfig {
    /// Symbol to track, in the provider's notation
    pub symbol: String,

    /// Number of daily sessions requested for the fallback price and the previous close
    pub daily_sessions: u32,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            symbol: TAIEX_SYMBOL.to_string(),
            daily_sessions: MIN_DAILY_SESSIONS,
        }
    }
}

impl QuoteConfig {
    /// Create a new configuration builder
    pub fn builder() -> QuoteConfigBuilder {
        QuoteConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(QuoteError::ConfigError("symbol must not be empty".to_string()));
        }

        if self.daily_sessions < MIN_DAILY_SESSIONS {
            return Err(QuoteError::ConfigError(format!(
                "daily_sessions must be at least {MIN_DAILY_SESSIONS}"
            )));
        }

        Ok(())
    }
}

/// Builder for QuoteConfig
#[derive(Debug, Default)]
pub struct QuoteConfigBuilder {
    symbol: Option<String>,
    daily_sessions: Option<u32>,
}

impl QuoteConfigBuilder {
    /// Set the tracked symbol
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the number of daily sessions to request
    pub fn daily_sessions(mut self, sessions: u32) -> Self {
        self.daily_sessions = Some(sessions);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<QuoteConfig> {
        let defaults = QuoteConfig::default();

        let config = QuoteConfig {
            symbol: self.symbol.unwrap_or(defaults.symbol),
            daily_sessions: self.daily_sessions.unwrap_or(defaults.daily_sessions),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QuoteConfig::default();
        assert_eq!(config.symbol, "^TWII");
        assert_eq!(config.daily_sessions, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = QuoteConfig::builder()
            .symbol("^GSPC")
            .daily_sessions(5)
            .build()
            .unwrap();

        assert_eq!(config.symbol, "^GSPC");
        assert_eq!(config.daily_sessions, 5);
    }

    #[test]
    fn test_validation_empty_symbol() {
        let result = QuoteConfig::builder().symbol("  ").build();
        assert!(matches!(result, Err(QuoteError::ConfigError(_))));
    }

    #[test]
    fn test_validation_too_few_sessions() {
        let config = QuoteConfig {
            daily_sessions: 1,
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }
}
