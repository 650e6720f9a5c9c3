//! Error types for the ticker bot

use thiserror::Error;
use ticker_quote::QuoteError;

/// Errors reported by a chat platform
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The platform is not (or no longer) connected
    #[error("Not connected to the chat platform")]
    NotConnected,

    /// The bot lacks the permission required for the operation
    #[error("Permission denied on server {server}")]
    PermissionDenied {
        server: String,
    },

    /// Any other failed request (rate limit, transient network, ...)
    #[error("Request failed: {0}")]
    RequestFailed(String),
}

/// Ticker bot errors
#[derive(Debug, Error)]
pub enum BotError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Quote configuration or fetching error
    #[error(transparent)]
    Quote(#[from] QuoteError),

    /// Discord client error
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),
}

/// Result type alias for bot operations
pub type Result<T> = std::result::Result<T, BotError>;
