//! Error types for quote fetching

use thiserror::Error;

/// Quote fetching specific errors
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Yahoo Finance API error
    #[error("Yahoo Finance error: {0}")]
    YahooFinanceError(String),

    /// Upstream returned data that cannot be used
    #[error("Data not available for {symbol}: {reason}")]
    DataUnavailable {
        symbol: String,
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for quote operations
pub type Result<T> = std::result::Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QuoteError::YahooFinanceError("connection reset".to_string());
        assert_eq!(err.to_string(), "Yahoo Finance error: connection reset");

        let err = QuoteError::DataUnavailable {
            symbol: "^TWII".to_string(),
            reason: "invalid timestamp".to_string(),
        };
        assert_eq!(err.to_string(), "Data not available for ^TWII: invalid timestamp");
    }
}
