//! Chat platform abstraction

pub mod discord;

use crate::error::PlatformError;
use async_trait::async_trait;
use std::fmt;

pub use discord::{DiscordPlatform, DiscordSession};

/// A server (guild) the bot is a member of
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    pub id: u64,
    pub name: String,
}

impl Server {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Operations the publisher needs from a chat platform
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Resolve once the platform is connected and its initial state is synced,
    /// or once it gave up connecting
    async fn wait_until_ready(&self);

    /// Whether the connection is still open
    fn is_connected(&self) -> bool;

    /// Set the global "Watching ..." activity
    async fn set_watching(&self, text: &str) -> Result<(), PlatformError>;

    /// Servers the bot currently belongs to
    async fn joined_servers(&self) -> Vec<Server>;

    /// Set the bot's own nickname on `server`
    ///
    /// Fails with [`PlatformError::PermissionDenied`] when the bot may not
    /// change its nickname there.
    async fn set_nickname(&self, server: &Server, nickname: &str) -> Result<(), PlatformError>;
}
