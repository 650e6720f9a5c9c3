//! Discord implementation of the chat platform
//!
//! The poise framework's setup hook fires once the gateway reports `READY`;
//! it hands the serenity [`Context`] to a [`DiscordSession`], which publishes
//! it to every [`DiscordPlatform`] through a watch channel.

use crate::error::{BotError, PlatformError, Result};
use crate::platform::{ChatPlatform, Server};
use async_trait::async_trait;
use serenity::client::Context;
use serenity::gateway::ActivityData;
use serenity::http::HttpError;
use serenity::model::gateway::GatewayIntents;
use serenity::model::id::GuildId;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};

/// Connection lifecycle as seen by the publisher
#[derive(Clone)]
pub enum SessionState {
    /// Waiting for the first `READY`
    Connecting,
    /// Connected, with the context used for API calls
    Ready(Context),
    /// The client stopped
    Closed,
}

/// Writer side of the session state, owned by the client wiring
pub struct DiscordSession {
    state: watch::Sender<SessionState>,
}

impl DiscordSession {
    /// Create a session in the `Connecting` state and a platform handle observing it
    pub fn channel() -> (Self, DiscordPlatform) {
        let (state, receiver) = watch::channel(SessionState::Connecting);
        (Self { state }, DiscordPlatform { state: receiver })
    }

    /// Open the readiness gate
    pub fn mark_ready(&self, ctx: Context) {
        self.state.send_replace(SessionState::Ready(ctx));
    }

    /// Record that the client stopped
    pub fn mark_closed(&self) {
        self.state.send_replace(SessionState::Closed);
    }
}

/// [`ChatPlatform`] backed by a serenity client
#[derive(Clone)]
pub struct DiscordPlatform {
    state: watch::Receiver<SessionState>,
}

impl DiscordPlatform {
    fn context(&self) -> std::result::Result<Context, PlatformError> {
        match &*self.state.borrow() {
            SessionState::Ready(ctx) => Ok(ctx.clone()),
            SessionState::Connecting | SessionState::Closed => Err(PlatformError::NotConnected),
        }
    }
}

#[async_trait]
impl ChatPlatform for DiscordPlatform {
    async fn wait_until_ready(&self) {
        let mut state = self.state.clone();
        let opened = state
            .wait_for(|s| !matches!(s, SessionState::Connecting))
            .await
            .is_ok();

        if !opened {
            warn!("Discord session dropped before becoming ready");
        }
    }

    fn is_connected(&self) -> bool {
        matches!(*self.state.borrow(), SessionState::Ready(_))
    }

    async fn set_watching(&self, text: &str) -> std::result::Result<(), PlatformError> {
        let ctx = self.context()?;
        ctx.set_activity(Some(ActivityData::watching(text)));
        Ok(())
    }

    async fn joined_servers(&self) -> Vec<Server> {
        let Ok(ctx) = self.context() else {
            return Vec::new();
        };

        ctx.cache
            .guilds()
            .into_iter()
            .map(|id| Server::new(id.get(), id.name(&ctx.cache).unwrap_or_default()))
            .collect()
    }

    async fn set_nickname(&self, server: &Server, nickname: &str) -> std::result::Result<(), PlatformError> {
        let ctx = self.context()?;
        GuildId::new(server.id)
            .edit_nickname(&ctx.http, Some(nickname))
            .await
            .map_err(|e| classify_error(server, e))
    }
}

fn classify_error(server: &Server, err: serenity::Error) -> PlatformError {
    let forbidden = matches!(
        &err,
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response))
            if response.status_code.as_u16() == 403
    );

    if forbidden {
        PlatformError::PermissionDenied {
            server: server.to_string(),
        }
    } else {
        PlatformError::RequestFailed(err.to_string())
    }
}

/// Gateway intents requested by the bot
///
/// Presence and member intents are privileged and must be enabled for the
/// application in the Discord developer portal.
pub fn gateway_intents() -> GatewayIntents {
    GatewayIntents::non_privileged() | GatewayIntents::GUILD_PRESENCES | GatewayIntents::GUILD_MEMBERS
}

/// Build a Discord client whose `READY` opens `session`
pub async fn build_client(token: &str, session: Arc<DiscordSession>) -> Result<serenity::Client> {
    let framework = poise::Framework::<(), BotError>::builder()
        .options(poise::FrameworkOptions {
            commands: vec![],
            ..Default::default()
        })
        .setup(move |ctx, ready, _framework| {
            Box::pin(async move {
                info!(
                    user = %ready.user.name,
                    user_id = %ready.user.id,
                    guilds = ready.guilds.len(),
                    "Connected to Discord"
                );
                session.mark_ready(ctx.clone());
                Ok(())
            })
        })
        .build();

    let client = serenity::Client::builder(token, gateway_intents())
        .framework(framework)
        .await?;

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::http::ErrorResponse;

    #[tokio::test]
    async fn test_new_session_is_not_connected() {
        let (_session, platform) = DiscordSession::channel();

        assert!(!platform.is_connected());
        assert!(platform.joined_servers().await.is_empty());
        assert!(matches!(
            platform.set_watching("+1.00 (+0.01%)").await,
            Err(PlatformError::NotConnected)
        ));
    }

    #[tokio::test]
    async fn test_closed_session_releases_waiters() {
        let (session, platform) = DiscordSession::channel();
        let waiter = {
            let platform = platform.clone();
            tokio::spawn(async move { platform.wait_until_ready().await })
        };

        session.mark_closed();
        waiter.await.unwrap();

        assert!(!platform.is_connected());
        let server = Server::new(1, "Traders");
        assert!(matches!(
            platform.set_nickname(&server, "TAIEX: 1.00").await,
            Err(PlatformError::NotConnected)
        ));
    }

    #[tokio::test]
    async fn test_dropped_session_releases_waiters() {
        let (session, platform) = DiscordSession::channel();
        drop(session);

        platform.wait_until_ready().await;
        assert!(!platform.is_connected());
    }

    #[test]
    fn test_classify_non_http_error() {
        let server = Server::new(7, "Lounge");
        let err = classify_error(&server, serenity::Error::Other("gateway hiccup"));

        assert!(matches!(err, PlatformError::RequestFailed(msg) if msg.contains("gateway hiccup")));
    }

    async fn http_error(status: u16, message: &str) -> serenity::Error {
        let body = format!(r#"{{"message":"{message}","code":50013}}"#);
        let response = http::Response::builder()
            .status(status)
            .header("content-type", "application/json")
            .body(body)
            .unwrap();
        let response =
            ErrorResponse::from_response(reqwest::Response::from(response), reqwest::Method::PATCH)
                .await;

        serenity::Error::Http(HttpError::UnsuccessfulRequest(response))
    }

    #[tokio::test]
    async fn test_classify_forbidden_as_permission_denied() {
        let server = Server::new(9, "Traders");
        let err = classify_error(&server, http_error(403, "Missing Permissions").await);

        match err {
            PlatformError::PermissionDenied { server } => assert_eq!(server, "Traders (9)"),
            other => panic!("Expected PermissionDenied, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_classify_rate_limit_as_request_failed() {
        let server = Server::new(9, "Traders");
        let err = classify_error(&server, http_error(429, "You are being rate limited.").await);

        assert!(matches!(err, PlatformError::RequestFailed(_)));
    }

    #[test]
    fn test_intents_include_members_and_presences() {
        let intents = gateway_intents();

        assert!(intents.contains(GatewayIntents::GUILD_MEMBERS));
        assert!(intents.contains(GatewayIntents::GUILD_PRESENCES));
        assert!(intents.contains(GatewayIntents::GUILDS));
    }
}
