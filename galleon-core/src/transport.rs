//! The remote session service boundary: three operations and the parsing
//! of their replies.
//!
//! The service answers every request with HTTP 200 and signals
//! application failures with an `{"error": "..."}` body, so reply parsing
//! checks for that payload before decoding game data.

use crate::direction::Direction;
use crate::snapshot::RemoteSnapshot;
use crate::tier::Tier;
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Opaque token naming one remote play-through. Never reused across
/// sessions; absent before start and after a reset.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap a raw token.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Decode`] for an empty token.
    pub fn new(raw: impl Into<String>) -> Result<Self, TransportError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(TransportError::Decode(String::from("empty session id")));
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request never produced a usable reply.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered outside the 2xx range.
    #[error("server replied with status {0}")]
    Status(u16),
    /// A well-formed reply carrying an error payload instead of game data.
    #[error("service error: {0}")]
    Service(String),
    /// The reply body could not be decoded.
    #[error("malformed reply: {0}")]
    Decode(String),
}

/// The three remote operations. Move submission is fire-and-forget; its
/// outcome is only ever observed through the next state fetch.
#[async_trait(?Send)]
pub trait SessionTransport {
    /// Begin a new session at the given tier.
    async fn start(&self, tier: Tier) -> Result<SessionId, TransportError>;

    /// Fetch the current authoritative state.
    async fn fetch_state(&self, session: &SessionId) -> Result<RemoteSnapshot, TransportError>;

    /// Submit a directional move. Out-of-range and blocked moves are
    /// adjudicated remotely, not here.
    async fn submit_move(
        &self,
        session: &SessionId,
        direction: Direction,
    ) -> Result<(), TransportError>;
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StartBody {
    session_id: String,
}

fn service_error(body: &str) -> Option<TransportError> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .map(TransportError::Service)
}

/// Decode a `start` reply into a session id.
///
/// # Errors
///
/// [`TransportError::Service`] for an error payload, [`TransportError::Decode`]
/// for anything that is not a start reply.
pub fn parse_start_reply(body: &str) -> Result<SessionId, TransportError> {
    if let Some(err) = service_error(body) {
        return Err(err);
    }
    let reply: StartBody =
        serde_json::from_str(body).map_err(|e| TransportError::Decode(e.to_string()))?;
    SessionId::new(reply.session_id)
}

/// Decode a `state` reply into a snapshot.
///
/// # Errors
///
/// [`TransportError::Service`] for an error payload, [`TransportError::Decode`]
/// for anything that is not a snapshot.
pub fn parse_state_reply(body: &str) -> Result<RemoteSnapshot, TransportError> {
    if let Some(err) = service_error(body) {
        return Err(err);
    }
    serde_json::from_str(body).map_err(|e| TransportError::Decode(e.to_string()))
}
