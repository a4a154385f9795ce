//! Browser implementation of the session transport.
//!
//! Three GET endpoints with query parameters. Reply bodies are decoded by
//! `galleon_core::transport`, which also turns `{"error": ...}` payloads
//! into service errors.

use async_trait::async_trait;
use galleon_core::{Direction, RemoteSnapshot, SessionId, SessionTransport, Tier, TransportError};
#[cfg(target_arch = "wasm32")]
use galleon_core::{parse_start_reply, parse_state_reply};

pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    fn start_url(&self, tier: Tier) -> String {
        format!(
            "{}/api/start?difficulty={}",
            self.base_url,
            tier.wire_name()
        )
    }

    fn state_url(&self, session: &SessionId) -> String {
        format!("{}/api/state?session={session}", self.base_url)
    }

    fn move_url(&self, session: &SessionId, direction: Direction) -> String {
        format!(
            "{}/api/move?session={session}&direction={}",
            self.base_url,
            direction.wire_name()
        )
    }
}

#[cfg(target_arch = "wasm32")]
async fn get_text(url: &str) -> Result<String, TransportError> {
    let response = crate::dom::fetch_response(url)
        .await
        .map_err(|e| TransportError::Network(crate::dom::js_error_message(&e)))?;
    if !response.ok() {
        return Err(TransportError::Status(response.status()));
    }
    crate::dom::response_text(&response)
        .await
        .map_err(|e| TransportError::Network(crate::dom::js_error_message(&e)))
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl SessionTransport for HttpTransport {
    async fn start(&self, tier: Tier) -> Result<SessionId, TransportError> {
        let body = get_text(&self.start_url(tier)).await?;
        parse_start_reply(&body)
    }

    async fn fetch_state(&self, session: &SessionId) -> Result<RemoteSnapshot, TransportError> {
        let body = get_text(&self.state_url(session)).await?;
        parse_state_reply(&body)
    }

    async fn submit_move(
        &self,
        session: &SessionId,
        direction: Direction,
    ) -> Result<(), TransportError> {
        // Fire-and-forget: the reply body carries nothing the client uses;
        // the forced fetch after the move reveals the true state.
        get_text(&self.move_url(session, direction)).await.map(|_| ())
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl SessionTransport for HttpTransport {
    async fn start(&self, _tier: Tier) -> Result<SessionId, TransportError> {
        Err(TransportError::Network(String::from(
            "browser transport requires wasm",
        )))
    }

    async fn fetch_state(&self, _session: &SessionId) -> Result<RemoteSnapshot, TransportError> {
        Err(TransportError::Network(String::from(
            "browser transport requires wasm",
        )))
    }

    async fn submit_move(
        &self,
        _session: &SessionId,
        _direction: Direction,
    ) -> Result<(), TransportError> {
        Err(TransportError::Network(String::from(
            "browser transport requires wasm",
        )))
    }
}
