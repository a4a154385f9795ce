//! Transport orchestration: the request/complete sequences the presentation
//! drivers run, expressed over the [`SessionTransport`] trait so any
//! implementation — browser fetch or an in-memory script — drives them the
//! same way. Each returns the epoch-stamped event to feed the controller.

use crate::controller::Event;
use crate::direction::Direction;
use crate::tier::Tier;
use crate::transport::{SessionId, SessionTransport, TransportError};

/// Run the start request for `tier`, producing the completion event for the
/// epoch the request was issued under.
pub async fn run_start(transport: &dyn SessionTransport, tier: Tier, epoch: u64) -> Event {
    match transport.start(tier).await {
        Ok(session) => Event::StartSucceeded { epoch, session },
        Err(e) => Event::StartFailed {
            epoch,
            message: e.to_string(),
        },
    }
}

/// Submit a directional move, then fetch the resulting state. The fetch runs
/// regardless of the submission's outcome: a failed submission is logged and
/// the fetched snapshot remains the only truth the controller sees.
///
/// # Errors
///
/// Returns the error of the follow-up state fetch; the caller drops it and
/// the next poll tick is the de facto retry.
pub async fn run_move(
    transport: &dyn SessionTransport,
    session: &SessionId,
    epoch: u64,
    direction: Direction,
) -> Result<Event, TransportError> {
    if let Err(e) = transport.submit_move(session, direction).await {
        log::warn!("move submission failed: {e}");
    }
    let snapshot = transport.fetch_state(session).await?;
    Ok(Event::Snapshot { epoch, snapshot })
}

/// One synchronization tick: fetch the current state and stamp it.
///
/// # Errors
///
/// Returns the fetch error; ticks are independent and a failed one is
/// tolerated without a phase change.
pub async fn run_poll_tick(
    transport: &dyn SessionTransport,
    session: &SessionId,
    epoch: u64,
) -> Result<Event, TransportError> {
    let snapshot = transport.fetch_state(session).await?;
    Ok(Event::Snapshot { epoch, snapshot })
}
