//! Galleon Session Core
//!
//! Platform-agnostic controller for a remote grid treasure-hunt session.
//! The remote service owns every game rule; this crate owns the client-side
//! state machine, the tier progression and the transport boundary, with no
//! UI or platform-specific dependencies.

#![forbid(unsafe_code)]

pub mod actions;
pub mod controller;
pub mod direction;
pub mod progress;
pub mod snapshot;
pub mod tier;
pub mod transport;

// Re-export commonly used types
pub use actions::{run_move, run_poll_tick, run_start};
pub use controller::{Event, Phase, SessionController};
pub use direction::Direction;
pub use progress::{ProgressionError, ProgressionTracker};
pub use snapshot::{CellKind, RemoteSnapshot, SessionStatus};
pub use tier::{TIER_SEQUENCE, Tier};
pub use transport::{
    SessionId, SessionTransport, TransportError, parse_start_reply, parse_state_reply,
};
