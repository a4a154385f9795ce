//! The session lifecycle state machine.
//!
//! One controller value owns the phase, the session identity and the latest
//! snapshot; everything else (polling, input, rendering) feeds it events and
//! reads it back. Events carry the epoch they were issued under, and stale
//! ones are discarded here at apply time — never at issue time — so results
//! from requests that outlive a phase change can simply be dropped.

use crate::progress::ProgressionTracker;
use crate::snapshot::{RemoteSnapshot, SessionStatus};
use crate::tier::Tier;
use crate::transport::SessionId;

/// The client-local screen state. Exactly one phase is active at a time and
/// it is the single source of truth for what the presentation layer renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Starting,
    Running,
    OutcomeWin,
    OutcomeLose,
}

/// Everything that can happen to the controller. `StartSucceeded`,
/// `StartFailed` and `Snapshot` complete asynchronous work and carry the
/// epoch current when the request was issued.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// User picked a tier on the menu.
    StartTier { tier: Tier },
    /// Transport produced a session for the in-flight start.
    StartSucceeded { epoch: u64, session: SessionId },
    /// Transport failed the in-flight start.
    StartFailed { epoch: u64, message: String },
    /// A fetched snapshot arrived, from either the poll loop or the forced
    /// fetch after a move.
    Snapshot {
        epoch: u64,
        snapshot: RemoteSnapshot,
    },
    /// User asked for the next tier from the win modal.
    Advance,
    /// User asked to replay the tier that just ended.
    Retry,
    /// User bailed back to the menu.
    ReturnToMenu,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionController {
    phase: Phase,
    /// Bumped on every start and reset; events from an older epoch are dead.
    epoch: u64,
    session: Option<SessionId>,
    snapshot: Option<RemoteSnapshot>,
    progress: ProgressionTracker,
    outcome: Option<String>,
    error: Option<String>,
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Menu,
            epoch: 0,
            session: None,
            snapshot: None,
            progress: ProgressionTracker::new(),
            outcome: None,
            error: None,
        }
    }

    /// Apply one event. Invalid or stale events are silently dropped: they
    /// arise from normal races (a keypress after a win, a fetch resolving
    /// after a reset), not from programming errors.
    pub fn apply(&mut self, event: Event) {
        match event {
            Event::StartTier { tier } => {
                if self.phase == Phase::Menu {
                    self.progress.begin(tier);
                    self.launch();
                }
            }
            Event::StartSucceeded { epoch, session } => {
                if epoch == self.epoch && self.phase == Phase::Starting {
                    self.session = Some(session);
                    self.phase = Phase::Running;
                }
            }
            Event::StartFailed { epoch, message } => {
                if epoch == self.epoch && self.phase == Phase::Starting {
                    self.session = None;
                    self.error = Some(message);
                    self.phase = Phase::Menu;
                }
            }
            Event::Snapshot { epoch, snapshot } => {
                if epoch == self.epoch && matches!(self.phase, Phase::Starting | Phase::Running) {
                    self.accept_snapshot(snapshot);
                }
            }
            Event::Advance => {
                if self.phase == Phase::OutcomeWin && self.progress.advance().is_ok() {
                    self.launch();
                }
            }
            Event::Retry => {
                if matches!(self.phase, Phase::OutcomeWin | Phase::OutcomeLose) {
                    self.launch();
                }
            }
            Event::ReturnToMenu => {
                self.epoch += 1;
                self.session = None;
                self.snapshot = None;
                self.outcome = None;
                self.error = None;
                self.progress.reset();
                self.phase = Phase::Menu;
            }
        }
    }

    /// Enter `Starting` for the tracker's current tier: discard the old
    /// session wholesale and invalidate everything still in flight.
    fn launch(&mut self) {
        self.epoch += 1;
        self.session = None;
        self.snapshot = None;
        self.outcome = None;
        self.error = None;
        self.phase = Phase::Starting;
    }

    /// The single snapshot-apply entry point. Both fetch triggers land here;
    /// the snapshot replaces the previous one wholesale, so whichever result
    /// is applied last wins regardless of issuance order.
    fn accept_snapshot(&mut self, snapshot: RemoteSnapshot) {
        let status = snapshot.status;
        let level_score = snapshot.score;
        self.snapshot = Some(snapshot);
        match status {
            SessionStatus::Running => {}
            SessionStatus::Win => {
                self.progress.add_score(level_score);
                self.outcome = Some(if self.progress.has_next() {
                    messages::tier_complete(self.progress.index(), level_score, self.peek_next())
                } else {
                    messages::campaign_complete(self.progress.total_score())
                });
                self.phase = Phase::OutcomeWin;
            }
            SessionStatus::Lose => {
                self.outcome = Some(messages::defeat(
                    self.progress.index(),
                    self.progress.current(),
                    level_score,
                    self.progress.total_score(),
                ));
                self.phase = Phase::OutcomeLose;
            }
        }
    }

    fn peek_next(&self) -> Tier {
        Tier::at(self.progress.index() + 1).unwrap_or(self.progress.current())
    }

    /// Gate for directional moves: the session to address and the epoch to
    /// stamp on the forced fetch, or `None` when moves must be dropped.
    #[must_use]
    pub fn move_gate(&self) -> Option<(SessionId, u64)> {
        if self.phase != Phase::Running {
            return None;
        }
        self.session.clone().map(|s| (s, self.epoch))
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub fn session(&self) -> Option<&SessionId> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&RemoteSnapshot> {
        self.snapshot.as_ref()
    }

    /// The active tier.
    #[must_use]
    pub fn tier(&self) -> Tier {
        self.progress.current()
    }

    /// 1-based level number of the active tier.
    #[must_use]
    pub const fn level(&self) -> usize {
        self.progress.index()
    }

    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.progress.total_score()
    }

    #[must_use]
    pub const fn has_next_tier(&self) -> bool {
        self.progress.has_next()
    }

    /// True while a start request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Starting
    }

    #[must_use]
    pub fn outcome_message(&self) -> Option<&str> {
        self.outcome.as_deref()
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

mod messages {
    use crate::tier::Tier;

    pub fn tier_complete(level: usize, level_score: u32, next: Tier) -> String {
        format!(
            "LEVEL {level} COMPLETE!\n\nTreasure found!\nLevel score: {level_score}\n\nGet ready for level {}: {next}!",
            level + 1
        )
    }

    pub fn campaign_complete(total_score: u32) -> String {
        format!("YOU WIN THE ENTIRE GAME!\n\nAll 4 levels complete!\nTotal score: {total_score}")
    }

    pub fn defeat(level: usize, tier: Tier, level_score: u32, total_score: u32) -> String {
        format!(
            "GAME OVER!\n\nAll lives lost at level {level} ({tier})!\n\nLevel score: {level_score}\nTotal score: {total_score}\n\nTry again?"
        )
    }
}
