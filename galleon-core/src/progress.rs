//! Cross-level progression: which tier is active and how much score the
//! whole run has banked so far.
//!
//! Only the tracker mutates the cumulative score and tier index. A lost
//! tier contributes nothing; `advance` only ever runs from an explicit
//! user action, never automatically on a win.

use crate::tier::{TIER_SEQUENCE, Tier};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProgressionError {
    #[error("no tier beyond {current}")]
    OutOfRange { current: Tier },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressionTracker {
    /// 1-based index into [`TIER_SEQUENCE`].
    index: usize,
    total_score: u32,
}

impl Default for ProgressionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressionTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            index: 1,
            total_score: 0,
        }
    }

    /// The active tier.
    #[must_use]
    pub fn current(&self) -> Tier {
        TIER_SEQUENCE[self.index - 1]
    }

    /// 1-based index of the active tier, shown as the level number.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.index < TIER_SEQUENCE.len()
    }

    /// Step to the next tier.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressionError::OutOfRange`] past the last tier; the
    /// tracker is left unchanged in that case.
    pub fn advance(&mut self) -> Result<Tier, ProgressionError> {
        if !self.has_next() {
            return Err(ProgressionError::OutOfRange {
                current: self.current(),
            });
        }
        self.index += 1;
        Ok(self.current())
    }

    /// Bank a completed level's score into the run total.
    pub fn add_score(&mut self, level_score: u32) {
        self.total_score = self.total_score.saturating_add(level_score);
    }

    /// Position the run at an explicit tier with nothing banked. Used when
    /// a run is started fresh from the menu.
    pub fn begin(&mut self, tier: Tier) {
        self.index = tier.position();
        self.total_score = 0;
    }

    /// Back to the first tier with zero score.
    pub fn reset(&mut self) {
        self.index = 1;
        self.total_score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_through_the_whole_sequence() {
        let mut tracker = ProgressionTracker::new();
        assert_eq!(tracker.current(), Tier::Easy);
        assert_eq!(tracker.advance(), Ok(Tier::Medium));
        assert_eq!(tracker.advance(), Ok(Tier::Hard));
        assert_eq!(tracker.advance(), Ok(Tier::Survival));
        assert!(!tracker.has_next());
    }

    #[test]
    fn advance_past_the_end_fails_and_changes_nothing() {
        let mut tracker = ProgressionTracker::new();
        tracker.begin(Tier::Survival);
        tracker.add_score(500);
        let before = tracker.clone();
        assert_eq!(
            tracker.advance(),
            Err(ProgressionError::OutOfRange {
                current: Tier::Survival
            })
        );
        assert_eq!(tracker, before);
    }

    #[test]
    fn scores_accumulate_across_tiers() {
        let mut tracker = ProgressionTracker::new();
        tracker.add_score(150);
        tracker.advance().unwrap();
        tracker.add_score(300);
        assert_eq!(tracker.total_score(), 450);
    }

    #[test]
    fn reset_returns_to_first_tier_and_zero_score() {
        let mut tracker = ProgressionTracker::new();
        tracker.begin(Tier::Hard);
        tracker.add_score(900);
        tracker.reset();
        assert_eq!(tracker.current(), Tier::Easy);
        assert_eq!(tracker.index(), 1);
        assert_eq!(tracker.total_score(), 0);
    }

    #[test]
    fn begin_positions_at_the_requested_tier() {
        let mut tracker = ProgressionTracker::new();
        tracker.add_score(100);
        tracker.begin(Tier::Medium);
        assert_eq!(tracker.current(), Tier::Medium);
        assert_eq!(tracker.index(), 2);
        assert_eq!(tracker.total_score(), 0);
    }
}
