//! Difficulty tiers and their fixed four-step progression.
//!
//! The client treats tiers as opaque ordered labels; starting lives and
//! island density are remote-service knowledge.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Easy,
    Medium,
    Hard,
    Survival,
}

/// The progression order. A run always climbs this sequence front to back.
pub const TIER_SEQUENCE: [Tier; 4] = [Tier::Easy, Tier::Medium, Tier::Hard, Tier::Survival];

impl Tier {
    /// Label used on the wire and in HUD copy.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
            Self::Survival => "SURVIVAL",
        }
    }

    /// 1-based position within [`TIER_SEQUENCE`].
    #[must_use]
    pub fn position(self) -> usize {
        TIER_SEQUENCE
            .iter()
            .position(|t| *t == self)
            .map_or(1, |i| i + 1)
    }

    /// Tier at a 1-based position, `None` past the end of the sequence.
    #[must_use]
    pub fn at(position: usize) -> Option<Self> {
        position
            .checked_sub(1)
            .and_then(|i| TIER_SEQUENCE.get(i).copied())
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}
