//! The authoritative remote state, as one immutable snapshot per fetch.
//!
//! A snapshot always replaces the previous one wholesale; nothing is ever
//! merged. Wire shape follows the game service: camelCase keys, a
//! 20x20 grid of single-letter cell symbols, and a coarse status tag.

use serde::Deserialize;

/// One grid cell, decoded from the server's single-letter symbols.
/// Unknown symbols decode as empty water rather than failing the fetch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum CellKind {
    #[default]
    Empty,
    Ship,
    Treasure,
    Island,
    Pirate,
    Monster,
}

impl From<String> for CellKind {
    fn from(symbol: String) -> Self {
        match symbol.as_str() {
            "S" => Self::Ship,
            "T" => Self::Treasure,
            "W" => Self::Island,
            "P" => Self::Pirate,
            "M" => Self::Monster,
            _ => Self::Empty,
        }
    }
}

/// Remote verdict on the session. The service spells the running
/// state `PLAYING`; both spellings are accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SessionStatus {
    #[default]
    #[serde(alias = "PLAYING")]
    Running,
    Win,
    Lose,
}

impl SessionStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Win | Self::Lose)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteSnapshot {
    #[serde(default)]
    pub grid: Vec<Vec<CellKind>>,
    pub status: SessionStatus,
    /// Score earned within the current level only.
    pub score: u32,
    #[serde(default)]
    pub ship_x: i32,
    #[serde(default)]
    pub ship_y: i32,
    #[serde(default)]
    pub treasure_x: i32,
    #[serde(default)]
    pub treasure_y: i32,
    #[serde(default)]
    pub lives: i32,
    #[serde(default)]
    pub pirates: u32,
    #[serde(default)]
    pub monsters: u32,
    #[serde(default)]
    pub moves: u32,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

impl RemoteSnapshot {
    /// Cell at `(row, col)`, empty water when out of range.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> CellKind {
        self.grid
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(CellKind::Empty)
    }
}
