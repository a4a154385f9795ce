//! Directional moves, normalized to one compass-named set.
//!
//! Input sources name these differently (arrow keys, on-screen buttons);
//! the compass set is canonical here and the only one put on the wire.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Name sent to the remote service.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }

    /// Map a DOM `KeyboardEvent::key` value to a direction. Only the four
    /// arrow keys map; every other key is left to the browser.
    #[must_use]
    pub fn from_arrow_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::North),
            "ArrowDown" => Some(Self::South),
            "ArrowRight" => Some(Self::East),
            "ArrowLeft" => Some(Self::West),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_map_to_compass_directions() {
        assert_eq!(Direction::from_arrow_key("ArrowUp"), Some(Direction::North));
        assert_eq!(
            Direction::from_arrow_key("ArrowDown"),
            Some(Direction::South)
        );
        assert_eq!(
            Direction::from_arrow_key("ArrowLeft"),
            Some(Direction::West)
        );
        assert_eq!(
            Direction::from_arrow_key("ArrowRight"),
            Some(Direction::East)
        );
    }

    #[test]
    fn other_keys_are_not_claimed() {
        for key in ["Enter", " ", "w", "Escape", "PageDown"] {
            assert_eq!(Direction::from_arrow_key(key), None);
        }
    }

    #[test]
    fn wire_names_are_lowercase_compass() {
        assert_eq!(Direction::North.wire_name(), "north");
        assert_eq!(Direction::West.wire_name(), "west");
    }
}
