//! Player intents accepted by the engine.

/// Error for a movement delta that is not one orthogonal step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("({dx}, {dy}) is not a cardinal direction")]
pub struct InvalidDirection {
    pub dx: i32,
    pub dy: i32,
}

/// One orthogonal step on the grid. `y` grows downward.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// Order used when an enemy picks a random step.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
        }
    }

    /// Converts a raw `(dx, dy)` delta. Anything but a single orthogonal
    /// step is a caller bug.
    pub fn from_delta(dx: i32, dy: i32) -> Result<Self, InvalidDirection> {
        match (dx, dy) {
            (0, -1) => Ok(Direction::North),
            (0, 1) => Ok(Direction::South),
            (-1, 0) => Ok(Direction::West),
            (1, 0) => Ok(Direction::East),
            _ => Err(InvalidDirection { dx, dy }),
        }
    }
}

/// Everything a front end can ask of the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intent {
    Move(Direction),
    /// Talk to an adjacent NPC, or advance the open conversation.
    Interact,
    UsePotion,
    /// Get back up after a defeat.
    Respawn,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_round_trip() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();
            assert_eq!(Direction::from_delta(dx, dy), Ok(direction));
        }
    }

    #[test]
    fn diagonal_and_zero_deltas_are_rejected() {
        assert_eq!(
            Direction::from_delta(1, 1),
            Err(InvalidDirection { dx: 1, dy: 1 })
        );
        assert!(Direction::from_delta(0, 0).is_err());
        assert!(Direction::from_delta(0, -2).is_err());
    }
}
