use std::fmt;

use crate::action::Direction;

/// Identifier of an enemy, unique within a session and assigned in spawn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyId(pub u32);

impl fmt::Display for EnemyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in tile coordinates.
///
/// `y` grows downward, so [`Direction::North`] decreases it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring tile one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn manhattan_distance(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// True when `other` lies strictly inside the square of half-width
    /// `radius` centred on `self` (both axis distances below `radius`).
    pub fn within_square(self, other: Self, radius: u32) -> bool {
        self.x.abs_diff(other.x) < radius && self.y.abs_diff(other.y) < radius
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Integer health meter. `current` never exceeds `maximum`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Subtracts `amount`, clamping at zero.
    pub fn drain(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    /// Adds up to `amount` without exceeding the maximum. Returns the amount
    /// actually restored.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.maximum.saturating_sub(self.current));
        self.current += healed;
        healed
    }

    pub fn refill(&mut self) {
        self.current = self.maximum;
    }
}

impl fmt::Display for ResourceMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.maximum)
    }
}
