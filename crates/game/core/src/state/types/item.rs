//! Item-related state types.
//!
//! - ItemKind: what an item is
//! - GroundItem: an item lying on a tile, waiting to be picked up

use super::Position;

/// Every kind of item the game knows about.
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
pub enum ItemKind {
    /// Restores `GameConfig::potion_heal` hit points.
    Potion,
}

/// Items that exist on the ground (not inside the inventory).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroundItem {
    pub position: Position,
    pub kind: ItemKind,
}

impl GroundItem {
    pub fn new(position: Position, kind: ItemKind) -> Self {
        Self { position, kind }
    }
}
