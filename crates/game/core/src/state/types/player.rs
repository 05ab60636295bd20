//! Player avatar and inventory.

use crate::config::GameConfig;

use super::{ItemKind, Position, ResourceMeter};

/// Ordered multiset of carried items. Pickup order is preserved.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    pub items: Vec<ItemKind>,
}

impl Inventory {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: ItemKind) {
        self.items.push(kind);
    }

    /// Removes the first carried item of `kind`. Returns false when none is carried.
    pub fn take(&mut self, kind: ItemKind) -> bool {
        match self.items.iter().position(|item| *item == kind) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn count(&self, kind: ItemKind) -> usize {
        self.items.iter().filter(|item| **item == kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The controllable character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub position: Position,
    pub hp: ResourceMeter,
    pub gold: u32,
    pub level: u32,
    pub exp: u32,
    pub inventory: Inventory,
}

impl Player {
    pub fn new(position: Position, max_hp: u32) -> Self {
        Self {
            position,
            hp: ResourceMeter::full(max_hp),
            gold: 0,
            level: 1,
            exp: 0,
            inventory: Inventory::empty(),
        }
    }

    /// Fresh level-1 player at the configured start tile.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.player_start, config.player_base_hp)
    }

    pub fn is_defeated(&self) -> bool {
        self.hp.is_depleted()
    }
}
