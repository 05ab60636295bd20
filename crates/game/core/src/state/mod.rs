//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the world, the player,
//! NPCs, enemies and ground items. Front ends read this state freely but
//! mutate it exclusively through [`crate::engine::GameEngine`].
pub mod types;

pub use types::{
    Enemy, EnemyId, EnemyKind, EnemyTable, EnemyTemplate, GroundItem, Inventory, ItemKind, Npc,
    Player, Position, ResourceMeter, Reward,
};

use crate::world::{Tile, World};

/// Interaction mode, which decides how a front end routes input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Mode {
    #[default]
    Exploring,
    /// A conversation is open; movement input should advance it.
    Dialogue,
    /// The player has fallen and is waiting for `respawn`.
    Defeated,
}

/// The conversation currently on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveDialogue {
    /// Index into [`GameState::npcs`].
    pub npc: usize,
    /// Index of the line currently shown.
    pub line: usize,
}

/// Canonical snapshot of the game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub world: World,
    pub player: Player,
    /// Stationary characters, in roster order.
    pub npcs: Vec<Npc>,
    /// Every enemy ever spawned, in id order. Dead ones stay with `alive == false`.
    pub enemies: Vec<Enemy>,
    pub items: Vec<GroundItem>,
    pub mode: Mode,
    pub dialogue: Option<ActiveDialogue>,
}

impl GameState {
    /// Creates a state in exploring mode with no ground items.
    pub fn new(world: World, player: Player, npcs: Vec<Npc>, enemies: Vec<Enemy>) -> Self {
        Self {
            world,
            player,
            npcs,
            enemies,
            items: Vec::new(),
            mode: Mode::Exploring,
            dialogue: None,
        }
    }

    pub fn tile(&self, position: Position) -> Option<Tile> {
        self.world.tile(position)
    }

    /// Index of the NPC standing on `position`.
    pub fn npc_at(&self, position: Position) -> Option<usize> {
        self.npcs.iter().position(|npc| npc.position == position)
    }

    /// Index of the living enemy standing on `position`. Corpses are ignored.
    pub fn living_enemy_at(&self, position: Position) -> Option<usize> {
        self.enemies
            .iter()
            .position(|enemy| enemy.is_alive_at(position))
    }

    pub fn living_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|enemy| enemy.alive)
    }

    pub fn items_at(&self, position: Position) -> impl Iterator<Item = &GroundItem> {
        self.items
            .iter()
            .filter(move |item| item.position == position)
    }

    /// First NPC (roster order) orthogonally adjacent to the player.
    pub fn adjacent_npc(&self) -> Option<usize> {
        let player = self.player.position;
        self.npcs
            .iter()
            .position(|npc| npc.position.manhattan_distance(player) == 1)
    }

    /// The NPC and line currently in conversation.
    pub fn dialogue_line(&self) -> Option<(&Npc, &str)> {
        let dialogue = self.dialogue?;
        let npc = self.npcs.get(dialogue.npc)?;
        Some((npc, npc.line(dialogue.line)?))
    }
}
