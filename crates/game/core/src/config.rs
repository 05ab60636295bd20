use crate::state::Position;

/// Game configuration constants and tunable parameters.
///
/// Every rule constant the engine consults lives here so content files can
/// rebalance a session without touching code. `Default` reproduces the
/// canonical ruleset.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub world_width: u32,
    pub world_height: u32,

    /// Tile the player occupies when a session starts.
    pub player_start: Position,
    /// Tile the player is teleported to by `respawn`.
    pub respawn_point: Position,
    pub player_base_hp: u32,

    /// Experience needed per level (`level * exp_per_level`).
    pub exp_per_level: u32,
    pub hp_per_level: u32,

    /// Player bump damage is `player_base_damage + range(0..=player_damage_spread)`.
    pub player_base_damage: u32,
    pub player_damage_spread: u32,

    pub potion_heal: u32,
    /// Percent chance that a slain enemy leaves a potion behind.
    pub potion_drop_chance: u32,
    /// Percent chance that an enemy skips its move in an AI step.
    pub enemy_idle_chance: u32,
    /// Percent chance that an eligible cell becomes a tree.
    pub tree_chance: u32,

    pub min_enemies: u32,
    pub max_enemies: u32,
    /// Distance from each map edge that spawned enemies must respect.
    pub spawn_margin: u32,
    /// Half-width of the square around the player where enemies may not spawn.
    pub spawn_exclusion_radius: u32,
    /// Upper bound on rejection-sampling attempts per enemy.
    pub spawn_attempts: u32,

    /// When set, Castle and Village tiles block the player instead of only
    /// producing flavor text.
    pub settlements_block_player: bool,
}

impl GameConfig {
    pub const DEFAULT_WORLD_WIDTH: u32 = 32;
    pub const DEFAULT_WORLD_HEIGHT: u32 = 32;
    pub const DEFAULT_PLAYER_START: Position = Position::new(16, 16);
    pub const DEFAULT_RESPAWN_POINT: Position = Position::new(6, 6);
    pub const DEFAULT_PLAYER_HP: u32 = 20;
    pub const DEFAULT_EXP_PER_LEVEL: u32 = 50;
    pub const DEFAULT_HP_PER_LEVEL: u32 = 5;
    pub const DEFAULT_POTION_HEAL: u32 = 5;

    /// Largest accepted world side, in tiles.
    pub const MAX_WORLD_SIDE: u32 = 1024;
    /// Largest accepted enemy count per session.
    pub const MAX_ENEMIES: u32 = 256;

    pub fn new() -> Self {
        Self {
            world_width: Self::DEFAULT_WORLD_WIDTH,
            world_height: Self::DEFAULT_WORLD_HEIGHT,
            player_start: Self::DEFAULT_PLAYER_START,
            respawn_point: Self::DEFAULT_RESPAWN_POINT,
            player_base_hp: Self::DEFAULT_PLAYER_HP,
            exp_per_level: Self::DEFAULT_EXP_PER_LEVEL,
            hp_per_level: Self::DEFAULT_HP_PER_LEVEL,
            player_base_damage: 2,
            player_damage_spread: 2,
            potion_heal: Self::DEFAULT_POTION_HEAL,
            potion_drop_chance: 50,
            enemy_idle_chance: 70,
            tree_chance: 5,
            min_enemies: 5,
            max_enemies: 8,
            spawn_margin: 4,
            spawn_exclusion_radius: 5,
            spawn_attempts: 10_000,
            settlements_block_player: false,
        }
    }

    /// Experience required to advance past `level`.
    pub fn exp_threshold(&self, level: u32) -> u32 {
        level.saturating_mul(self.exp_per_level)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
