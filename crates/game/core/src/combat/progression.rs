//! Experience, leveling and the defeat penalty.

use crate::config::GameConfig;
use crate::state::{Player, Reward};

/// Credit a kill's experience and gold.
pub fn grant_reward(player: &mut Player, reward: Reward) {
    player.exp = player.exp.saturating_add(reward.exp);
    player.gold = player.gold.saturating_add(reward.gold);
}

/// Advance at most one level.
///
/// When `exp >= level * exp_per_level` the player gains a level and
/// `hp_per_level` max HP, is fully healed and has experience reset to zero.
/// Overshoot is discarded: a single kill never grants two levels.
///
/// Returns the new level when one was gained.
pub fn check_level_up(player: &mut Player, config: &GameConfig) -> Option<u32> {
    if player.exp < config.exp_threshold(player.level) {
        return None;
    }
    player.level += 1;
    player.hp.maximum = player.hp.maximum.saturating_add(config.hp_per_level);
    player.hp.refill();
    player.exp = 0;
    Some(player.level)
}

/// Apply the respawn penalty: teleport to the respawn point, come back with
/// half max HP (at least 1) and half the gold, rounded down. Inventory is kept.
pub fn apply_respawn(player: &mut Player, config: &GameConfig) {
    player.position = config.respawn_point;
    player.hp.current = (player.hp.maximum / 2).max(1).min(player.hp.maximum);
    player.gold /= 2;
}
