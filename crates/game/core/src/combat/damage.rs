//! Damage rolls.

use crate::config::GameConfig;
use crate::env::RandomSource;

/// Spread applied around an enemy's base damage.
pub const ENEMY_DAMAGE_SPREAD: u32 = 1;

/// Roll the player's melee damage.
///
/// # Formula
///
/// ```text
/// damage = player_base_damage + range(0..=player_damage_spread)
/// ```
///
/// With the default config this is uniform over {2, 3, 4}.
pub fn roll_player_damage(config: &GameConfig, rng: &mut dyn RandomSource) -> u32 {
    config
        .player_base_damage
        .saturating_add(rng.range(0, config.player_damage_spread))
}

/// Roll an enemy's damage: base plus a -1..=1 offset, never below zero.
pub fn roll_enemy_damage(base: u32, rng: &mut dyn RandomSource) -> u32 {
    let rolled = base as i64 + rng.offset(ENEMY_DAMAGE_SPREAD) as i64;
    rolled.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;

    #[test]
    fn player_damage_spans_two_to_four() {
        let config = GameConfig::default();
        let mut rng = ScriptedRng::new([0, 1, 2, 3]);
        let rolls: Vec<u32> = (0..4)
            .map(|_| roll_player_damage(&config, &mut rng))
            .collect();
        assert_eq!(rolls, vec![2, 3, 4, 2]);
    }

    #[test]
    fn enemy_damage_never_goes_negative() {
        let mut rng = ScriptedRng::new([0, 1, 2]);
        assert_eq!(roll_enemy_damage(1, &mut rng), 0);
        assert_eq!(roll_enemy_damage(1, &mut rng), 1);
        assert_eq!(roll_enemy_damage(1, &mut rng), 2);
        assert_eq!(roll_enemy_damage(0, &mut ScriptedRng::constant(0)), 0);
    }
}
