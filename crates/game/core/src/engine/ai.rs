//! Enemy wandering.

use crate::action::Direction;
use crate::config::GameConfig;
use crate::env::RandomSource;
use crate::state::{GameState, Position};

/// Give every living enemy, in id order, one chance to wander.
///
/// Each enemy first rolls `enemy_idle_chance`; on success it stays put and
/// nothing else is drawn. Otherwise it picks one of the four directions and
/// steps only if the target is on the map, passable for enemies, free of NPCs
/// and other living enemies, and not `vacated`, the tile the player just
/// left. A failed step is dropped silently.
///
/// The tile the player now stands on stays open: an enemy that wanders onto
/// it is engaged in a surprise exchange once the step is over.
pub fn step_enemies(
    state: &mut GameState,
    config: &GameConfig,
    rng: &mut dyn RandomSource,
    vacated: Position,
) {
    for index in 0..state.enemies.len() {
        if !state.enemies[index].alive {
            continue;
        }
        if rng.percent(config.enemy_idle_chance) {
            continue;
        }

        let direction = Direction::ALL[rng.index(Direction::ALL.len())];
        let target = state.enemies[index].position.step(direction);

        let passable = state.tile(target).is_some_and(|tile| !tile.blocks_enemies());
        let occupied = target == vacated
            || state.npc_at(target).is_some()
            || state.living_enemy_at(target).is_some();

        if passable && !occupied {
            state.enemies[index].position = target;
        }
    }
}
