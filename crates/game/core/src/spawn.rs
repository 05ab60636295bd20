//! Session setup: enemy placement and fresh-state construction.
//!
//! Enemies are placed once, when a session starts, by rejection sampling
//! inside the spawn window (`spawn_margin` tiles in from every edge).
//!
//! Draw order: count, then per enemy the type index followed by `(x, y)`
//! pairs until a tile is accepted.

use crate::env::{GameEnv, RandomSource};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Enemy, EnemyId, GameState, Npc, Player, Position};
use crate::world::{self, MapDimensions, World};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpawnError {
    #[error("enemy table is empty")]
    EmptyTable,

    #[error("spawn window is empty for a {width}x{height} world with margin {margin}")]
    EmptyWindow { width: u32, height: u32, margin: u32 },

    #[error("no valid tile for enemy {index} after {attempts} attempts")]
    NoValidTile { index: u32, attempts: u32 },
}

impl GameError for SpawnError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyTable => "SPAWN_EMPTY_TABLE",
            Self::EmptyWindow { .. } => "SPAWN_EMPTY_WINDOW",
            Self::NoValidTile { .. } => "SPAWN_NO_VALID_TILE",
        }
    }
}

/// Place the session's enemies.
///
/// A candidate tile is accepted when enemies may stand on its terrain, no
/// NPC or previously placed enemy occupies it, and it lies outside the
/// `spawn_exclusion_radius` square around the player.
pub fn spawn_enemies(
    world: &World,
    npcs: &[Npc],
    player: Position,
    env: GameEnv<'_>,
    rng: &mut dyn RandomSource,
) -> Result<Vec<Enemy>, SpawnError> {
    let config = env.config();
    let table = env.enemies();
    if table.is_empty() {
        return Err(SpawnError::EmptyTable);
    }

    let dimensions = world.dimensions();
    let margin = config.spawn_margin;
    let window = margin.saturating_mul(2);
    if dimensions.width <= window || dimensions.height <= window {
        return Err(SpawnError::EmptyWindow {
            width: dimensions.width,
            height: dimensions.height,
            margin,
        });
    }

    let count = rng.range(config.min_enemies, config.max_enemies);
    let mut enemies: Vec<Enemy> = Vec::with_capacity(count as usize);

    for index in 0..count {
        let template = &table.templates[rng.index(table.len())];
        let position = sample_tile(world, npcs, player, &enemies, env, rng).ok_or(
            SpawnError::NoValidTile {
                index,
                attempts: config.spawn_attempts,
            },
        )?;
        enemies.push(template.spawn(EnemyId(index), position));
    }

    Ok(enemies)
}

fn sample_tile(
    world: &World,
    npcs: &[Npc],
    player: Position,
    placed: &[Enemy],
    env: GameEnv<'_>,
    rng: &mut dyn RandomSource,
) -> Option<Position> {
    let config = env.config();
    let MapDimensions { width, height } = world.dimensions();
    let margin = config.spawn_margin;

    for _ in 0..config.spawn_attempts {
        let x = rng.range(margin, width - margin - 1) as i32;
        let y = rng.range(margin, height - margin - 1) as i32;
        let candidate = Position::new(x, y);

        let terrain_ok = world
            .tile(candidate)
            .is_some_and(|tile| !tile.blocks_enemies());
        let free = !npcs.iter().any(|npc| npc.position == candidate)
            && !placed.iter().any(|enemy| enemy.position == candidate);
        let far_enough = !player.within_square(candidate, config.spawn_exclusion_radius);

        if terrain_ok && free && far_enough {
            return Some(candidate);
        }
    }
    None
}

/// Build a fresh session: generate terrain, place the player at the start
/// tile, seat the NPC roster and spawn enemies.
pub fn new_game(
    env: GameEnv<'_>,
    npcs: Vec<Npc>,
    rng: &mut dyn RandomSource,
) -> Result<GameState, SpawnError> {
    let config = env.config();
    let dimensions = MapDimensions::new(config.world_width, config.world_height);
    let world = world::generate(dimensions, config.tree_chance, rng);
    let player = Player::from_config(config);
    let enemies = spawn_enemies(&world, &npcs, player.position, env, rng)?;
    Ok(GameState::new(world, player, npcs, enemies))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::{PcgRng, ScriptedRng};
    use crate::state::{EnemyKind, EnemyTable};
    use crate::world::Tile;

    fn open_world() -> World {
        World::filled(MapDimensions::new(32, 32), Tile::Grass)
    }

    #[test]
    fn count_and_kind_follow_the_rolls() {
        let config = GameConfig::default();
        let table = EnemyTable::default();
        let env = GameEnv::new(&config, &table);

        // count: 0 → 5 enemies; kind 3 → Dark Mage; tiles walk along x.
        let mut rng = ScriptedRng::new([0, 3, 4, 4, 3, 5, 4, 3, 6, 4, 3, 7, 4, 3, 8, 4]);
        let enemies =
            spawn_enemies(&open_world(), &[], Position::new(16, 16), env, &mut rng).unwrap();

        assert_eq!(enemies.len(), 5);
        assert!(enemies.iter().all(|e| e.kind == EnemyKind::DarkMage));
        let ids: Vec<u32> = enemies.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        assert_eq!(enemies[0].position, Position::new(8, 8));
        assert_eq!(enemies[4].position, Position::new(12, 8));
    }

    #[test]
    fn rejects_blocked_occupied_and_nearby_tiles() {
        let config = GameConfig {
            min_enemies: 1,
            max_enemies: 1,
            ..GameConfig::default()
        };
        let table = EnemyTable::default();
        let env = GameEnv::new(&config, &table);

        let mut world = open_world();
        world.set_tile(Position::new(5, 5), Tile::Water);
        world.set_tile(Position::new(6, 5), Tile::Village);
        world.set_tile(Position::new(7, 5), Tile::Tree);
        let npcs = vec![Npc::new("Elder", Position::new(8, 5), ["Hello."])];

        // range() draws reduce modulo 24, so raw value v maps to coordinate 4 + v.
        let mut rng = ScriptedRng::new([
            0, // kind (count has equal bounds and draws nothing)
            1, 1, // (5, 5) water
            2, 1, // (6, 5) village
            3, 1, // (7, 5) tree
            4, 1, // (8, 5) npc
            10, 10, // (14, 14) inside the player square
            5, 1, // (9, 5) accepted
        ]);
        let enemies = spawn_enemies(&world, &npcs, Position::new(16, 16), env, &mut rng).unwrap();

        assert_eq!(enemies.len(), 1);
        assert_eq!(enemies[0].position, Position::new(9, 5));
    }

    #[test]
    fn oversized_margin_leaves_no_window() {
        let config = GameConfig {
            spawn_margin: 3_000_000_000,
            ..GameConfig::default()
        };
        let table = EnemyTable::default();
        let env = GameEnv::new(&config, &table);
        let world = World::filled(MapDimensions::new(32, 32), Tile::Grass);

        let err = spawn_enemies(&world, &[], Position::new(16, 16), env, &mut PcgRng::new(1))
            .unwrap_err();
        assert_eq!(
            err,
            SpawnError::EmptyWindow {
                width: 32,
                height: 32,
                margin: 3_000_000_000
            }
        );
    }

    #[test]
    fn gives_up_after_bounded_attempts() {
        let config = GameConfig {
            spawn_attempts: 16,
            ..GameConfig::default()
        };
        let table = EnemyTable::default();
        let env = GameEnv::new(&config, &table);
        let world = World::filled(MapDimensions::new(32, 32), Tile::Water);

        let err = spawn_enemies(&world, &[], Position::new(16, 16), env, &mut PcgRng::new(1))
            .unwrap_err();
        assert_eq!(
            err,
            SpawnError::NoValidTile {
                index: 0,
                attempts: 16
            }
        );
        assert_eq!(err.severity(), ErrorSeverity::Internal);
    }

    #[test]
    fn seeded_new_game_respects_every_constraint() {
        let config = GameConfig::default();
        let table = EnemyTable::default();
        let env = GameEnv::new(&config, &table);

        for seed in 0..32 {
            let state = new_game(env, Npc::default_roster(), &mut PcgRng::new(seed)).unwrap();
            assert!((5..=8).contains(&state.enemies.len()));
            for (i, enemy) in state.enemies.iter().enumerate() {
                let p = enemy.position;
                assert!((4..28).contains(&p.x) && (4..28).contains(&p.y));
                assert!(!state.tile(p).unwrap().blocks_enemies());
                assert!(state.npc_at(p).is_none());
                assert!(!state.player.position.within_square(p, 5));
                assert!(
                    state.enemies[..i].iter().all(|other| other.position != p),
                    "seed {seed}: enemies stacked at {p}"
                );
            }
        }
    }
}
