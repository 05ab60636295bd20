//! Zone-rule terrain generator.
//!
//! Each cell is classified by the first matching rule:
//!
//! ```text
//! 1. border ring (2 cells)          → Water
//! 2. x 4..=8,   y 4..=8             → Castle
//! 3. x 14..=18, y 14..=18           → Village
//! 4. x 10..=22, y 22..=28           → Dungeon
//! 5. tree_chance% roll              → Tree
//! 6. castle road, village road,
//!    dungeon approach               → Path
//! 7. otherwise                      → Grass
//! ```
//!
//! Cells are visited row-major and the tree roll is only drawn for cells
//! that reach rule 5, so reordering rules changes every generated map.

use crate::env::RandomSource;
use crate::state::Position;

use super::{MapDimensions, Tile, World};

const BORDER: i32 = 2;

/// Inclusive rectangle in tile coordinates.
#[derive(Clone, Copy)]
struct Zone {
    x: (i32, i32),
    y: (i32, i32),
}

impl Zone {
    const fn new(x: (i32, i32), y: (i32, i32)) -> Self {
        Self { x, y }
    }

    fn contains(&self, position: Position) -> bool {
        (self.x.0..=self.x.1).contains(&position.x) && (self.y.0..=self.y.1).contains(&position.y)
    }
}

const CASTLE: Zone = Zone::new((4, 8), (4, 8));
const VILLAGE: Zone = Zone::new((14, 18), (14, 18));
const DUNGEON: Zone = Zone::new((10, 22), (22, 28));

const PATHS: [Zone; 3] = [
    // Castle gate south to the village road.
    Zone::new((6, 6), (8, 14)),
    // Road east into the village.
    Zone::new((8, 14), (16, 16)),
    // Village south gate down to the dungeon (y 18..22, exclusive).
    Zone::new((14, 18), (18, 21)),
];

/// Generate a world of the given size.
pub fn generate(
    dimensions: MapDimensions,
    tree_chance: u32,
    rng: &mut dyn RandomSource,
) -> World {
    let mut tiles = Vec::with_capacity(dimensions.area());
    for y in 0..dimensions.height as i32 {
        for x in 0..dimensions.width as i32 {
            tiles.push(classify(dimensions, Position::new(x, y), tree_chance, rng));
        }
    }
    World::from_tiles(dimensions, tiles)
}

fn classify(
    dimensions: MapDimensions,
    position: Position,
    tree_chance: u32,
    rng: &mut dyn RandomSource,
) -> Tile {
    if in_border(dimensions, position) {
        Tile::Water
    } else if CASTLE.contains(position) {
        Tile::Castle
    } else if VILLAGE.contains(position) {
        Tile::Village
    } else if DUNGEON.contains(position) {
        Tile::Dungeon
    } else if rng.percent(tree_chance) {
        Tile::Tree
    } else if PATHS.iter().any(|zone| zone.contains(position)) {
        Tile::Path
    } else {
        Tile::Grass
    }
}

fn in_border(dimensions: MapDimensions, position: Position) -> bool {
    position.x < BORDER
        || position.y < BORDER
        || position.x >= dimensions.width as i32 - BORDER
        || position.y >= dimensions.height as i32 - BORDER
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, ScriptedRng};

    const SIZE: MapDimensions = MapDimensions::new(32, 32);

    fn treeless() -> World {
        generate(SIZE, 5, &mut ScriptedRng::constant(99))
    }

    #[test]
    fn zones_land_where_expected() {
        let world = treeless();
        let at = |x, y| world.tile(Position::new(x, y)).unwrap();

        assert_eq!(at(0, 0), Tile::Water);
        assert_eq!(at(1, 16), Tile::Water);
        assert_eq!(at(30, 16), Tile::Water);
        assert_eq!(at(16, 31), Tile::Water);
        assert_eq!(at(2, 2), Tile::Grass);

        assert_eq!(at(4, 4), Tile::Castle);
        assert_eq!(at(8, 8), Tile::Castle);
        assert_eq!(at(6, 6), Tile::Castle);

        assert_eq!(at(16, 16), Tile::Village);
        assert_eq!(at(14, 18), Tile::Village);

        assert_eq!(at(10, 22), Tile::Dungeon);
        assert_eq!(at(22, 28), Tile::Dungeon);
        assert_eq!(at(9, 22), Tile::Grass);

        // The castle occupies (6, 8); the road starts just below it.
        assert_eq!(at(6, 9), Tile::Path);
        assert_eq!(at(6, 14), Tile::Path);
        assert_eq!(at(6, 15), Tile::Grass);
        assert_eq!(at(8, 16), Tile::Path);
        assert_eq!(at(13, 16), Tile::Path);
        // Village wins over the road at (14, 16).
        assert_eq!(at(14, 16), Tile::Village);
        assert_eq!(at(16, 19), Tile::Path);
        assert_eq!(at(18, 21), Tile::Path);
        // The approach ends where the dungeon begins.
        assert_eq!(at(16, 22), Tile::Dungeon);
        assert_eq!(at(19, 20), Tile::Grass);
    }

    #[test]
    fn tree_roll_preempts_paths_but_not_zones() {
        let world = generate(SIZE, 5, &mut ScriptedRng::constant(0));
        let at = |x, y| world.tile(Position::new(x, y)).unwrap();

        assert_eq!(at(6, 10), Tile::Tree);
        assert_eq!(at(3, 3), Tile::Tree);
        assert_eq!(at(0, 0), Tile::Water);
        assert_eq!(at(6, 6), Tile::Castle);
        assert_eq!(at(16, 16), Tile::Village);
        assert_eq!(at(15, 25), Tile::Dungeon);
    }

    #[test]
    fn rolls_are_only_drawn_for_open_cells() {
        let mut rng = ScriptedRng::constant(99);
        let _ = generate(SIZE, 5, &mut rng);

        let interior = 28 * 28;
        let zoned = 25 + 25 + 13 * 7;
        assert_eq!(rng.draws(), interior - zoned);
    }

    #[test]
    fn same_seed_same_world() {
        let a = generate(SIZE, 5, &mut PcgRng::new(1234));
        let b = generate(SIZE, 5, &mut PcgRng::new(1234));
        assert_eq!(a, b);
    }

    #[test]
    fn out_of_bounds_lookup_is_none() {
        let world = treeless();
        assert_eq!(world.tile(Position::new(-1, 0)), None);
        assert_eq!(world.tile(Position::new(32, 5)), None);
        assert_eq!(world.rows().count(), 32);
    }
}
