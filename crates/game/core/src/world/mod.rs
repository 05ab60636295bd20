//! Static terrain: the tile grid and its generator.
//!
//! The world is generated once per session from fixed zone rules plus a
//! random tree scatter, and never changes afterwards.

mod generator;
mod tile;

pub use generator::generate;
pub use tile::Tile;

use crate::state::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Immutable tile grid, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct World {
    dimensions: MapDimensions,
    tiles: Vec<Tile>,
}

impl World {
    /// A world where every tile is `fill`.
    pub fn filled(dimensions: MapDimensions, fill: Tile) -> Self {
        Self {
            dimensions,
            tiles: vec![fill; dimensions.area()],
        }
    }

    pub(crate) fn from_tiles(dimensions: MapDimensions, tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(tiles.len(), dimensions.area());
        Self { dimensions, tiles }
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    /// Tile at `position`, or `None` when out of bounds.
    pub fn tile(&self, position: Position) -> Option<Tile> {
        self.index(position).map(|index| self.tiles[index])
    }

    /// Overwrites a single tile. Used to author fixtures; gameplay never
    /// mutates terrain.
    pub fn set_tile(&mut self, position: Position, tile: Tile) {
        if let Some(index) = self.index(position) {
            self.tiles[index] = tile;
        }
    }

    /// Rows of tiles, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.dimensions.width.max(1) as usize)
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }
        Some(position.y as usize * self.dimensions.width as usize + position.x as usize)
    }
}
