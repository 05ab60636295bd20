/// Canonical terrain classes for world tiles.
///
/// Tiles compare by value; two `Tile::Water` are always the same terrain.
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
pub enum Tile {
    Grass,
    Water,
    Wall,
    Floor,
    Tree,
    Path,
    Castle,
    Village,
    Dungeon,
}

impl Tile {
    /// True for the walled settlements that enemies never enter.
    pub fn is_settlement(self) -> bool {
        matches!(self, Tile::Castle | Tile::Village)
    }

    /// Whether this tile stops the player.
    ///
    /// Castle and Village are walkable scenery unless `settlements_block` is set.
    pub fn blocks_player(self, settlements_block: bool) -> bool {
        match self {
            Tile::Water | Tile::Wall | Tile::Tree => true,
            Tile::Castle | Tile::Village => settlements_block,
            Tile::Grass | Tile::Floor | Tile::Path | Tile::Dungeon => false,
        }
    }

    /// Whether this tile stops an enemy (spawning or wandering).
    pub fn blocks_enemies(self) -> bool {
        self.blocks_player(true)
    }

    /// Line shown when the player steps onto this tile.
    pub fn flavor(self) -> &'static str {
        match self {
            Tile::Castle => "You see Lord British's castle.",
            Tile::Village => "A peaceful village.",
            Tile::Dungeon => "A cold draft rises from the dungeon.",
            Tile::Path => "A dirt path.",
            _ => "You venture forth.",
        }
    }

    /// Line shown when this tile rejects a move.
    pub fn rejection(self) -> &'static str {
        match self {
            Tile::Water => "The water is too deep.",
            Tile::Castle => "The castle gates are shut.",
            Tile::Village => "The village palisade bars your way.",
            _ => "Blocked.",
        }
    }
}
