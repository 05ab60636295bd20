//! Content factory for building a session's content from data files.

use std::path::{Path, PathBuf};

use realm_core::{EnemyTable, GameConfig, MapDimensions, Npc};

use crate::Content;
use crate::loaders::{ConfigLoader, EnemyTableLoader, LoadResult, NpcLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── npcs.ron
/// └── enemies.ron
/// ```
///
/// [`ContentFactory::load`] falls back to the built-in default for any file
/// that does not exist; a file that exists but fails to parse is an error.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const NPCS_FILE: &'static str = "npcs.ron";
    pub const ENEMIES_FILE: &'static str = "enemies.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join(Self::CONFIG_FILE))
    }

    /// Load the NPC roster from `npcs.ron`.
    pub fn load_npcs(&self) -> LoadResult<Vec<Npc>> {
        NpcLoader::load(&self.data_dir.join(Self::NPCS_FILE))
    }

    /// Load the enemy type table from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<EnemyTable> {
        EnemyTableLoader::load(&self.data_dir.join(Self::ENEMIES_FILE))
    }

    /// Load every content file, using defaults for missing ones.
    pub fn load(&self) -> LoadResult<Content> {
        let config = self.load_or_default(Self::CONFIG_FILE, || self.load_config())?;
        let npcs = self.load_or_else(Self::NPCS_FILE, Npc::default_roster, || self.load_npcs())?;
        let enemies = self.load_or_default(Self::ENEMIES_FILE, || self.load_enemies())?;

        let dimensions = MapDimensions::new(config.world_width, config.world_height);
        for npc in &npcs {
            anyhow::ensure!(
                dimensions.contains(npc.position),
                "NPC {} at {} lies outside the {}x{} world",
                npc.name,
                npc.position,
                config.world_width,
                config.world_height
            );
        }

        Ok(Content::new(config, npcs, enemies))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn load_or_default<T: Default>(
        &self,
        file: &str,
        load: impl FnOnce() -> LoadResult<T>,
    ) -> LoadResult<T> {
        self.load_or_else(file, T::default, load)
    }

    fn load_or_else<T>(
        &self,
        file: &str,
        fallback: impl FnOnce() -> T,
        load: impl FnOnce() -> LoadResult<T>,
    ) -> LoadResult<T> {
        if self.data_dir.join(file).exists() {
            load()
        } else {
            Ok(fallback())
        }
    }
}
