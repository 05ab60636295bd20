//! Content loaders for reading game data from files.
//!
//! Each loader reads one file format into `realm-core` types; the
//! [`ContentFactory`] ties them to a data directory.

pub mod config;
pub mod enemies;
pub mod factory;
pub mod npcs;

pub use config::ConfigLoader;
pub use enemies::EnemyTableLoader;
pub use factory::ContentFactory;
pub use npcs::NpcLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
