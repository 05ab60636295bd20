//! Game configuration loader.

use std::path::Path;

use anyhow::ensure;
use realm_core::{GameConfig, MapDimensions};

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
///
/// Missing keys keep their [`GameConfig::default`] value, so a file only
/// needs to list what it changes.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    /// Parse config data from a TOML string.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(config: &GameConfig) -> LoadResult<()> {
        let dimensions = MapDimensions::new(config.world_width, config.world_height);
        ensure!(dimensions.area() > 0, "world must not be empty");
        ensure!(
            config.world_width <= GameConfig::MAX_WORLD_SIDE
                && config.world_height <= GameConfig::MAX_WORLD_SIDE,
            "world {}x{} exceeds the {} tile limit per side",
            config.world_width,
            config.world_height,
            GameConfig::MAX_WORLD_SIDE
        );
        ensure!(
            dimensions.contains(config.player_start),
            "player_start {} lies outside the {}x{} world",
            config.player_start,
            config.world_width,
            config.world_height
        );
        ensure!(
            dimensions.contains(config.respawn_point),
            "respawn_point {} lies outside the {}x{} world",
            config.respawn_point,
            config.world_width,
            config.world_height
        );
        ensure!(config.player_base_hp > 0, "player_base_hp must be positive");
        ensure!(config.exp_per_level > 0, "exp_per_level must be positive");
        ensure!(
            config.min_enemies <= config.max_enemies,
            "min_enemies ({}) exceeds max_enemies ({})",
            config.min_enemies,
            config.max_enemies
        );
        ensure!(
            config.max_enemies <= GameConfig::MAX_ENEMIES,
            "max_enemies ({}) exceeds the limit of {}",
            config.max_enemies,
            GameConfig::MAX_ENEMIES
        );
        let narrow_side = config.world_width.min(config.world_height);
        ensure!(
            u64::from(config.spawn_margin) * 2 < u64::from(narrow_side),
            "spawn_margin ({}) leaves no room to spawn in a {}x{} world",
            config.spawn_margin,
            config.world_width,
            config.world_height
        );
        ensure!(
            config
                .player_base_damage
                .checked_add(config.player_damage_spread)
                .is_some(),
            "player damage range overflows"
        );
        for (name, value) in [
            ("potion_drop_chance", config.potion_drop_chance),
            ("enemy_idle_chance", config.enemy_idle_chance),
            ("tree_chance", config.tree_chance),
        ] {
            ensure!(value <= 100, "{name} is a percentage, got {value}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use realm_core::Position;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse(
            r#"
            potion_heal = 8
            settlements_block_player = true
            respawn_point = { x = 5, y = 7 }
            "#,
        )
        .unwrap();

        assert_eq!(config.potion_heal, 8);
        assert!(config.settlements_block_player);
        assert_eq!(config.respawn_point, Position::new(5, 7));
        assert_eq!(config.world_width, 32);
        assert_eq!(config.enemy_idle_chance, 70);
    }

    #[test]
    fn empty_file_is_the_default_ruleset() {
        assert_eq!(ConfigLoader::parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn rejects_inverted_enemy_range() {
        let err = ConfigLoader::parse("min_enemies = 9\nmax_enemies = 2").unwrap_err();
        assert!(err.to_string().contains("min_enemies"));
    }

    #[test]
    fn rejects_start_outside_world() {
        let err = ConfigLoader::parse("player_start = { x = 40, y = 1 }").unwrap_err();
        assert!(err.to_string().contains("player_start"));
    }

    #[test]
    fn rejects_margin_wider_than_the_world() {
        let err = ConfigLoader::parse("spawn_margin = 3000000000").unwrap_err();
        assert!(err.to_string().contains("spawn_margin"));
        assert!(ConfigLoader::parse("spawn_margin = 16").is_err());
        assert!(ConfigLoader::parse("spawn_margin = 15").is_ok());
    }

    #[test]
    fn rejects_oversized_worlds_and_rosters() {
        let err = ConfigLoader::parse("world_width = 100000").unwrap_err();
        assert!(err.to_string().contains("limit"));

        let err = ConfigLoader::parse("max_enemies = 4294967295").unwrap_err();
        assert!(err.to_string().contains("max_enemies"));
    }

    #[test]
    fn rejects_overflowing_damage_range() {
        let err = ConfigLoader::parse("player_base_damage = 4294967295").unwrap_err();
        assert!(err.to_string().contains("damage"));
    }

    #[test]
    fn rejects_chance_above_hundred() {
        assert!(ConfigLoader::parse("tree_chance = 101").is_err());
    }
}
