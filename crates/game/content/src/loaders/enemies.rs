//! Enemy type table loader.

use std::collections::HashSet;
use std::path::Path;

use anyhow::ensure;
use realm_core::{EnemyTable, EnemyTemplate};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Enemy catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyCatalog {
    pub enemies: Vec<EnemyTemplate>,
}

/// Loader for the enemy type table from RON files.
pub struct EnemyTableLoader;

impl EnemyTableLoader {
    pub fn load(path: &Path) -> LoadResult<EnemyTable> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid enemy table {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<EnemyTable> {
        let catalog: EnemyCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy catalog RON: {}", e))?;

        ensure!(!catalog.enemies.is_empty(), "enemy table is empty");
        let mut kinds = HashSet::new();
        for template in &catalog.enemies {
            ensure!(template.hp > 0, "{} must have positive hp", template.kind);
            ensure!(kinds.insert(template.kind), "{} is listed twice", template.kind);
        }

        Ok(EnemyTable::new(catalog.enemies))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use realm_core::EnemyKind;

    #[test]
    fn parses_templates() {
        let table = EnemyTableLoader::parse(
            r##"(
                enemies: [
                    (kind: Slime, hp: 4, damage: 1, exp: 6, gold: 3, color: "#00ff00"),
                    (kind: DarkMage, hp: 6, damage: 4, exp: 25, gold: 15, color: "#8a2be2"),
                ],
            )"##,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        let slime = table.get(EnemyKind::Slime).unwrap();
        assert_eq!((slime.hp, slime.exp, slime.gold), (4, 6, 3));
        assert!(table.get(EnemyKind::Orc).is_none());
    }

    #[test]
    fn rejects_duplicates_and_empty_tables() {
        assert!(EnemyTableLoader::parse("(enemies: [])").is_err());

        let err = EnemyTableLoader::parse(
            r##"(
                enemies: [
                    (kind: Orc, hp: 8, damage: 3, exp: 20, gold: 10, color: "#5a8a3a"),
                    (kind: Orc, hp: 9, damage: 3, exp: 20, gold: 10, color: "#5a8a3a"),
                ],
            )"##,
        )
        .unwrap_err();
        assert!(err.to_string().contains("twice"));
    }

    #[test]
    fn rejects_zero_hp() {
        let err = EnemyTableLoader::parse(
            r##"(enemies: [(kind: Slime, hp: 0, damage: 1, exp: 5, gold: 2, color: "#7ed957")])"##,
        )
        .unwrap_err();
        assert!(err.to_string().contains("positive hp"));
    }
}
