//! NPC roster loader.

use std::collections::HashSet;
use std::path::Path;

use anyhow::ensure;
use realm_core::Npc;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// NPC roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcRoster {
    pub npcs: Vec<Npc>,
}

/// Loader for the NPC roster from RON files.
pub struct NpcLoader;

impl NpcLoader {
    /// Load the roster from a RON file. Roster order is kept: it decides
    /// which NPC answers when several are adjacent.
    pub fn load(path: &Path) -> LoadResult<Vec<Npc>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid roster {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Npc>> {
        let roster: NpcRoster = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse NPC roster RON: {}", e))?;

        let mut seen = HashSet::new();
        for npc in &roster.npcs {
            ensure!(!npc.name.trim().is_empty(), "NPC at {} has no name", npc.position);
            ensure!(
                seen.insert(npc.position),
                "NPCs share the tile {}",
                npc.position
            );
        }

        Ok(roster.npcs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use realm_core::Position;

    #[test]
    fn parses_roster_in_order() {
        let npcs = NpcLoader::parse(
            r#"(
                npcs: [
                    (name: "Guard", position: (x: 7, y: 6), lines: ["Halt!"]),
                    (name: "Hermit", position: (x: 2, y: 9), lines: []),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(npcs.len(), 2);
        assert_eq!(npcs[0].name, "Guard");
        assert_eq!(npcs[0].position, Position::new(7, 6));
        assert_eq!(npcs[0].line(0), Some("Halt!"));
        assert!(npcs[1].lines.is_empty());
    }

    #[test]
    fn rejects_stacked_npcs() {
        let err = NpcLoader::parse(
            r#"(
                npcs: [
                    (name: "A", position: (x: 1, y: 1), lines: []),
                    (name: "B", position: (x: 1, y: 1), lines: []),
                ],
            )"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("share"));
    }
}
