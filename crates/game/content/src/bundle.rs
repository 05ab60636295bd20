use realm_core::{EnemyTable, GameConfig, Npc};

/// Everything a session needs besides its seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Content {
    pub config: GameConfig,
    pub npcs: Vec<Npc>,
    pub enemies: EnemyTable,
}

impl Content {
    pub fn new(config: GameConfig, npcs: Vec<Npc>, enemies: EnemyTable) -> Self {
        Self {
            config,
            npcs,
            enemies,
        }
    }
}

impl Default for Content {
    /// The canonical realm: default rules, the village roster and the four
    /// classic enemy types.
    fn default() -> Self {
        Self::new(
            GameConfig::default(),
            Npc::default_roster(),
            EnemyTable::default(),
        )
    }
}
