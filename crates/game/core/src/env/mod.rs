//! Read-only inputs the engine consults but never stores in state.
//!
//! [`GameEnv`] bundles the rule configuration and the enemy catalog so the
//! engine and spawner can be driven by loaded content without coupling to
//! how it was loaded. Randomness is the one mutable input and is passed
//! separately as a [`RandomSource`].
mod rng;

pub use rng::{PcgRng, RandomSource, ScriptedRng};

use crate::config::GameConfig;
use crate::state::EnemyTable;

/// Aggregates read-only content required by the engine and the spawner.
#[derive(Clone, Copy, Debug)]
pub struct GameEnv<'a> {
    config: &'a GameConfig,
    enemies: &'a EnemyTable,
}

impl<'a> GameEnv<'a> {
    pub fn new(config: &'a GameConfig, enemies: &'a EnemyTable) -> Self {
        Self { config, enemies }
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    pub fn enemies(&self) -> &'a EnemyTable {
        self.enemies
    }
}
