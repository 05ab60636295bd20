//! Deterministic game logic and data types shared across front ends.
//!
//! `realm-core` defines the canonical rules of the realm (world generation,
//! movement, combat, dialogue, progression) and exposes pure APIs that the
//! runtime and any front end can reuse. All state mutation flows through
//! [`engine::GameEngine`]; every random draw goes through an injected
//! [`env::RandomSource`] so a session replays exactly from its seed.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod event;
pub mod spawn;
pub mod state;
pub mod world;

pub use action::{Direction, Intent, InvalidDirection};
pub use config::GameConfig;
pub use engine::{EngineError, GameEngine};
pub use env::{GameEnv, PcgRng, RandomSource, ScriptedRng};
pub use error::{ErrorSeverity, GameError};
pub use event::{DialogueStep, GameEvent, MoveRejection, Rejection, TurnOutcome};
pub use spawn::{SpawnError, new_game, spawn_enemies};
pub use state::{
    ActiveDialogue, Enemy, EnemyId, EnemyKind, EnemyTable, EnemyTemplate, GameState, GroundItem,
    Inventory, ItemKind, Mode, Npc, Player, Position, ResourceMeter, Reward,
};
pub use world::{MapDimensions, Tile, World};
