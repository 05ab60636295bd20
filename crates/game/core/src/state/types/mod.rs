pub mod common;
pub mod enemy;
pub mod item;
pub mod npc;
pub mod player;

// Re-export common types
pub use common::{EnemyId, Position, ResourceMeter};

// Re-export enemy types
pub use enemy::{Enemy, EnemyKind, EnemyTable, EnemyTemplate, Reward};

// Re-export item types
pub use item::{GroundItem, ItemKind};

pub use npc::Npc;

pub use player::{Inventory, Player};
