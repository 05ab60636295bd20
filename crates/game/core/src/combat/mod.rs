//! Combat resolution rules.
//!
//! This module provides pure functions for damage rolls and character
//! progression. All randomness comes from the caller's
//! [`RandomSource`](crate::env::RandomSource); nothing here touches
//! [`GameState`](crate::state::GameState) directly.
//!
//! # Core Functions
//!
//! - `roll_player_damage`: bump-attack damage
//! - `roll_enemy_damage`: surprise-attack damage
//! - `grant_reward` / `check_level_up`: experience and leveling
//! - `apply_respawn`: defeat penalty

pub mod damage;
pub mod progression;

pub use damage::{ENEMY_DAMAGE_SPREAD, roll_enemy_damage, roll_player_damage};
pub use progression::{apply_respawn, check_level_up, grant_reward};
