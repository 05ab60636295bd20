//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for the RON/TOML data files a session is built
//! from:
//! - Game configuration (TOML)
//! - NPC roster with dialogue (RON)
//! - Enemy type table (RON)
//!
//! Every file is optional at the [`Content`] level: the built-in defaults in
//! `realm-core` reproduce the canonical realm when nothing is loaded.

mod bundle;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use bundle::Content;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, EnemyTableLoader, LoadResult, NpcLoader};
