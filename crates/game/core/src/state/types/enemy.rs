//! Hostile creatures and the type table they are stamped from.

use super::{EnemyId, Position, ResourceMeter};

/// Enemy species. Display strings are the in-game names.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum EnemyKind {
    Slime,
    Skeleton,
    Orc,
    #[strum(to_string = "Dark Mage", serialize = "DarkMage", serialize = "dark_mage")]
    DarkMage,
}

/// Fixed stats for one enemy type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub kind: EnemyKind,
    pub hp: u32,
    /// Base damage; each enemy attack adds a -1..=1 roll.
    pub damage: u32,
    pub exp: u32,
    pub gold: u32,
    /// Presentation hint (CSS-style hex color).
    pub color: String,
}

impl EnemyTemplate {
    pub fn new(kind: EnemyKind, hp: u32, damage: u32, exp: u32, gold: u32, color: &str) -> Self {
        Self {
            kind,
            hp,
            damage,
            exp,
            gold,
            color: color.to_owned(),
        }
    }

    /// Stamp a living enemy of this type.
    pub fn spawn(&self, id: EnemyId, position: Position) -> Enemy {
        Enemy {
            id,
            kind: self.kind,
            position,
            hp: ResourceMeter::full(self.hp),
            damage: self.damage,
            alive: true,
            reward: Reward {
                exp: self.exp,
                gold: self.gold,
            },
            color: self.color.clone(),
        }
    }
}

/// The catalog the spawner picks enemy types from, uniformly.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTable {
    pub templates: Vec<EnemyTemplate>,
}

impl EnemyTable {
    pub fn new(templates: Vec<EnemyTemplate>) -> Self {
        Self { templates }
    }

    pub fn get(&self, kind: EnemyKind) -> Option<&EnemyTemplate> {
        self.templates.iter().find(|template| template.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for EnemyTable {
    fn default() -> Self {
        Self::new(vec![
            EnemyTemplate::new(EnemyKind::Slime, 3, 1, 5, 2, "#7ed957"),
            EnemyTemplate::new(EnemyKind::Skeleton, 5, 2, 10, 5, "#e0e0e0"),
            EnemyTemplate::new(EnemyKind::Orc, 8, 3, 20, 10, "#5a8a3a"),
            EnemyTemplate::new(EnemyKind::DarkMage, 6, 4, 25, 15, "#8a2be2"),
        ])
    }
}

/// Experience and gold granted when an enemy is slain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reward {
    pub exp: u32,
    pub gold: u32,
}

/// A spawned enemy.
///
/// Dead enemies stay in the list with `alive == false` so ids remain stable;
/// their position is frozen and ignored by occupancy checks.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub id: EnemyId,
    pub kind: EnemyKind,
    pub position: Position,
    pub hp: ResourceMeter,
    pub damage: u32,
    pub alive: bool,
    pub reward: Reward,
    pub color: String,
}

impl Enemy {
    pub fn name(&self) -> &'static str {
        self.kind.into()
    }

    pub fn is_alive_at(&self, position: Position) -> bool {
        self.alive && self.position == position
    }
}
