//! Narrative events emitted by the engine.
//!
//! Events are the only channel from the engine to the presentation layer
//! besides the state snapshot itself. Each one renders to the line a message
//! log would show via [`core::fmt::Display`]. A front end is free to stage
//! them (for example, pausing after [`GameEvent::PlayerDefeated`]) but the
//! state has already fully transitioned when they are returned.

use std::fmt;

use crate::state::{EnemyId, EnemyKind, ItemKind};
use crate::world::Tile;

/// Why a move attempt did not happen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveRejection {
    OutOfBounds,
    Terrain(Tile),
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::OutOfBounds => f.write_str("You can't go that way."),
            MoveRejection::Terrain(tile) => f.write_str(tile.rejection()),
        }
    }
}

/// A gameplay-level refusal. The state is untouched whenever one is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rejection {
    Move(MoveRejection),
    NoPotion,
    NothingToInteract,
}

/// What happened when the conversation was advanced.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DialogueStep {
    Line(String),
    Closed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    MoveRejected(MoveRejection),
    DialogueOpened {
        npc: String,
        line: String,
    },
    DialogueAdvanced {
        npc: String,
        step: DialogueStep,
    },
    InteractionRejected,
    ItemPickedUp {
        kind: ItemKind,
        total: usize,
    },
    EnemyHit {
        enemy: EnemyId,
        kind: EnemyKind,
        amount: u32,
    },
    EnemyDefeated {
        enemy: EnemyId,
        kind: EnemyKind,
        exp: u32,
        gold: u32,
        potion_dropped: bool,
    },
    LevelUp {
        level: u32,
    },
    PlayerHit {
        attacker: EnemyKind,
        amount: u32,
    },
    PlayerDefeated,
    PlayerRespawned {
        hp: u32,
        gold: u32,
    },
    PotionUsed {
        healed: u32,
    },
    TerrainFlavor(Tile),
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::MoveRejected(reason) => write!(f, "{reason}"),
            GameEvent::DialogueOpened { npc, line } => write!(f, "{npc}: {line}"),
            GameEvent::DialogueAdvanced {
                npc,
                step: DialogueStep::Line(line),
            } => write!(f, "{npc}: {line}"),
            GameEvent::DialogueAdvanced {
                step: DialogueStep::Closed,
                ..
            } => f.write_str("Goodbye, traveler."),
            GameEvent::InteractionRejected => f.write_str("Nothing to interact with here."),
            GameEvent::ItemPickedUp { kind, total } => {
                write!(f, "You picked up a {kind}. ({total} carried)")
            }
            GameEvent::EnemyHit { kind, amount, .. } => {
                write!(f, "You hit the {kind} for {amount} damage.")
            }
            GameEvent::EnemyDefeated {
                kind,
                exp,
                gold,
                potion_dropped,
                ..
            } => {
                write!(f, "You defeated the {kind}! +{exp} exp, +{gold} gold.")?;
                if *potion_dropped {
                    f.write_str(" It dropped a potion.")?;
                }
                Ok(())
            }
            GameEvent::LevelUp { level } => write!(f, "Level up! You are now level {level}."),
            GameEvent::PlayerHit { attacker, amount } => {
                write!(f, "The {attacker} surprises you for {amount} damage!")
            }
            GameEvent::PlayerDefeated => f.write_str("You have been defeated..."),
            GameEvent::PlayerRespawned { hp, gold } => {
                write!(f, "You awaken at the castle with {hp} HP and {gold} gold.")
            }
            GameEvent::PotionUsed { healed } => write!(f, "You drink a potion and heal {healed} HP."),
            GameEvent::TerrainFlavor(tile) => f.write_str(tile.flavor()),
        }
    }
}

/// Result of one engine transition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnOutcome {
    /// Events in the order they happened.
    pub events: Vec<GameEvent>,
    /// Set when the intent was refused; the state is then unchanged.
    pub rejection: Option<Rejection>,
}

impl TurnOutcome {
    pub(crate) fn rejected(rejection: Rejection, event: Option<GameEvent>) -> Self {
        Self {
            events: event.into_iter().collect(),
            rejection: Some(rejection),
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }

    /// True when the player fell during this transition.
    pub fn player_defeated(&self) -> bool {
        self.events.contains(&GameEvent::PlayerDefeated)
    }
}
