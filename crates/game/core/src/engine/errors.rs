//! Error types for engine operations.

use crate::action::InvalidDirection;
use crate::error::{ErrorSeverity, GameError};
use crate::state::Mode;

/// Misuse of the engine by its caller.
///
/// Gameplay refusals (blocked tiles, empty inventory) are reported through
/// [`crate::event::TurnOutcome::rejection`] instead; receiving one of these
/// means the front end routed input without looking at [`Mode`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    #[error("invalid move: {0}")]
    InvalidDirection(#[from] InvalidDirection),

    #[error("cannot move while a dialogue is open; advance it instead")]
    DialogueActive,

    #[error("the player is defeated and must respawn first")]
    PlayerDefeated,

    #[error("no dialogue is open (mode is {mode})")]
    NoActiveDialogue { mode: Mode },

    #[error("respawn requested but the player is not defeated (mode is {mode})")]
    NotDefeated { mode: Mode },

    #[error("dialogue points at missing npc {npc}")]
    DialogueDesync { npc: usize },
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DialogueDesync { .. } => ErrorSeverity::Internal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDirection(_) => "ENGINE_INVALID_DIRECTION",
            Self::DialogueActive => "ENGINE_DIALOGUE_ACTIVE",
            Self::PlayerDefeated => "ENGINE_PLAYER_DEFEATED",
            Self::NoActiveDialogue { .. } => "ENGINE_NO_ACTIVE_DIALOGUE",
            Self::NotDefeated { .. } => "ENGINE_NOT_DEFEATED",
            Self::DialogueDesync { .. } => "ENGINE_DIALOGUE_DESYNC",
        }
    }
}
