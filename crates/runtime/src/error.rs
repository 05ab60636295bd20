//! Unified error types surfaced by the session API.

use realm_core::{EngineError, ErrorSeverity, GameError, SpawnError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("failed to set up a new game")]
    Setup(#[source] SpawnError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Setup(error) => error.severity(),
            Self::Engine(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Setup(error) => error.error_code(),
            Self::Engine(error) => error.error_code(),
        }
    }
}
