//! Session orchestration for the deterministic realm simulation.
//!
//! This crate wraps the pure engine from `realm-core` into a playable
//! session. Consumers embed [`GameSession`] to submit intents, read the
//! current [`realm_core::GameState`], and show the [`MessageLog`].
//!
//! Modules are organized by responsibility:
//! - [`session`] owns the state, the seeded random source and intent routing
//! - [`log`] keeps the bounded, newest-first message history
//! - [`error`] unifies engine and setup failures
pub mod error;
pub mod log;
pub mod session;

pub use error::{Result, SessionError};
pub use log::MessageLog;
pub use session::{GameSession, SessionConfig};
