//! Common error infrastructure for realm-core.
//!
//! Gameplay rejections (walking into water, drinking a potion you do not
//! have) are ordinary outcomes and never show up here. The types in this
//! crate that implement [`GameError`] describe misuse of the engine by its
//! caller or a world that cannot satisfy generation constraints.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each subsystem has its own error enum
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Pure**: No error carries I/O or allocation-heavy context

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: The caller passed something the engine cannot act on
/// - **Internal**: Unexpected state inconsistency that requires investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input or routing, should not retry without changes.
    ///
    /// Examples: diagonal move delta, advancing dialogue while exploring
    Validation,

    /// Unexpected state inconsistency.
    ///
    /// Examples: spawner could not find a free tile, dialogue pointing at a
    /// missing NPC
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all realm-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who has to fix it, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and test assertions.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
