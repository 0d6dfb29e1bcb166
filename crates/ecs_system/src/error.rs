//! System-level error types.

use ecs_core::{EcsError, Entity};

/// Errors that end a system's tick early.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SystemError {
    /// The join or another whole-tick store operation failed.
    #[error("system '{system}' failed: {source}")]
    Store {
        /// The failing system.
        system: String,
        /// The underlying store error.
        #[source]
        source: EcsError,
    },

    /// An entity failed under [`FailurePolicy::Abort`](crate::FailurePolicy::Abort).
    #[error("system '{system}' aborted on {entity}: {source}")]
    Entity {
        /// The failing system.
        system: String,
        /// The entity being processed.
        entity: Entity,
        /// The underlying store error.
        #[source]
        source: EcsError,
    },
}

impl SystemError {
    /// The underlying store error.
    #[must_use]
    pub fn ecs_error(&self) -> &EcsError {
        match self {
            Self::Store { source, .. } | Self::Entity { source, .. } => source,
        }
    }
}
