//! Error types for entity and component operations.

use crate::entity::Entity;

/// Errors returned by [`Manager`](crate::Manager) and the typed component
/// accessors.
///
/// Every variant describes an expected, recoverable condition. Nothing in
/// this crate panics on bad input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EcsError {
    /// The entity owns no components in any bucket.
    #[error("{0} not found")]
    EntityNotFound(Entity),

    /// No component of this tag has ever been stored.
    #[error("component type '{0}' not found")]
    ComponentTypeNotFound(String),

    /// The bucket exists, but the entity has no entry in it.
    #[error("component '{tag}' not found{}", on_entity(.entity))]
    ComponentNotFound {
        /// The requested type tag.
        tag: String,
        /// The entity that was queried, if the lookup was entity-scoped.
        entity: Option<Entity>,
    },

    /// The stored payload is not of the requested concrete type.
    #[error("component '{tag}' holds {found}, requested {expected}")]
    ComponentDataMismatch {
        /// The tag of the component that was read.
        tag: String,
        /// Name of the requested type.
        expected: &'static str,
        /// Name of the stored payload type.
        found: &'static str,
    },
}

impl EcsError {
    /// Returns `true` for [`EcsError::ComponentTypeNotFound`].
    #[must_use]
    pub fn is_type_not_found(&self) -> bool {
        matches!(self, Self::ComponentTypeNotFound(_))
    }
}

fn on_entity(entity: &Option<Entity>) -> String {
    entity.map(|e| format!(" on {e}")).unwrap_or_default()
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EcsError>;
