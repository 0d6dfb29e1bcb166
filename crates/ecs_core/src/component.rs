//! The type-erased [`Component`] and the typed accessors that read it back.
//!
//! A component is a type tag plus a payload whose concrete type is unknown to
//! the store. The tag is a free-form string chosen by whoever produces the
//! component; the store never validates it. The payload is recovered only
//! through a checked downcast, and a type mismatch is an
//! [`EcsError::ComponentDataMismatch`], never a panic.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::{EcsError, Result};

/// A payload type with a canonical tag.
///
/// Implementing this lets callers build components with [`Component::of`]
/// instead of repeating the tag string at every call site.
///
/// ```rust
/// use ecs_core::{Component, ComponentData};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Health {
///     current: f32,
///     max: f32,
/// }
///
/// impl ComponentData for Health {
///     fn type_name() -> &'static str { "Health" }
/// }
///
/// let c = Component::of(Health { current: 80.0, max: 100.0 });
/// assert_eq!(c.tag(), "Health");
/// ```
pub trait ComponentData: Send + Sync + 'static {
    /// The tag components of this payload type are stored under.
    fn type_name() -> &'static str;
}

/// A `(tag, payload)` pair attached to an entity.
///
/// Cloning is cheap: the payload sits behind an [`Arc`] and is shared.
#[derive(Clone)]
pub struct Component {
    tag: String,
    data: Arc<dyn Any + Send + Sync>,
    data_type: &'static str,
}

impl Component {
    /// Wrap `value` under an arbitrary tag.
    #[must_use]
    pub fn new<T: Send + Sync + 'static>(tag: impl Into<String>, value: T) -> Self {
        Self {
            tag: tag.into(),
            data: Arc::new(value),
            data_type: std::any::type_name::<T>(),
        }
    }

    /// Wrap `value` under its canonical [`ComponentData::type_name`] tag.
    #[must_use]
    pub fn of<T: ComponentData>(value: T) -> Self {
        Self::new(T::type_name(), value)
    }

    /// The type tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Name of the payload's concrete type, for diagnostics only.
    #[must_use]
    pub fn data_type_name(&self) -> &'static str {
        self.data_type
    }

    /// Returns `true` if the payload is exactly a `T`.
    #[must_use]
    pub fn is<T: 'static>(&self) -> bool {
        self.data.is::<T>()
    }

    /// Borrow the payload as `T`.
    ///
    /// # Errors
    ///
    /// [`EcsError::ComponentDataMismatch`] if the payload is not a `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Result<&T> {
        self.data
            .downcast_ref::<T>()
            .ok_or_else(|| self.mismatch::<T>())
    }

    /// Recover a copy of the payload as `T`.
    ///
    /// # Errors
    ///
    /// [`EcsError::ComponentDataMismatch`] if the payload is not a `T`.
    pub fn get_data_as_type<T: Clone + 'static>(&self) -> Result<T> {
        self.downcast_ref::<T>().cloned()
    }

    fn mismatch<T: 'static>(&self) -> EcsError {
        EcsError::ComponentDataMismatch {
            tag: self.tag.clone(),
            expected: std::any::type_name::<T>(),
            found: self.data_type,
        }
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("tag", &self.tag)
            .field("data_type", &self.data_type)
            .finish_non_exhaustive()
    }
}

/// Extract the payload of the first component tagged `tag` as `T`.
///
/// # Errors
///
/// - [`EcsError::ComponentNotFound`] if no entry carries `tag`.
/// - [`EcsError::ComponentDataMismatch`] if the entry's payload is not a `T`.
pub fn get_component_data<T: Clone + 'static>(components: &[Component], tag: &str) -> Result<T> {
    components
        .iter()
        .find(|c| c.tag == tag)
        .ok_or_else(|| not_found(tag))?
        .get_data_as_type()
}

/// Like [`get_component_data`], but reads the most recently added entry.
///
/// Used for single-valued kinds where only the latest write matters.
///
/// # Errors
///
/// Same as [`get_component_data`].
pub fn get_latest_component_data<T: Clone + 'static>(
    components: &[Component],
    tag: &str,
) -> Result<T> {
    components
        .iter()
        .rev()
        .find(|c| c.tag == tag)
        .ok_or_else(|| not_found(tag))?
        .get_data_as_type()
}

fn not_found(tag: &str) -> EcsError {
    EcsError::ComponentNotFound {
        tag: tag.to_string(),
        entity: None,
    }
}
