//! The [`Manager`]: entity lifecycle plus component storage and joins.
//!
//! A manager is single-threaded and owned by one tick driver at a time.
//! Share it across threads only behind a single external lock.

use tracing::{debug, warn};

use crate::component::Component;
use crate::entity::{Entity, EntityAllocator};
use crate::error::{EcsError, Result};
use crate::query::{JoinResult, Query};
use crate::store::ComponentStore;

/// Entity registry and component store.
#[derive(Debug, Default)]
pub struct Manager {
    allocator: EntityAllocator,
    store: ComponentStore,
}

impl Manager {
    /// Create an empty manager. The first entity it creates is `Entity(0)`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- Entity lifecycle --

    /// Allocate an entity, reusing the earliest freed ID if one is pooled.
    pub fn create_entity(&mut self) -> Entity {
        let entity = self.allocator.allocate();
        debug!(%entity, "entity created");
        entity
    }

    /// Delete an entity: remove it from every bucket and pool its ID.
    ///
    /// An entity counts as live only while it owns at least one component,
    /// so an entity that was created but never given a component cannot be
    /// deleted. IDs that were never handed out by this manager are cleared
    /// from the store but not pooled.
    ///
    /// # Errors
    ///
    /// [`EcsError::EntityNotFound`] if `entity` owns no components.
    pub fn delete_entity(&mut self, entity: Entity) -> Result<()> {
        let buckets = self.store.remove_entity(entity);
        if buckets == 0 {
            return Err(EcsError::EntityNotFound(entity));
        }
        // Owning components means the ID was claimed out of the pool, so a
        // refused free can only be an ID past the allocator's counter.
        if !self.allocator.free(entity) {
            warn!(%entity, "deleted entity was never issued by this manager, id not pooled");
        }
        debug!(%entity, buckets, "entity deleted");
        Ok(())
    }

    /// Returns `true` if `entity` owns at least one component.
    #[must_use]
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.store.entity_has_components(entity)
    }

    /// Number of entities owning at least one component.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.store.entity_count()
    }

    /// Number of IDs waiting to be reused.
    #[must_use]
    pub fn reuse_pool_len(&self) -> usize {
        self.allocator.pooled()
    }

    // -- Component operations --

    /// Append `component` to `entity`'s sequence for its tag.
    ///
    /// An entity waiting in the reuse pool becomes live again and is taken
    /// out of the pool.
    pub fn add_component_to_entity(&mut self, entity: Entity, component: Component) {
        self.claim(entity);
        self.store.add(entity, component);
    }

    /// Replace every component of `component.tag()` on `entity` with
    /// `component`. Used to keep single-valued kinds single-valued.
    pub fn replace_component(&mut self, entity: Entity, component: Component) {
        self.store.remove_if_present(entity, component.tag());
        self.claim(entity);
        self.store.add(entity, component);
    }

    fn claim(&mut self, entity: Entity) {
        if self.allocator.claim(entity) {
            debug!(%entity, "pooled entity reclaimed");
        }
    }

    /// Copy out every component of `tag` on `entity`, in insertion order.
    ///
    /// The returned list is a snapshot and does not track later writes.
    ///
    /// # Errors
    ///
    /// - [`EcsError::ComponentTypeNotFound`] if no bucket exists for `tag`.
    /// - [`EcsError::ComponentNotFound`] if `entity` has no entry in it.
    pub fn get_components_of_entity(&self, entity: Entity, tag: &str) -> Result<Vec<Component>> {
        self.store.get(entity, tag).map(<[Component]>::to_vec)
    }

    /// Return the most recently added component of `tag` on `entity`.
    ///
    /// Intended for single-valued kinds such as position.
    ///
    /// # Errors
    ///
    /// Same as [`Manager::get_components_of_entity`].
    pub fn get_component_of_entity(&self, entity: Entity, tag: &str) -> Result<Component> {
        self.store
            .get(entity, tag)?
            .last()
            .cloned()
            .ok_or_else(|| EcsError::ComponentNotFound {
                tag: tag.to_string(),
                entity: Some(entity),
            })
    }

    /// Remove every component of `tag` from `entity`. A no-op if the entity
    /// has none.
    ///
    /// # Errors
    ///
    /// [`EcsError::ComponentTypeNotFound`] if no bucket exists for `tag`.
    pub fn delete_components_of_entity(&mut self, entity: Entity, tag: &str) -> Result<()> {
        self.store.remove(entity, tag).map(|_| ())
    }

    // -- Query --

    /// Entities holding at least one component of every tag in `tags`,
    /// each with its components of those tags.
    ///
    /// # Errors
    ///
    /// [`EcsError::ComponentTypeNotFound`] if any tag has no bucket.
    pub fn get_entities_with_components<S: AsRef<str>>(&self, tags: &[S]) -> Result<JoinResult> {
        self.query(&Query::from_tags(tags))
    }

    /// Run a prepared [`Query`].
    ///
    /// # Errors
    ///
    /// [`EcsError::ComponentTypeNotFound`] if any tag has no bucket.
    pub fn query(&self, query: &Query) -> Result<JoinResult> {
        query.run(&self.store)
    }

    /// Read-only access to the underlying store.
    #[must_use]
    pub fn store(&self) -> &ComponentStore {
        &self.store
    }
}
