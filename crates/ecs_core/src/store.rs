//! Tag-indexed component storage.
//!
//! The store maps each type tag to a [`Bucket`]: the entities holding at least
//! one component of that tag, each with its components in insertion order.
//! Buckets are created on first write and are never removed, even when they
//! become empty.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::debug;

use crate::component::Component;
use crate::entity::Entity;
use crate::error::{EcsError, Result};

/// Per-tag mapping from entity to its ordered component sequence.
///
/// Backed by a [`BTreeMap`] so iteration is always in ascending entity order.
pub type Bucket = BTreeMap<Entity, Vec<Component>>;

/// Owns every component bucket.
#[derive(Debug, Default)]
pub struct ComponentStore {
    buckets: HashMap<String, Bucket>,
}

impl ComponentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `component` to the sequence for `(component.tag(), entity)`.
    ///
    /// Never overwrites: repeated calls accumulate.
    pub fn add(&mut self, entity: Entity, component: Component) {
        let tag = component.tag().to_string();
        let components = self
            .buckets
            .entry(tag.clone())
            .or_default()
            .entry(entity)
            .or_default();
        components.push(component);
        debug!(%entity, tag = tag.as_str(), count = components.len(), "component added");
    }

    /// Borrow the components of `tag` attached to `entity`.
    ///
    /// # Errors
    ///
    /// - [`EcsError::ComponentTypeNotFound`] if no bucket exists for `tag`.
    /// - [`EcsError::ComponentNotFound`] if `entity` has no entry in it.
    pub fn get(&self, entity: Entity, tag: &str) -> Result<&[Component]> {
        self.bucket(tag)?
            .get(&entity)
            .map(Vec::as_slice)
            .ok_or_else(|| EcsError::ComponentNotFound {
                tag: tag.to_string(),
                entity: Some(entity),
            })
    }

    /// Remove every component of `tag` from `entity`.
    ///
    /// Removing from an entity that has no entry is a no-op. Returns whether
    /// anything was removed.
    ///
    /// # Errors
    ///
    /// [`EcsError::ComponentTypeNotFound`] if no bucket exists for `tag`.
    pub fn remove(&mut self, entity: Entity, tag: &str) -> Result<bool> {
        if !self.has_bucket(tag) {
            return Err(EcsError::ComponentTypeNotFound(tag.to_string()));
        }
        Ok(self.remove_if_present(entity, tag))
    }

    /// Remove every component of `tag` from `entity`, treating a missing
    /// bucket like a missing entry. Returns whether anything was removed.
    pub fn remove_if_present(&mut self, entity: Entity, tag: &str) -> bool {
        let removed = self
            .buckets
            .get_mut(tag)
            .and_then(|bucket| bucket.remove(&entity))
            .is_some();
        if removed {
            debug!(%entity, tag, "components removed");
        }
        removed
    }

    /// Remove `entity` from every bucket. Returns how many buckets held it.
    pub fn remove_entity(&mut self, entity: Entity) -> usize {
        self.buckets
            .values_mut()
            .filter_map(|bucket| bucket.remove(&entity))
            .count()
    }

    /// Borrow the bucket for `tag`.
    ///
    /// # Errors
    ///
    /// [`EcsError::ComponentTypeNotFound`] if no bucket exists for `tag`.
    pub fn bucket(&self, tag: &str) -> Result<&Bucket> {
        self.buckets
            .get(tag)
            .ok_or_else(|| EcsError::ComponentTypeNotFound(tag.to_string()))
    }

    /// Returns `true` if a component of `tag` has ever been added.
    #[must_use]
    pub fn has_bucket(&self, tag: &str) -> bool {
        self.buckets.contains_key(tag)
    }

    /// All tags that have a bucket, sorted.
    #[must_use]
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.buckets.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Number of entities with an entry in the bucket for `tag` (0 if none).
    #[must_use]
    pub fn bucket_len(&self, tag: &str) -> usize {
        self.buckets.get(tag).map_or(0, BTreeMap::len)
    }

    /// Returns `true` if `entity` owns at least one component in any bucket.
    #[must_use]
    pub fn entity_has_components(&self, entity: Entity) -> bool {
        self.buckets.values().any(|bucket| bucket.contains_key(&entity))
    }

    /// Number of distinct entities owning at least one component.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.buckets
            .values()
            .flat_map(BTreeMap::keys)
            .collect::<BTreeSet<_>>()
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e(id: u64) -> Entity {
        Entity::from_raw(id)
    }

    #[test]
    fn test_add_creates_bucket_and_appends() {
        let mut store = ComponentStore::new();
        assert!(!store.has_bucket("A"));

        store.add(e(0), Component::new("A", 1_i32));
        store.add(e(0), Component::new("A", 2_i32));

        let got = store.get(e(0), "A").unwrap();
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].get_data_as_type::<i32>(), Ok(1));
        assert_eq!(got[1].get_data_as_type::<i32>(), Ok(2));
    }

    #[test]
    fn test_get_error_taxonomy() {
        let mut store = ComponentStore::new();
        store.add(e(0), Component::new("A", ()));

        assert_eq!(
            store.get(e(0), "B").unwrap_err(),
            EcsError::ComponentTypeNotFound("B".into())
        );
        assert_eq!(
            store.get(e(1), "A").unwrap_err(),
            EcsError::ComponentNotFound {
                tag: "A".into(),
                entity: Some(e(1))
            }
        );
    }

    #[test]
    fn test_remove_keeps_empty_bucket() {
        let mut store = ComponentStore::new();
        store.add(e(0), Component::new("A", ()));

        assert_eq!(store.remove(e(0), "A"), Ok(true));
        assert_eq!(store.remove(e(0), "A"), Ok(false));
        assert!(store.has_bucket("A"));
        assert_eq!(store.bucket_len("A"), 0);
        assert!(store.remove(e(0), "B").unwrap_err().is_type_not_found());
    }

    #[test]
    fn test_remove_if_present_tolerates_missing_bucket() {
        let mut store = ComponentStore::new();
        assert!(!store.remove_if_present(e(0), "A"));
        assert!(!store.has_bucket("A"));

        store.add(e(0), Component::new("A", ()));
        assert!(store.remove_if_present(e(0), "A"));
        assert!(!store.remove_if_present(e(0), "A"));
    }

    #[test]
    fn test_entity_count_counts_distinct_owners() {
        let mut store = ComponentStore::new();
        assert_eq!(store.entity_count(), 0);
        store.add(e(0), Component::new("A", ()));
        store.add(e(0), Component::new("B", ()));
        store.add(e(0), Component::new("B", ()));
        store.add(e(2), Component::new("B", ()));
        assert_eq!(store.entity_count(), 2);
    }

    #[test]
    fn test_remove_entity_touches_every_bucket() {
        let mut store = ComponentStore::new();
        store.add(e(0), Component::new("A", ()));
        store.add(e(0), Component::new("B", ()));
        store.add(e(1), Component::new("B", ()));

        assert_eq!(store.remove_entity(e(0)), 2);
        assert!(!store.entity_has_components(e(0)));
        assert!(store.entity_has_components(e(1)));
        assert_eq!(store.tags(), vec!["A", "B"]);
        assert_eq!(store.entity_count(), 1);
    }

    #[test]
    fn test_bucket_iterates_in_entity_order() {
        let mut store = ComponentStore::new();
        for id in [5, 1, 3] {
            store.add(e(id), Component::new("A", id));
        }
        let order: Vec<u64> = store.bucket("A").unwrap().keys().map(|e| e.id()).collect();
        assert_eq!(order, vec![1, 3, 5]);
    }
}
