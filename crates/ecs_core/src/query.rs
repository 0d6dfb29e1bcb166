//! Multi-tag join queries.
//!
//! A [`Query`] names the component tags an entity must hold. Running it
//! returns every entity with at least one component of each tag, together
//! with those components.

use std::collections::{BTreeMap, BTreeSet};

use crate::component::Component;
use crate::entity::Entity;
use crate::error::Result;
use crate::store::ComponentStore;

/// Join result: matching entities in ascending order, each with its
/// components grouped by requested tag (request order), each group in
/// insertion order.
pub type JoinResult = BTreeMap<Entity, Vec<Component>>;

/// The set of component tags a system requires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Required tags, in request order. Duplicates are ignored when run.
    pub tags: Vec<String>,
}

impl Query {
    /// Create an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a query from a list of tags.
    #[must_use]
    pub fn from_tags<S: AsRef<str>>(tags: &[S]) -> Self {
        Self {
            tags: tags.iter().map(|t| t.as_ref().to_string()).collect(),
        }
    }

    /// Require a component tag.
    #[must_use]
    pub fn with(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Run the join against `store`.
    ///
    /// Every requested tag must have a bucket before anything is accumulated.
    /// Entities from each bucket are then unioned into the result, and any
    /// entity whose accumulated tags do not cover the full request is
    /// dropped.
    ///
    /// # Errors
    ///
    /// [`EcsError::ComponentTypeNotFound`](crate::EcsError::ComponentTypeNotFound)
    /// for the first requested tag with no bucket.
    pub fn run(&self, store: &ComponentStore) -> Result<JoinResult> {
        let mut seen = BTreeSet::new();
        let mut buckets = Vec::with_capacity(self.tags.len());
        for tag in &self.tags {
            let bucket = store.bucket(tag)?;
            if seen.insert(tag.as_str()) {
                buckets.push(bucket);
            }
        }

        let mut result = JoinResult::new();
        for bucket in buckets {
            for (entity, components) in bucket {
                result
                    .entry(*entity)
                    .or_default()
                    .extend(components.iter().cloned());
            }
        }

        result.retain(|_, components| {
            let present: BTreeSet<&str> = components.iter().map(Component::tag).collect();
            seen.is_subset(&present)
        });
        Ok(result)
    }
}
