//! Entity type and allocation utilities.
//!
//! An [`Entity`] is a lightweight `u64` identifier with no inherent data.
//! The [`EntityAllocator`] hands out fresh IDs from a counter and recycles
//! freed IDs first-freed-first-reused.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// A unique entity identifier.
///
/// Entities are pure identifiers: they carry no data of their own. Components
/// are attached to entities to give them meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Entity(pub u64);

impl Entity {
    /// Create an entity from a raw `u64` identifier.
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` identifier.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Allocates entity IDs, reusing freed IDs before issuing fresh ones.
///
/// IDs start at 0. The reuse pool is a FIFO queue: the ID freed earliest is
/// the first one handed out again.
#[derive(Debug, Default)]
pub struct EntityAllocator {
    next_id: u64,
    free: VecDeque<Entity>,
}

impl EntityAllocator {
    /// Creates a new allocator with an empty reuse pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates an entity ID, taking the head of the reuse pool if any.
    pub fn allocate(&mut self) -> Entity {
        if let Some(entity) = self.free.pop_front() {
            return entity;
        }
        let entity = Entity(self.next_id);
        self.next_id += 1;
        entity
    }

    /// Returns `entity` to the reuse pool.
    ///
    /// IDs this allocator never issued, and IDs already waiting in the pool,
    /// are ignored so the pool stays disjoint from live IDs. Returns whether
    /// the ID was queued.
    pub fn free(&mut self, entity: Entity) -> bool {
        if !self.is_issued(entity) {
            return false;
        }
        self.free.push_back(entity);
        true
    }

    /// Take `entity` back out of the reuse pool so it is not handed out
    /// again. Returns whether it was pooled.
    pub fn claim(&mut self, entity: Entity) -> bool {
        match self.free.iter().position(|&e| e == entity) {
            Some(index) => {
                self.free.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if `entity` is waiting in the reuse pool.
    #[must_use]
    pub fn is_pooled(&self, entity: Entity) -> bool {
        self.free.contains(&entity)
    }

    /// Returns `true` if `entity` has been handed out and not freed since.
    #[must_use]
    pub fn is_issued(&self, entity: Entity) -> bool {
        entity.0 < self.next_id && !self.free.contains(&entity)
    }

    /// Number of IDs waiting in the reuse pool.
    #[must_use]
    pub fn pooled(&self) -> usize {
        self.free.len()
    }

    /// The ID the allocator will hand out once the pool is drained.
    #[must_use]
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}
