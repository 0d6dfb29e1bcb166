//! # ecs_core
//!
//! A minimal entity-component store.
//!
//! This crate provides:
//!
//! - [`Entity`] — lightweight `u64` entity identifiers.
//! - [`EntityAllocator`] — sequential ID allocator with FIFO reuse of freed IDs.
//! - [`Component`] — a type tag plus a type-erased payload, read back through
//!   checked downcasts.
//! - [`ComponentStore`] — per-tag buckets of entity-to-components sequences.
//! - [`Query`] — multi-tag joins used by systems to find their entities.
//! - [`Manager`] — the public surface tying the pieces together.

pub mod component;
pub mod entity;
pub mod error;
pub mod manager;
pub mod query;
pub mod store;

pub use component::{Component, ComponentData, get_component_data, get_latest_component_data};
pub use entity::{Entity, EntityAllocator};
pub use error::{EcsError, Result};
pub use manager::Manager;
pub use query::{JoinResult, Query};
pub use store::{Bucket, ComponentStore};
