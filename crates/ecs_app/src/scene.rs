//! Demo scene setup and end-of-run summary.

use ecs_core::{EcsError, Entity, Manager};
use ecs_math::{DVec2, MathError, VECTOR2, distance, vector2, velocity2d};
use serde::Serialize;

/// Spawn `count` movers. Mover `i` starts at `(i, 0)` and moves at
/// `(1, i % 3)` units per second.
pub fn spawn_movers(manager: &mut Manager, count: u64) -> Vec<Entity> {
    (0..count)
        .map(|i| {
            let entity = manager.create_entity();
            let i = i as f64;
            manager.add_component_to_entity(entity, vector2(i, 0.0));
            manager.add_component_to_entity(entity, velocity2d(1.0, i % 3.0));
            entity
        })
        .collect()
}

/// Final state of one mover.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoverSummary {
    /// The mover.
    pub entity: Entity,
    /// Final position.
    pub position: DVec2,
    /// Distance from the origin.
    pub distance_from_origin: f64,
}

/// Errors while building the summary.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    /// Reading the position failed.
    #[error(transparent)]
    Store(#[from] EcsError),
    /// The position payload was not a 2D vector.
    #[error(transparent)]
    Math(#[from] MathError),
}

/// Read back every mover's final position.
///
/// # Errors
///
/// [`SummaryError`] if a mover lost its position or holds a foreign payload.
pub fn summarize(manager: &Manager, movers: &[Entity]) -> Result<Vec<MoverSummary>, SummaryError> {
    let origin = vector2(0.0, 0.0);
    movers
        .iter()
        .map(|&entity| -> Result<MoverSummary, SummaryError> {
            let component = manager.get_component_of_entity(entity, VECTOR2)?;
            Ok(MoverSummary {
                entity,
                position: component.get_data_as_type()?,
                distance_from_origin: distance(&component, &origin)?,
            })
        })
        .collect()
}
