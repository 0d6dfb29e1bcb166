//! Movement system: integrates 2D velocity into 2D position.
//!
//! Reads the latest `Velocity2D` and `Vector2` of every entity holding both,
//! and replaces the position with `position + velocity * dt`. Velocities may
//! stack; only the most recent one is applied.

use ecs_core::{Component, EcsError, Manager, get_latest_component_data};
use ecs_math::{DVec2, VECTOR2, VELOCITY2D, vector2};
use tracing::{debug, warn};

use crate::config::{FailurePolicy, SystemConfig};
use crate::error::SystemError;
use crate::report::{EntityFailure, TickReport};
use crate::System;

/// Integrates `Velocity2D` into `Vector2` once per tick.
#[derive(Debug, Clone)]
pub struct MovementSystem {
    config: SystemConfig,
}

impl MovementSystem {
    /// Create a movement system with the given config.
    #[must_use]
    pub fn new(config: SystemConfig) -> Self {
        Self { config }
    }

    /// The system's configuration.
    #[must_use]
    pub fn config(&self) -> &SystemConfig {
        &self.config
    }
}

impl Default for MovementSystem {
    fn default() -> Self {
        Self::new(SystemConfig::new("movement"))
    }
}

impl System for MovementSystem {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn run(&self, manager: &mut Manager, dt: f64) -> Result<TickReport, SystemError> {
        let entities = manager
            .get_entities_with_components(&[VECTOR2, VELOCITY2D])
            .map_err(|source| SystemError::Store {
                system: self.config.name.clone(),
                source,
            })?;

        let mut report = TickReport::default();
        for (entity, components) in entities {
            match integrate(&components, dt) {
                Ok(position) => {
                    debug!(%entity, x = position.x, y = position.y, "moved");
                    manager.replace_component(entity, vector2(position.x, position.y));
                    report.processed += 1;
                }
                Err(source) => match self.config.failure_policy {
                    FailurePolicy::Abort => {
                        return Err(SystemError::Entity {
                            system: self.config.name.clone(),
                            entity,
                            source,
                        });
                    }
                    FailurePolicy::SkipAndLog => {
                        warn!(system = self.config.name.as_str(), %entity, error = %source, "skipping entity");
                        report.failures.push(EntityFailure {
                            entity,
                            error: source,
                        });
                    }
                },
            }
        }

        Ok(report)
    }
}

fn integrate(components: &[Component], dt: f64) -> Result<DVec2, EcsError> {
    let position: DVec2 = get_latest_component_data(components, VECTOR2)?;
    let velocity: DVec2 = get_latest_component_data(components, VELOCITY2D)?;
    Ok(position + velocity * dt)
}
