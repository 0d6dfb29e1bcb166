//! Per-tick outcome of a system run.

use ecs_core::{EcsError, Entity};
use serde::Serialize;

/// An entity a system skipped, and why.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityFailure {
    /// The skipped entity.
    pub entity: Entity,
    /// What went wrong.
    pub error: EcsError,
}

/// What a system did during one tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TickReport {
    /// Entities updated successfully.
    pub processed: usize,
    /// Entities skipped under [`FailurePolicy::SkipAndLog`](crate::FailurePolicy::SkipAndLog).
    #[serde(serialize_with = "serialize_failures")]
    pub failures: Vec<EntityFailure>,
}

impl TickReport {
    /// Returns `true` if no entity was skipped.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: TickReport) {
        self.processed += other.processed;
        self.failures.extend(other.failures);
    }
}

fn serialize_failures<S: serde::Serializer>(
    failures: &[EntityFailure],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(failures.iter().map(|f| (f.entity, f.error.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge() {
        let mut total = TickReport::default();
        assert!(total.is_clean());

        total.merge(TickReport {
            processed: 2,
            failures: vec![],
        });
        total.merge(TickReport {
            processed: 1,
            failures: vec![EntityFailure {
                entity: Entity::from_raw(4),
                error: EcsError::ComponentTypeNotFound("A".into()),
            }],
        });

        assert_eq!(total.processed, 3);
        assert!(!total.is_clean());
    }

    #[test]
    fn test_failures_serialize_as_entity_message_pairs() {
        let report = TickReport {
            processed: 1,
            failures: vec![EntityFailure {
                entity: Entity::from_raw(4),
                error: EcsError::ComponentTypeNotFound("A".into()),
            }],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "processed": 1,
                "failures": [[4, "component type 'A' not found"]]
            })
        );
    }
}
