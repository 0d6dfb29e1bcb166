//! Multi-tick movement scenarios.
//!
//! Each tick pushes a new velocity onto every entity (velocities stack) and
//! then runs the movement system once with `dt = 1.0`. The end position must
//! equal the start position plus the sum of the applied velocities.

use ecs_core::{Entity, Manager};
use ecs_math::{DVec2, VECTOR2, vector2, velocity2d};
use ecs_system::{MovementSystem, System};

struct Scenario {
    name: &'static str,
    start_positions: &'static [(f64, f64)],
    velocity_changes: &'static [(f64, f64)],
    expected_end_positions: &'static [(f64, f64)],
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "straight line",
        start_positions: &[(0.0, 0.0), (-1.0, 1.0)],
        velocity_changes: &[(1.0, 0.0); 5],
        expected_end_positions: &[(5.0, 0.0), (4.0, 1.0)],
    },
    Scenario {
        name: "diagonal",
        start_positions: &[(0.0, 0.0), (1.0, 1.0)],
        velocity_changes: &[(1.0, 1.0); 5],
        expected_end_positions: &[(5.0, 5.0), (6.0, 6.0)],
    },
    Scenario {
        name: "zigzag",
        start_positions: &[(0.0, 0.0), (-1.0, 1.0)],
        velocity_changes: &[(1.0, 0.0), (0.0, 1.0), (1.0, 0.0), (0.0, 1.0), (1.0, 0.0)],
        expected_end_positions: &[(3.0, 2.0), (2.0, 3.0)],
    },
    Scenario {
        name: "negative",
        start_positions: &[(0.0, 0.0), (-1.0, 0.0)],
        velocity_changes: &[(-1.0, 0.0); 5],
        expected_end_positions: &[(-5.0, 0.0), (-6.0, 0.0)],
    },
    Scenario {
        name: "mixed",
        start_positions: &[(0.0, 0.0), (-1.0, 2.0)],
        velocity_changes: &[(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0), (1.0, 0.0)],
        expected_end_positions: &[(1.0, 0.0), (0.0, 2.0)],
    },
];

fn position(manager: &Manager, entity: Entity) -> DVec2 {
    manager
        .get_component_of_entity(entity, VECTOR2)
        .unwrap()
        .get_data_as_type()
        .unwrap()
}

#[test]
fn test_movement_sequences() {
    let system = MovementSystem::default();

    for scenario in SCENARIOS {
        let mut manager = Manager::new();
        let entities: Vec<Entity> = scenario
            .start_positions
            .iter()
            .map(|&(x, y)| {
                let entity = manager.create_entity();
                manager.add_component_to_entity(entity, vector2(x, y));
                entity
            })
            .collect();

        for &(vx, vy) in scenario.velocity_changes {
            for &entity in &entities {
                manager.add_component_to_entity(entity, velocity2d(vx, vy));
            }
            let report = system.run(&mut manager, 1.0).unwrap();
            assert_eq!(report.processed, entities.len(), "{}", scenario.name);
        }

        for (entity, &(x, y)) in entities.iter().zip(scenario.expected_end_positions) {
            assert_eq!(
                position(&manager, *entity),
                DVec2::new(x, y),
                "{}",
                scenario.name
            );
        }
    }
}

#[test]
fn test_entities_without_velocity_are_untouched() {
    let system = MovementSystem::default();
    let mut manager = Manager::new();

    let mover = manager.create_entity();
    let idle = manager.create_entity();
    manager.add_component_to_entity(mover, vector2(0.0, 0.0));
    manager.add_component_to_entity(mover, velocity2d(0.0, 2.0));
    manager.add_component_to_entity(idle, vector2(7.0, 7.0));

    let report = system.run(&mut manager, 1.0).unwrap();
    assert_eq!(report.processed, 1);
    assert_eq!(position(&manager, mover), DVec2::new(0.0, 2.0));
    assert_eq!(position(&manager, idle), DVec2::new(7.0, 7.0));
}

#[test]
fn test_deleted_entity_stops_moving_and_id_is_reused() {
    let system = MovementSystem::default();
    let mut manager = Manager::new();

    let e0 = manager.create_entity();
    manager.add_component_to_entity(e0, vector2(0.0, 0.0));
    manager.add_component_to_entity(e0, velocity2d(1.0, 0.0));
    system.run(&mut manager, 1.0).unwrap();

    manager.delete_entity(e0).unwrap();
    let report = system.run(&mut manager, 1.0).unwrap();
    assert_eq!(report.processed, 0);

    let reused = manager.create_entity();
    assert_eq!(reused, e0);
    assert!(manager.get_component_of_entity(reused, VECTOR2).is_err());
}
