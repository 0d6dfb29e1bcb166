//! Vector component constructors.
//!
//! Positions and velocities share the same payload types ([`DVec2`] and
//! [`DVec3`]) and are told apart only by their tag.

use ecs_core::Component;
use glam::{DVec2, DVec3};

/// Tag for 2D positions.
pub const VECTOR2: &str = "Vector2";
/// Tag for 3D positions.
pub const VECTOR3: &str = "Vector3";
/// Tag for 2D velocities.
pub const VELOCITY2D: &str = "Velocity2D";
/// Tag for 3D velocities.
pub const VELOCITY3D: &str = "Velocity3D";

/// A 2D position component.
#[must_use]
pub fn vector2(x: f64, y: f64) -> Component {
    Component::new(VECTOR2, DVec2::new(x, y))
}

/// A 3D position component.
#[must_use]
pub fn vector3(x: f64, y: f64, z: f64) -> Component {
    Component::new(VECTOR3, DVec3::new(x, y, z))
}

/// A 2D velocity component, in units per second.
#[must_use]
pub fn velocity2d(x: f64, y: f64) -> Component {
    Component::new(VELOCITY2D, DVec2::new(x, y))
}

/// A 3D velocity component, in units per second.
#[must_use]
pub fn velocity3d(x: f64, y: f64, z: f64) -> Component {
    Component::new(VELOCITY3D, DVec3::new(x, y, z))
}
