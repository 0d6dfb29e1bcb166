//! # ecs_math
//!
//! Math components for the entity store. Re-exports [`glam`]'s `f64` vector
//! types and provides constructors that wrap them as tagged
//! [`Component`](ecs_core::Component)s, plus distance helpers.

pub mod distance;
pub mod vector;

// Re-export glam types for convenience.
pub use glam::{DVec2, DVec3};

pub use distance::{MathError, distance, distance_2d, distance_3d};
pub use vector::{
    VECTOR2, VECTOR3, VELOCITY2D, VELOCITY3D, vector2, vector3, velocity2d, velocity3d,
};
