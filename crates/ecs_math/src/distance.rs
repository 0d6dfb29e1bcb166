//! Euclidean distance between vector payloads.

use ecs_core::Component;
use glam::{DVec2, DVec3};

/// Errors from the erased distance helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// The two payloads are not both 2D or both 3D vectors.
    #[error("cannot mix {left} and {right} vectors")]
    MixedVectors {
        /// Payload type of the first component.
        left: &'static str,
        /// Payload type of the second component.
        right: &'static str,
    },
}

/// Distance between two 2D points.
#[must_use]
pub fn distance_2d(a: DVec2, b: DVec2) -> f64 {
    a.distance(b)
}

/// Distance between two 3D points.
#[must_use]
pub fn distance_3d(a: DVec3, b: DVec3) -> f64 {
    a.distance(b)
}

/// Distance between the payloads of two components, whatever their tags.
///
/// # Errors
///
/// [`MathError::MixedVectors`] unless both payloads are [`DVec2`] or both are
/// [`DVec3`].
pub fn distance(a: &Component, b: &Component) -> Result<f64, MathError> {
    if let (Ok(a), Ok(b)) = (a.downcast_ref::<DVec2>(), b.downcast_ref::<DVec2>()) {
        return Ok(distance_2d(*a, *b));
    }
    if let (Ok(a), Ok(b)) = (a.downcast_ref::<DVec3>(), b.downcast_ref::<DVec3>()) {
        return Ok(distance_3d(*a, *b));
    }
    Err(MathError::MixedVectors {
        left: a.data_type_name(),
        right: b.data_type_name(),
    })
}
