//! # ecs_system
//!
//! Systems are per-tick functions of `(Manager, dt)`: each one joins the
//! entities holding its required components, computes new values, and
//! writes them back.
//!
//! ## Usage
//!
//! ```rust
//! use ecs_core::Manager;
//! use ecs_math::{DVec2, VECTOR2, vector2, velocity2d};
//! use ecs_system::{MovementSystem, System};
//!
//! let mut manager = Manager::new();
//! let e = manager.create_entity();
//! manager.add_component_to_entity(e, vector2(0.0, 0.0));
//! manager.add_component_to_entity(e, velocity2d(1.0, 1.0));
//!
//! let report = MovementSystem::default().run(&mut manager, 1.0).unwrap();
//! assert_eq!(report.processed, 1);
//!
//! let pos = manager.get_component_of_entity(e, VECTOR2).unwrap();
//! assert_eq!(pos.get_data_as_type::<DVec2>().unwrap(), DVec2::new(1.0, 1.0));
//! ```

pub mod config;
pub mod error;
pub mod movement;
pub mod report;

pub use config::{FailurePolicy, SystemConfig};
pub use error::SystemError;
pub use movement::MovementSystem;
pub use report::{EntityFailure, TickReport};

use ecs_core::Manager;

/// A unit of per-tick simulation logic.
pub trait System {
    /// Human-readable system name, used in logs and reports.
    fn name(&self) -> &str;

    /// Run one tick with step `dt` seconds.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError`] when the tick as a whole cannot proceed, or on
    /// the first per-entity failure under [`FailurePolicy::Abort`].
    fn run(&self, manager: &mut Manager, dt: f64) -> Result<TickReport, SystemError>;
}
