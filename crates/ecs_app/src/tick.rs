//! Fixed-step tick loop.
//!
//! Each tick runs every registered system once, in registration order, with
//! the configured step. Ticks are fully synchronous; nothing sleeps.

use ecs_core::Manager;
use ecs_system::{System, SystemError, TickReport};
use tracing::{debug, info, warn};

/// Configuration for the tick loop.
#[derive(Debug, Clone)]
pub struct TickConfig {
    /// Simulated seconds per tick.
    pub dt: f64,
    /// Number of ticks [`TickLoop::run`] executes.
    pub max_ticks: u64,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            dt: 1.0,
            max_ticks: 10,
        }
    }
}

/// Owns the manager and the systems that run against it.
pub struct TickLoop {
    tick_id: u64,
    config: TickConfig,
    manager: Manager,
    systems: Vec<Box<dyn System>>,
}

impl TickLoop {
    /// Create a tick loop over an existing manager.
    #[must_use]
    pub fn new(config: TickConfig, manager: Manager) -> Self {
        Self {
            tick_id: 0,
            config,
            manager,
            systems: Vec::new(),
        }
    }

    /// Append a system; systems run in the order they were added.
    pub fn add_system(&mut self, system: impl System + 'static) {
        info!(system = system.name(), "system registered");
        self.systems.push(Box::new(system));
    }

    /// Returns the number of ticks completed.
    #[must_use]
    pub fn tick_id(&self) -> u64 {
        self.tick_id
    }

    /// Returns a reference to the manager.
    #[must_use]
    pub fn manager(&self) -> &Manager {
        &self.manager
    }

    /// Run one tick of every system.
    ///
    /// # Errors
    ///
    /// The first [`SystemError`]; later systems in the same tick do not run.
    pub fn tick(&mut self) -> Result<TickReport, SystemError> {
        self.tick_id += 1;
        let mut report = TickReport::default();

        for system in &self.systems {
            let outcome = system.run(&mut self.manager, self.config.dt)?;
            debug!(
                tick_id = self.tick_id,
                system = system.name(),
                processed = outcome.processed,
                failed = outcome.failures.len(),
                "system ran"
            );
            report.merge(outcome);
        }

        if !report.is_clean() {
            warn!(
                tick_id = self.tick_id,
                failed = report.failures.len(),
                "tick finished with skipped entities"
            );
        }
        Ok(report)
    }

    /// Run [`TickConfig::max_ticks`] ticks, aggregating their reports.
    ///
    /// # Errors
    ///
    /// The first [`SystemError`] from any tick.
    pub fn run(&mut self) -> Result<TickReport, SystemError> {
        info!(
            dt = self.config.dt,
            max_ticks = self.config.max_ticks,
            systems = self.systems.len(),
            "starting tick loop"
        );

        let mut total = TickReport::default();
        for _ in 0..self.config.max_ticks {
            total.merge(self.tick()?);
        }

        info!(ticks = self.tick_id, processed = total.processed, "tick loop complete");
        Ok(total)
    }
}
