//! System configuration.

/// What a system does when a single entity fails mid-tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log the failure, record it in the report, and continue with the next
    /// entity.
    #[default]
    SkipAndLog,
    /// Stop the tick and return the first failure.
    Abort,
}

/// Configuration shared by all systems.
#[derive(Debug, Clone)]
pub struct SystemConfig {
    /// Human-readable system name (e.g. `"movement"`).
    pub name: String,
    /// Per-entity failure handling.
    pub failure_policy: FailurePolicy,
}

impl SystemConfig {
    /// Create a new config with the given name and the default policy.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            failure_policy: FailurePolicy::default(),
        }
    }

    /// Override the failure policy.
    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Shorthand for [`FailurePolicy::Abort`].
    #[must_use]
    pub fn strict(self) -> Self {
        self.with_failure_policy(FailurePolicy::Abort)
    }
}
