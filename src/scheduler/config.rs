//! Scheduler configuration.

use serde::{Deserialize, Serialize};

use crate::ordering::{ResourceOrder, TieBreaker};

/// Configuration for [`PrintScheduler`](super::PrintScheduler).
///
/// The defaults give the standard print-queue policy: stable priority
/// order, smallest printers drained first, inputs validated.
///
/// # Examples
///
/// ```
/// use u_printq::ordering::{ResourceOrder, TieBreaker};
/// use u_printq::scheduler::SchedulerConfig;
///
/// let config = SchedulerConfig::default()
///     .with_tie_breaker(TieBreaker::ById)
///     .with_resource_order(ResourceOrder::AscendingCapacity);
/// assert!(config.validate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Order in which printers are drained.
    pub resource_order: ResourceOrder,
    /// How equal-priority jobs are ordered.
    pub tie_breaker: TieBreaker,
    /// Reject negative pages/capacity before computing. When disabled,
    /// negative amounts count as zero.
    pub validate: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            resource_order: ResourceOrder::AscendingCapacity,
            tie_breaker: TieBreaker::InputOrder,
            validate: true,
        }
    }
}

impl SchedulerConfig {
    pub fn with_resource_order(mut self, order: ResourceOrder) -> Self {
        self.resource_order = order;
        self
    }

    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}
