//! Combined allocation report.

use serde::{Deserialize, Serialize};

use super::AllocationKpi;
use crate::allocation::Allocation;
use crate::models::{JobId, Resource};

/// Every projection of one allocation pass, for front ends that want the
/// whole picture in a single call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationReport {
    /// Aggregate satisfaction percentage (0–100).
    pub satisfaction_percentage: u8,
    /// Job IDs in service order.
    pub queue: Vec<JobId>,
    /// IDs of missing jobs, in service order.
    pub missing_jobs: Vec<JobId>,
    /// Resources never drawn from, in input order.
    pub unused_resources: Vec<Resource>,
    /// Summary metrics.
    pub kpi: AllocationKpi,
    /// The underlying pass.
    pub allocation: Allocation,
}

impl AllocationReport {
    /// Whether every job can be printed.
    pub fn is_fully_serviced(&self) -> bool {
        self.missing_jobs.is_empty()
    }
}
