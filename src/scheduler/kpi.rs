//! Allocation quality metrics (KPIs).
//!
//! Computes summary indicators from a finished allocation pass.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Pages Requested | Sum of job page counts |
//! | Pages Printed | Sum of pages drawn |
//! | Fill Rate | Printed / requested |
//! | Completion Rate | Completed jobs / all jobs |
//! | Utilization | Drawn / capacity, per resource |

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::allocation::Allocation;
use crate::models::ResourceId;

/// Allocation performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationKpi {
    /// Sum of requested pages.
    pub pages_requested: i128,
    /// Sum of pages drawn (including partial jobs).
    pub pages_printed: i128,
    /// Number of completed jobs.
    pub completed_jobs: usize,
    /// Number of missing jobs.
    pub missing_jobs: usize,
    /// Printed / requested (0.0..1.0). 1.0 when nothing was requested.
    pub fill_rate: f64,
    /// Completed / all jobs (0.0..1.0). 1.0 when there are no jobs.
    pub completion_rate: f64,
    /// Per-resource utilization. Zero-capacity resources report 0.0.
    pub utilization_by_resource: HashMap<ResourceId, f64>,
    /// Mean utilization over resources with nonzero capacity.
    pub avg_utilization: f64,
}

impl AllocationKpi {
    /// Computes KPIs from an allocation pass.
    pub fn calculate(allocation: &Allocation) -> Self {
        let pages_requested: i128 = allocation
            .jobs
            .iter()
            .map(|j| i128::from(j.requested))
            .sum();
        let pages_printed = allocation.total_drawn();
        let completed_jobs = allocation.jobs.iter().filter(|j| j.is_completed()).count();
        let missing_jobs = allocation.jobs.len() - completed_jobs;

        let fill_rate = if pages_requested == 0 {
            1.0
        } else {
            pages_printed as f64 / pages_requested as f64
        };

        let completion_rate = if allocation.jobs.is_empty() {
            1.0
        } else {
            completed_jobs as f64 / allocation.jobs.len() as f64
        };

        let mut utilization_by_resource = HashMap::new();
        let mut util_sum = 0.0;
        let mut util_count = 0usize;
        for usage in &allocation.resources {
            let capacity = usage.resource.capacity.max(0);
            let util = if capacity == 0 {
                0.0
            } else {
                util_count += 1;
                usage.drawn as f64 / capacity as f64
            };
            util_sum += util;
            // Duplicate IDs: last one wins
            utilization_by_resource.insert(usage.resource.id, util);
        }

        let avg_utilization = if util_count == 0 {
            0.0
        } else {
            util_sum / util_count as f64
        };

        Self {
            pages_requested,
            pages_printed,
            completed_jobs,
            missing_jobs,
            fill_rate,
            completion_rate,
            utilization_by_resource,
            avg_utilization,
        }
    }

    /// Whether the pass meets the given fill-rate threshold.
    pub fn meets_fill_rate(&self, min_fill_rate: f64) -> bool {
        self.fill_rate >= min_fill_rate
    }
}
