//! Allocation pass results.

use serde::{Deserialize, Serialize};

use crate::models::{JobId, Resource, ResourceId};

/// Whether a job got all of its pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    /// Every requested page was drawn.
    Completed,
    /// Capacity ran out before, or while, serving this job.
    Missing,
}

/// How much of a resource an allocation pass consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceState {
    /// Nothing drawn.
    Untouched,
    /// Some pages drawn, capacity left over.
    Partial,
    /// Drawn down to zero.
    Exhausted,
}

/// Per-job outcome. Listed in queue (priority) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOutcome {
    /// Job ID.
    pub job_id: JobId,
    /// Pages the job asked for.
    pub requested: i64,
    /// Pages actually drawn for the job.
    pub printed: i64,
    /// Completion status.
    pub status: JobStatus,
}

/// Per-resource outcome. Listed in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceUsage {
    /// The resource as supplied.
    pub resource: Resource,
    /// Pages drawn from it.
    pub drawn: i64,
    /// Consumption state.
    pub state: ResourceState,
}

/// A single capacity draw: `pages` of `job_id` served by `resource_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw {
    /// Job being served.
    pub job_id: JobId,
    /// Resource drawn from.
    pub resource_id: ResourceId,
    /// Pages drawn (always > 0).
    pub pages: i64,
}

/// Result of one allocation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Job outcomes in queue order.
    pub jobs: Vec<JobOutcome>,
    /// Resource usage in input order.
    pub resources: Vec<ResourceUsage>,
    /// Every draw, in the order it happened.
    pub draws: Vec<Draw>,
    /// Queue rank of the job at which capacity ran out.
    pub cascade_from: Option<usize>,
}

impl JobOutcome {
    /// Whether the job got every page.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.status == JobStatus::Completed
    }
}

impl ResourceUsage {
    /// Whether any capacity was drawn from this resource.
    #[inline]
    pub fn contributed(&self) -> bool {
        self.state != ResourceState::Untouched
    }

    /// Capacity left after the pass.
    #[inline]
    pub fn remaining(&self) -> i64 {
        self.resource.capacity.max(0) - self.drawn
    }
}

impl Allocation {
    /// IDs of incomplete jobs, in queue order.
    pub fn missing_job_ids(&self) -> Vec<JobId> {
        self.jobs
            .iter()
            .filter(|j| !j.is_completed())
            .map(|j| j.job_id)
            .collect()
    }

    /// IDs of completed jobs, in queue order.
    pub fn completed_job_ids(&self) -> Vec<JobId> {
        self.jobs
            .iter()
            .filter(|j| j.is_completed())
            .map(|j| j.job_id)
            .collect()
    }

    /// Resources nothing was drawn from, in input order.
    pub fn unused_resources(&self) -> Vec<Resource> {
        self.resources
            .iter()
            .filter(|r| !r.contributed())
            .map(|r| r.resource)
            .collect()
    }

    /// Whether every job was completed.
    pub fn all_completed(&self) -> bool {
        self.cascade_from.is_none()
    }

    /// Total pages drawn across all resources.
    pub fn total_drawn(&self) -> i128 {
        self.resources.iter().map(|r| i128::from(r.drawn)).sum()
    }

    /// Outcome for a job ID (first match).
    pub fn outcome_for_job(&self, job_id: JobId) -> Option<&JobOutcome> {
        self.jobs.iter().find(|j| j.job_id == job_id)
    }

    /// Draws made for a job ID.
    pub fn draws_for_job(&self, job_id: JobId) -> impl Iterator<Item = &Draw> {
        self.draws.iter().filter(move |d| d.job_id == job_id)
    }
}
