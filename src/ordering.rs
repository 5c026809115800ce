//! Job and resource orderings for the allocation pass.
//!
//! Every ordering is expressed as a vector of indices into the caller's
//! slice, so results can always be mapped back to input positions.
//! All sorts are stable (`slice::sort_by_key`), so equal keys keep
//! their input order unless a tie-breaker says otherwise.

use serde::{Deserialize, Serialize};

use crate::models::{Job, Resource};

/// How jobs with equal priority are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreaker {
    /// Keep input order (stable).
    #[default]
    InputOrder,
    /// Ascending job ID, then input order.
    ById,
}

/// Order in which the resource pool is drained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceOrder {
    /// Smallest capacity first. Small printers are used up before large
    /// ones are touched, so surplus stays on the largest printers.
    #[default]
    AscendingCapacity,
    /// Largest capacity first.
    DescendingCapacity,
    /// Caller's order, unchanged.
    InputOrder,
}

/// Returns job indices sorted by ascending priority.
pub fn priority_order(jobs: &[Job], tie_breaker: TieBreaker) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..jobs.len()).collect();
    match tie_breaker {
        TieBreaker::InputOrder => indices.sort_by_key(|&i| jobs[i].priority),
        TieBreaker::ById => indices.sort_by_key(|&i| (jobs[i].priority, jobs[i].id)),
    }
    indices
}

/// Returns resource indices in drain order.
pub fn resource_order(resources: &[Resource], order: ResourceOrder) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..resources.len()).collect();
    match order {
        ResourceOrder::AscendingCapacity => indices.sort_by_key(|&i| resources[i].capacity),
        ResourceOrder::DescendingCapacity => {
            indices.sort_by_key(|&i| std::cmp::Reverse(resources[i].capacity))
        }
        ResourceOrder::InputOrder => {}
    }
    indices
}

/// Sorts jobs in place by ascending priority (stable).
///
/// Agrees with [`priority_order`] for the same tie-breaker.
pub fn sort_by_priority(jobs: &mut [Job], tie_breaker: TieBreaker) {
    match tie_breaker {
        TieBreaker::InputOrder => jobs.sort_by_key(|j| j.priority),
        TieBreaker::ById => jobs.sort_by_key(|j| (j.priority, j.id)),
    }
}

/// Returns the most urgent job, the head of [`priority_order`].
///
/// `None` for an empty slice.
pub fn next_job(jobs: &[Job], tie_breaker: TieBreaker) -> Option<Job> {
    // min_by_key keeps the first of equal keys
    match tie_breaker {
        TieBreaker::InputOrder => jobs.iter().copied().min_by_key(|j| j.priority),
        TieBreaker::ById => jobs.iter().copied().min_by_key(|j| (j.priority, j.id)),
    }
}
