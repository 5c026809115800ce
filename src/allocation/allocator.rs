//! Cursor-based greedy allocator.
//!
//! # Algorithm
//!
//! 1. Load the first resource of the drain order at full capacity.
//! 2. For each job in queue order, draw `min(need, remaining)` from the
//!    resource under the cursor until the job is satisfied, advancing the
//!    cursor whenever a resource is exhausted.
//! 3. If the cursor runs past the end while a job still needs pages, that
//!    job and every later job are missing. Nothing is left to inspect.
//!
//! The partially drained resource under the cursor carries over from one
//! job to the next.
//!
//! # Complexity
//! O(n + m) draws for n jobs and m resources, plus the caller's sorts.

use tracing::{debug, trace};

use super::cursor::Cursor;
use super::outcome::{Allocation, Draw, JobOutcome, JobStatus, ResourceState, ResourceUsage};
use crate::models::{Job, Resource};

/// Greedy allocator over a borrowed job/resource snapshot.
///
/// Holds no state between passes; every call to [`Allocator::run`] starts
/// from full capacity.
#[derive(Debug, Clone, Copy)]
pub struct Allocator<'a> {
    jobs: &'a [Job],
    resources: &'a [Resource],
}

impl<'a> Allocator<'a> {
    /// Creates an allocator over the given snapshot.
    pub fn new(jobs: &'a [Job], resources: &'a [Resource]) -> Self {
        Self { jobs, resources }
    }

    /// Runs one allocation pass.
    ///
    /// # Arguments
    /// * `job_queue` - Indices into the job slice, in service order.
    /// * `drain_order` - Indices into the resource slice, in drain order.
    ///
    /// Negative pages or capacities are treated as zero; callers that need
    /// them rejected validate first.
    ///
    /// `drain_order` must not repeat a resource: a repeated index would load
    /// its capacity twice. Debug builds assert this.
    ///
    /// # Panics
    /// If an index is out of bounds for its slice, or (debug builds) if
    /// `drain_order` repeats an index.
    pub fn run(&self, job_queue: &[usize], drain_order: &[usize]) -> Allocation {
        debug_assert!(
            indices_unique(drain_order, self.resources.len()),
            "drain order repeats a resource"
        );
        let capacities: Vec<i64> = drain_order
            .iter()
            .map(|&r| self.resources[r].capacity.max(0))
            .collect();
        let mut drawn = vec![0i64; self.resources.len()];
        let mut draws = Vec::new();
        let mut outcomes = Vec::with_capacity(job_queue.len());
        let mut cascade_from = None;
        let mut cursor = Cursor::start(&capacities);

        for (rank, &j) in job_queue.iter().enumerate() {
            let job = &self.jobs[j];
            let requested = job.pages.max(0);

            if cascade_from.is_some() {
                outcomes.push(JobOutcome {
                    job_id: job.id,
                    requested,
                    printed: 0,
                    status: JobStatus::Missing,
                });
                continue;
            }

            let mut need = requested;
            while need > 0 {
                let Some((position, remaining)) = cursor.current(&capacities) else {
                    debug!(
                        job_id = job.id,
                        rank,
                        short_by = need,
                        "resource pool exhausted; remaining jobs missing"
                    );
                    cascade_from = Some(rank);
                    break;
                };

                let r = drain_order[position];
                let take = need.min(remaining);
                cursor.draw(take);
                need -= take;
                drawn[r] += take;
                trace!(
                    job_id = job.id,
                    resource_id = self.resources[r].id,
                    pages = take,
                    "draw"
                );
                draws.push(Draw {
                    job_id: job.id,
                    resource_id: self.resources[r].id,
                    pages: take,
                });
            }

            outcomes.push(JobOutcome {
                job_id: job.id,
                requested,
                printed: requested - need,
                status: if need == 0 {
                    JobStatus::Completed
                } else {
                    JobStatus::Missing
                },
            });
        }

        let resources: Vec<ResourceUsage> = self
            .resources
            .iter()
            .zip(&drawn)
            .map(|(resource, &drawn)| ResourceUsage {
                resource: *resource,
                drawn,
                state: usage_state(drawn, resource.capacity.max(0)),
            })
            .collect();

        debug!(
            jobs = outcomes.len(),
            resources = resources.len(),
            draws = draws.len(),
            cascade_from = ?cascade_from,
            "allocation pass finished"
        );

        Allocation {
            jobs: outcomes,
            resources,
            draws,
            cascade_from,
        }
    }
}

fn indices_unique(indices: &[usize], len: usize) -> bool {
    let mut seen = vec![false; len];
    indices.iter().all(|&i| match seen.get_mut(i) {
        Some(slot) => !std::mem::replace(slot, true),
        // Out of bounds is reported by the indexing panic instead
        None => true,
    })
}

fn usage_state(drawn: i64, capacity: i64) -> ResourceState {
    if drawn == 0 {
        ResourceState::Untouched
    } else if drawn < capacity {
        ResourceState::Partial
    } else {
        ResourceState::Exhausted
    }
}
