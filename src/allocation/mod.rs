//! Greedy capacity allocation.
//!
//! One allocation pass walks the job queue in priority order and drains
//! the resource pool through a single forward cursor shared by every job.
//! A job may span several resources and a resource may serve several jobs.
//! Capacity is never returned: once the cursor runs off the end of the
//! pool, the job being served and every later job are missing.
//!
//! # Usage
//!
//! ```
//! use u_printq::allocation::Allocator;
//! use u_printq::models::{Job, Resource};
//! use u_printq::ordering::{priority_order, resource_order, ResourceOrder, TieBreaker};
//!
//! let jobs = vec![Job::new(1, 1, 3), Job::new(2, 2, 5)];
//! let printers = vec![Resource::new(1, 4), Resource::new(2, 2)];
//!
//! let allocation = Allocator::new(&jobs, &printers).run(
//!     &priority_order(&jobs, TieBreaker::InputOrder),
//!     &resource_order(&printers, ResourceOrder::AscendingCapacity),
//! );
//! assert_eq!(allocation.missing_job_ids(), vec![2]);
//! ```

mod allocator;
mod cursor;
mod outcome;

pub use allocator::Allocator;
pub use outcome::{Allocation, Draw, JobOutcome, JobStatus, ResourceState, ResourceUsage};
