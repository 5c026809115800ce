//! Job (print document) model.
//!
//! A job is a unit of demand: a number of pages waiting to be printed,
//! ranked by priority.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1

use serde::{Deserialize, Serialize};

/// Job identifier.
pub type JobId = u32;

/// A print job.
///
/// # Priority Convention
/// **Lower value = more urgent.** A job with priority 1 is served before a
/// job with priority 2. Jobs with equal priority keep their input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Job {
    /// Caller-assigned identifier.
    pub id: JobId,
    /// Scheduling priority (lower = served first).
    pub priority: i32,
    /// Number of pages to print. Must be non-negative.
    pub pages: i64,
}

impl Job {
    /// Creates a new job.
    pub fn new(id: JobId, priority: i32, pages: i64) -> Self {
        Self {
            id,
            priority,
            pages,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the page count.
    pub fn with_pages(mut self, pages: i64) -> Self {
        self.pages = pages;
        self
    }
}
