//! Resource (printer) model.
//!
//! A resource supplies a fixed page budget. The budget is shared across
//! every job it ends up serving; a single job may in turn draw from several
//! resources.

use serde::{Deserialize, Serialize};

use super::Job;

/// Resource identifier.
pub type ResourceId = u32;

/// A printer with a fixed page capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resource {
    /// Caller-assigned identifier.
    pub id: ResourceId,
    /// Total pages this resource can contribute. Must be non-negative.
    pub capacity: i64,
}

impl Resource {
    /// Creates a new resource.
    pub fn new(id: ResourceId, capacity: i64) -> Self {
        Self { id, capacity }
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: i64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Whether this resource alone could print the whole job.
    #[inline]
    pub fn can_print(&self, job: &Job) -> bool {
        job.pages <= self.capacity
    }
}
